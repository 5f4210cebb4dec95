use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ids::{ConvoyId, RouteId};
use crate::status::ConvoyStatus;

/// A convoy as reported in the unified state document.
///
/// Convoys are created and destroyed entirely server-side; the client only
/// ever replaces the whole collection on a successful poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Convoy {
    pub id: ConvoyId,
    pub callsign: String,
    pub status: ConvoyStatus,
    /// Route the convoy is assigned to, if any.
    #[serde(default)]
    pub route_id: Option<RouteId>,
    /// Last reported position. Absent while the convoy is forming.
    #[serde(default)]
    pub position: Option<GeoPoint>,
    #[serde(default)]
    pub cargo: Option<CargoManifest>,
    /// Maximum cargo capacity in tonnes.
    #[serde(default)]
    pub capacity_tonnes: Option<f64>,
    pub vehicle_count: u32,
    #[serde(default)]
    pub speed_kmh: Option<f64>,
    /// The convoy's current tasking, at most one at a time.
    #[serde(default)]
    pub mission: Option<Mission>,
}

/// What a convoy is carrying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CargoManifest {
    pub description: String,
    pub tonnes: f64,
}

/// Tasking attached to a convoy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub objective: String,
    pub priority: u8,
    #[serde(default)]
    pub departs_at: Option<DateTime<Utc>>,
}
