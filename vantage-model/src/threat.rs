use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ids::{RouteId, ThreatId};
use crate::status::{ThreatKind, ThreatSeverity};

/// A reported threat, optionally pinned to a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Threat {
    pub id: ThreatId,
    pub kind: ThreatKind,
    pub severity: ThreatSeverity,
    /// Backend-computed score in `[0.0, 1.0]`; higher is worse.
    pub score: f64,
    #[serde(default)]
    pub position: Option<GeoPoint>,
    /// Route the threat endangers. Absent for area threats.
    #[serde(default)]
    pub route_id: Option<RouteId>,
    pub reported_at: DateTime<Utc>,
}
