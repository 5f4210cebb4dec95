use serde::{Deserialize, Serialize};

use crate::ids::{ConvoyId, VehicleId};

/// A single vehicle belonging to a convoy.
///
/// Vehicle rosters are fetched on demand per convoy and are never part of
/// the unified state document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    pub convoy_id: ConvoyId,
    pub kind: String,
    pub callsign: String,
    #[serde(default)]
    pub fuel_pct: Option<f64>,
}
