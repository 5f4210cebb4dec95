use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ids::AssetId;
use crate::status::AssetStatus;

/// Kind of supporting asset available to the operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetKind {
    Uav,
    QuickReactionForce,
    Medevac,
    Engineering,
    Logistics,
    #[serde(other)]
    Unknown,
}

/// A supporting military asset shown on the map alongside convoys.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilitaryAsset {
    pub id: AssetId,
    pub callsign: String,
    pub kind: AssetKind,
    pub status: AssetStatus,
    #[serde(default)]
    pub position: Option<GeoPoint>,
}
