use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ids::RouteId;
use crate::status::RouteStatus;

/// A supply route between two named locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,
    pub name: String,
    pub status: RouteStatus,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub length_km: Option<f64>,
    /// Ordered polyline of the route. May be empty for routes the backend
    /// has not surveyed yet.
    #[serde(default)]
    pub waypoints: Vec<GeoPoint>,
}
