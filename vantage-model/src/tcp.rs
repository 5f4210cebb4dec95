use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::ids::{RouteId, TcpId};
use crate::status::TcpStatus;

/// A traffic control point along a route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficControlPoint {
    pub id: TcpId,
    pub name: String,
    pub position: GeoPoint,
    pub status: TcpStatus,
    #[serde(default)]
    pub route_id: Option<RouteId>,
    /// Vehicles per hour the checkpoint can pass.
    #[serde(default)]
    pub throughput_per_hour: Option<u32>,
}
