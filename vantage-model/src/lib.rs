//! Core data model definitions shared across Vantage crates.
#![allow(missing_docs)]

pub mod asset;
pub mod convoy;
pub mod geo;
pub mod ids;
pub mod route;
pub mod snapshot;
pub mod status;
pub mod summary;
pub mod tcp;
pub mod threat;
pub mod vehicle;

// Intentionally curated re-exports for downstream consumers.
pub use asset::{AssetKind, MilitaryAsset};
pub use convoy::{CargoManifest, Convoy, Mission};
pub use geo::GeoPoint;
pub use ids::{AssetId, ConvoyId, RouteId, TcpId, ThreatId, VehicleId};
pub use route::Route;
pub use snapshot::Snapshot;
pub use status::{
    AssetStatus, ConvoyStatus, EngineStatus, RiskLevel, RouteStatus,
    TcpStatus, ThreatKind, ThreatSeverity,
};
pub use summary::{
    AiAnalysis, Recommendation, SchedulingSummary, SystemMetrics,
    SystemStatus,
};
pub use tcp::TrafficControlPoint;
pub use threat::Threat;
pub use vehicle::Vehicle;
