//! The unified state document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::asset::MilitaryAsset;
use crate::convoy::Convoy;
use crate::route::Route;
use crate::summary::{
    AiAnalysis, SchedulingSummary, SystemMetrics, SystemStatus,
};
use crate::tcp::TrafficControlPoint;
use crate::threat::Threat;

/// One complete, immutable copy of the aggregate backend state.
///
/// Every top-level section is required; a document missing one fails to
/// decode and is rejected at the fetch boundary. Consumers receive
/// snapshots as shared references and never mutate them; an update is
/// always a whole-snapshot replacement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Server-assigned synchronization identifier for this document.
    pub sync_id: String,
    /// Server time the document was assembled. Monotonic per backend;
    /// used to discard stale late-arriving responses.
    pub timestamp: DateTime<Utc>,
    pub convoys: Vec<Convoy>,
    pub routes: Vec<Route>,
    pub tcps: Vec<TrafficControlPoint>,
    pub threats: Vec<Threat>,
    pub military_assets: Vec<MilitaryAsset>,
    pub scheduling: SchedulingSummary,
    pub metrics: SystemMetrics,
    pub ai_analysis: AiAnalysis,
    pub system_status: SystemStatus,
}
