//! Aggregate summary blocks of the unified state document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::ConvoyId;
use crate::status::{EngineStatus, RiskLevel};

/// Rolled-up view of the movement schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingSummary {
    pub scheduled_departures: u32,
    pub conflicts: u32,
    #[serde(default)]
    pub next_departure: Option<DateTime<Utc>>,
}

/// Operation-wide counters computed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemMetrics {
    pub active_convoys: u32,
    pub total_convoys: u32,
    pub open_routes: u32,
    pub active_threats: u32,
    #[serde(default)]
    pub avg_speed_kmh: Option<f64>,
}

/// Output of the backend's AI analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiAnalysis {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

/// A single AI recommendation, usually addressed to one convoy.
///
/// Newer backends attach an explicit `convoy_id`; older payloads only
/// mention the convoy's callsign inside the free text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub text: String,
    #[serde(default)]
    pub convoy_id: Option<ConvoyId>,
    #[serde(default)]
    pub severity: Option<RiskLevel>,
}

/// Health block describing the backend itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemStatus {
    pub backend_reachable: bool,
    pub engine_status: EngineStatus,
    /// Seconds since the backend last refreshed its own sources.
    #[serde(default)]
    pub data_age_secs: Option<f64>,
}
