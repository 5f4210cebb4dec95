//! Status and classification enums.
//!
//! Wire values use the backend's SCREAMING_SNAKE_CASE convention. Every enum
//! carries an `Unknown` catch-all so a value introduced server-side degrades
//! to unclassified instead of failing the whole document.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a convoy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConvoyStatus {
    Forming,
    Staged,
    InTransit,
    Holding,
    Arrived,
    Aborted,
    #[serde(other)]
    Unknown,
}

impl ConvoyStatus {
    /// Whether the convoy is currently moving along its route.
    pub const fn is_active(self) -> bool {
        matches!(self, ConvoyStatus::InTransit)
    }
}

impl std::fmt::Display for ConvoyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ConvoyStatus::Forming => "Forming",
            ConvoyStatus::Staged => "Staged",
            ConvoyStatus::InTransit => "In transit",
            ConvoyStatus::Holding => "Holding",
            ConvoyStatus::Arrived => "Arrived",
            ConvoyStatus::Aborted => "Aborted",
            ConvoyStatus::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// Operational status of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteStatus {
    Open,
    Congested,
    Compromised,
    Closed,
    #[serde(other)]
    Unknown,
}

/// Manning status of a traffic control point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TcpStatus {
    Active,
    Unmanned,
    Bypassed,
    #[serde(other)]
    Unknown,
}

/// Classification of a reported threat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatKind {
    Ied,
    Ambush,
    IndirectFire,
    Drone,
    Mine,
    #[serde(other)]
    Unknown,
}

/// Severity band of a threat, ordered least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThreatSeverity {
    Low,
    Moderate,
    High,
    Critical,
    #[serde(other)]
    Unknown,
}

/// Employment status of a military asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Available,
    Tasked,
    Offline,
    #[serde(other)]
    Unknown,
}

/// Health of the backend scheduling engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngineStatus {
    Running,
    Degraded,
    Offline,
    #[serde(other)]
    Unknown,
}

/// Aggregate risk band reported by the AI analysis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Elevated,
    High,
    Severe,
    #[serde(other)]
    Unknown,
}
