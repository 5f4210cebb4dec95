//! Shared fixtures for unit tests.

use chrono::{DateTime, TimeZone, Utc};

use vantage_model::{
    AiAnalysis, Convoy, ConvoyId, ConvoyStatus, RouteId, SchedulingSummary,
    Snapshot, SystemMetrics, SystemStatus, status::EngineStatus,
};

/// Fixed epoch all test timestamps are offset from.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

/// An empty snapshot whose timestamp is `offset_secs` past [`base_time`].
pub fn snapshot_at(sync_id: &str, offset_secs: i64) -> Snapshot {
    Snapshot {
        sync_id: sync_id.to_string(),
        timestamp: base_time() + chrono::Duration::seconds(offset_secs),
        convoys: Vec::new(),
        routes: Vec::new(),
        tcps: Vec::new(),
        threats: Vec::new(),
        military_assets: Vec::new(),
        scheduling: SchedulingSummary {
            scheduled_departures: 0,
            conflicts: 0,
            next_departure: None,
        },
        metrics: SystemMetrics {
            active_convoys: 0,
            total_convoys: 0,
            open_routes: 0,
            active_threats: 0,
            avg_speed_kmh: None,
        },
        ai_analysis: AiAnalysis {
            summary: None,
            risk_level: None,
            recommendations: Vec::new(),
        },
        system_status: SystemStatus {
            backend_reachable: true,
            engine_status: EngineStatus::Running,
            data_age_secs: None,
        },
    }
}

/// A convoy with the given id/callsign/status and no other attributes.
pub fn convoy(
    id: i64,
    callsign: &str,
    status: ConvoyStatus,
    route: Option<i64>,
) -> Convoy {
    Convoy {
        id: ConvoyId(id),
        callsign: callsign.to_string(),
        status,
        route_id: route.map(RouteId),
        position: None,
        cargo: None,
        capacity_tonnes: None,
        vehicle_count: 0,
        speed_kmh: None,
        mission: None,
    }
}
