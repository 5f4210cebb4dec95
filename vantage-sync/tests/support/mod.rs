//! Scripted transport and snapshot builders shared by integration tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;

use vantage_model::{
    AiAnalysis, Convoy, ConvoyId, ConvoyStatus, RouteId, SchedulingSummary,
    Snapshot, SystemMetrics, SystemStatus, Vehicle, VehicleId,
    status::EngineStatus,
};
use vantage_sync::{StateTransport, SyncError, SyncResult};

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

/// A vehicle belonging to the given convoy.
pub fn vehicle(id: i64, convoy: i64, callsign: &str) -> Vehicle {
    Vehicle {
        id: VehicleId(id),
        convoy_id: ConvoyId(convoy),
        kind: "MTV".to_string(),
        callsign: callsign.to_string(),
        fuel_pct: None,
    }
}

/// Scripted transport: pops one canned state result per fetch and counts
/// calls. An optional delay holds each fetch open in virtual time so
/// tests can observe the in-flight window.
pub struct FakeTransport {
    responses: Mutex<VecDeque<SyncResult<Snapshot>>>,
    vehicles: Mutex<Vec<Vehicle>>,
    calls: AtomicUsize,
    delay: Option<Duration>,
}

impl FakeTransport {
    pub fn scripted(responses: Vec<SyncResult<Snapshot>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            vehicles: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            delay: None,
        })
    }

    pub fn scripted_with_delay(
        responses: Vec<SyncResult<Snapshot>>,
        delay: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            vehicles: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            delay: Some(delay),
        })
    }

    pub fn set_vehicles(&self, vehicles: Vec<Vehicle>) {
        *self.vehicles.lock() = vehicles;
    }

    pub fn state_calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StateTransport for FakeTransport {
    async fn fetch_state(&self) -> SyncResult<Snapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(SyncError::Shape("script exhausted".to_string()))
        })
    }

    async fn fetch_vehicles(
        &self,
        convoy: ConvoyId,
    ) -> SyncResult<Vec<Vehicle>> {
        Ok(self
            .vehicles
            .lock()
            .iter()
            .filter(|vehicle| vehicle.convoy_id == convoy)
            .cloned()
            .collect())
    }
}

/// Let spawned fetch tasks run to completion on the test runtime.
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}
