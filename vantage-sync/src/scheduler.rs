//! FetchScheduler - periodic retrieval of the aggregate state document.
//!
//! The scheduler guarantees at most one request in flight regardless of
//! how timer ticks and manual triggers interleave. Each fetch runs as its
//! own task: stopping the scheduler halts future ticks but an outstanding
//! request still completes and lands through the normal publish path,
//! where the store's ordering guard decides whether it is still relevant.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::store::{PublishOutcome, StateStore};
use crate::transport::StateTransport;

/// Floor applied to every configured interval to bound backend load.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1_000);

/// Single-flight guard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlightState {
    Idle,
    Fetching,
}

/// Drives periodic polling of the backend.
pub struct FetchScheduler {
    transport: Arc<dyn StateTransport>,
    store: Arc<StateStore>,
    interval_ms: Arc<AtomicU64>,
    flight: Arc<Mutex<FlightState>>,
    ticker: Mutex<Option<JoinHandle<()>>>,
}

impl FetchScheduler {
    /// Create a scheduler polling at `interval` (clamped to the floor).
    pub fn new(
        transport: Arc<dyn StateTransport>,
        store: Arc<StateStore>,
        interval: Duration,
    ) -> Self {
        let interval = interval.max(MIN_POLL_INTERVAL);
        Self {
            transport,
            store,
            interval_ms: Arc::new(AtomicU64::new(interval.as_millis() as u64)),
            flight: Arc::new(Mutex::new(FlightState::Idle)),
            ticker: Mutex::new(None),
        }
    }

    /// Begin polling: an immediate fetch, then one per interval.
    ///
    /// Calling `start` while the ticker is running is a no-op.
    pub fn start(&self) {
        let mut ticker = self.ticker.lock();
        if let Some(handle) = ticker.as_ref()
            && !handle.is_finished()
        {
            debug!("fetch scheduler already running");
            return;
        }

        info!(
            interval_ms = self.interval_ms.load(Ordering::Relaxed),
            "fetch scheduler started"
        );

        let transport = self.transport.clone();
        let store = self.store.clone();
        let flight = self.flight.clone();
        let interval_ms = self.interval_ms.clone();

        *ticker = Some(tokio::spawn(async move {
            loop {
                Self::spawn_fetch(
                    transport.clone(),
                    store.clone(),
                    flight.clone(),
                );

                // Re-read each cycle so set_interval applies on the next
                // tick rather than requiring a restart.
                let wait = Duration::from_millis(
                    interval_ms.load(Ordering::Relaxed),
                );
                tokio::time::sleep(wait).await;
            }
        }));
    }

    /// Cancel the repeating timer. An in-flight request is not cancelled;
    /// its late result still routes through the publish/error path.
    pub fn stop(&self) {
        if let Some(handle) = self.ticker.lock().take() {
            handle.abort();
            info!("fetch scheduler stopped");
        }
    }

    /// Whether the ticker task is live.
    pub fn is_running(&self) -> bool {
        self.ticker
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Change the polling cadence, clamped to the floor. Takes effect on
    /// the next cycle.
    pub fn set_interval(&self, interval: Duration) {
        let clamped = interval.max(MIN_POLL_INTERVAL);
        self.interval_ms
            .store(clamped.as_millis() as u64, Ordering::Relaxed);
        debug!(interval_ms = clamped.as_millis() as u64, "poll interval set");
    }

    /// Current polling cadence.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.load(Ordering::Relaxed))
    }

    /// Manual refresh. Returns `false` without spawning anything when a
    /// fetch is already outstanding.
    pub fn trigger_fetch(&self) -> bool {
        Self::spawn_fetch(
            self.transport.clone(),
            self.store.clone(),
            self.flight.clone(),
        )
    }

    /// Spawn one fetch task if the single-flight slot is free.
    fn spawn_fetch(
        transport: Arc<dyn StateTransport>,
        store: Arc<StateStore>,
        flight: Arc<Mutex<FlightState>>,
    ) -> bool {
        {
            let mut slot = flight.lock();
            if *slot == FlightState::Fetching {
                debug!("fetch already in flight, skipping");
                return false;
            }
            *slot = FlightState::Fetching;
        }

        tokio::spawn(async move {
            match transport.fetch_state().await {
                Ok(snapshot) => {
                    if store.publish(snapshot) == PublishOutcome::Superseded {
                        debug!("late fetch result superseded, dropped");
                    }
                }
                Err(err) => store.report_error(err.to_string()),
            }
            *flight.lock() = FlightState::Idle;
        });

        true
    }
}

impl std::fmt::Debug for FetchScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchScheduler")
            .field("interval_ms", &self.interval_ms.load(Ordering::Relaxed))
            .field("running", &self.is_running())
            .field("flight", &*self.flight.lock())
            .finish()
    }
}
