//! SyncManager - wiring and public surface of the sync layer.
//!
//! One manager instance is constructed at startup and handed to every
//! consumer (no process-wide singleton), so tests can build isolated
//! managers around fake transports.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use vantage_model::{ConvoyId, RouteId, Snapshot, Vehicle};

use crate::error::SyncResult;
use crate::registry::{SubscriberRegistry, Subscription};
use crate::scheduler::FetchScheduler;
use crate::selection::{
    SelectionCoordinator, SelectionState, SelectionSubscription,
};
use crate::store::StateStore;
use crate::transport::StateTransport;

/// Construction options for [`SyncManager`].
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Polling cadence. Clamped to the scheduler floor.
    pub poll_interval: Duration,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(5_000),
        }
    }
}

/// The unified state synchronization layer.
///
/// Owns the store, registry, scheduler, and selection coordinator and
/// wires them together: scheduler fetches land in the store, applied
/// snapshots fan out through the registry, and selection changes
/// broadcast on their own channel.
pub struct SyncManager {
    transport: Arc<dyn StateTransport>,
    store: Arc<StateStore>,
    registry: Arc<SubscriberRegistry>,
    scheduler: Arc<FetchScheduler>,
    selection: Arc<SelectionCoordinator>,
}

impl SyncManager {
    /// Build and wire a manager around the given transport.
    pub fn new(
        transport: Arc<dyn StateTransport>,
        options: SyncOptions,
    ) -> Self {
        let store = Arc::new(StateStore::new());
        let registry = Arc::new(SubscriberRegistry::new(store.clone()));
        let scheduler = Arc::new(FetchScheduler::new(
            transport.clone(),
            store.clone(),
            options.poll_interval,
        ));
        registry.attach_scheduler(scheduler.clone());

        let notify_registry = registry.clone();
        store.set_notifier(move |snapshot| notify_registry.notify(&snapshot));

        Self {
            transport,
            store,
            registry,
            scheduler,
            selection: Arc::new(SelectionCoordinator::new()),
        }
    }

    /// Register a snapshot listener. The current snapshot, if any, is
    /// delivered before this returns. The first subscription starts
    /// polling; dropping the last one stops it.
    pub fn subscribe(
        &self,
        listener: impl Fn(Arc<Snapshot>) + Send + Sync + 'static,
    ) -> Subscription {
        self.registry.subscribe(listener)
    }

    /// Register a selection listener.
    pub fn subscribe_selection(
        &self,
        listener: impl Fn(SelectionState) + Send + Sync + 'static,
    ) -> SelectionSubscription {
        self.selection.subscribe(listener)
    }

    /// Current snapshot, or `None` before the first successful poll.
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.store.snapshot()
    }

    /// Last fetch error, for the non-blocking error banner.
    pub fn last_error(&self) -> Option<String> {
        self.store.last_error()
    }

    /// Consecutive failed fetches since the last success.
    pub fn retry_count(&self) -> u32 {
        self.store.retry_count()
    }

    /// Local time of the last applied snapshot.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.store.last_updated()
    }

    /// Manual refresh (the UI retry action). Single-flight: returns
    /// `false` when a fetch is already outstanding.
    pub fn refresh(&self) -> bool {
        self.scheduler.trigger_fetch()
    }

    /// Change the polling cadence; applies on the next cycle.
    pub fn set_poll_interval(&self, interval: Duration) {
        self.scheduler.set_interval(interval);
    }

    /// Current cross-panel selection.
    pub fn selection(&self) -> SelectionState {
        self.selection.selection()
    }

    /// Select (or clear) the highlighted convoy.
    pub fn set_selected_convoy(&self, id: Option<ConvoyId>) {
        self.selection.set_selected_convoy(id);
    }

    /// Select (or clear) the highlighted route.
    pub fn set_selected_route(&self, id: Option<RouteId>) {
        self.selection.set_selected_route(id);
    }

    /// Fetch one convoy's vehicle roster on demand. Bypasses the snapshot
    /// cache entirely.
    pub async fn fetch_vehicles(
        &self,
        convoy: ConvoyId,
    ) -> SyncResult<Vec<Vehicle>> {
        self.transport.fetch_vehicles(convoy).await
    }

    /// Whether the poll loop is currently running.
    pub fn is_polling(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.subscriber_count()
    }
}

impl std::fmt::Debug for SyncManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncManager")
            .field("store", &self.store)
            .field("polling", &self.is_polling())
            .field("subscriber_count", &self.subscriber_count())
            .field("selection", &self.selection.selection())
            .finish()
    }
}
