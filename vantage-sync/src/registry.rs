//! SubscriberRegistry - snapshot fan-out tied to consumer demand.
//!
//! The registry decouples scheduling lifetime from UI mounting: the first
//! subscriber starts the poller, the last one leaving stops it, so no
//! background network activity happens while nothing is on screen.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::{debug, error};
use uuid::Uuid;

use vantage_model::Snapshot;

use crate::scheduler::FetchScheduler;
use crate::store::StateStore;

/// Callback invoked with each applied snapshot.
pub type SnapshotListener = dyn Fn(Arc<Snapshot>) + Send + Sync;

/// Tracks snapshot listeners and drives the scheduler lazily.
pub struct SubscriberRegistry {
    store: Arc<StateStore>,
    // Late-bound: the scheduler is constructed after the registry during
    // wiring, so lifecycle calls go through a OnceLock.
    scheduler: OnceLock<Arc<FetchScheduler>>,
    listeners: Mutex<Vec<(Uuid, Arc<SnapshotListener>)>>,
}

impl SubscriberRegistry {
    pub fn new(store: Arc<StateStore>) -> Self {
        Self {
            store,
            scheduler: OnceLock::new(),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn attach_scheduler(&self, scheduler: Arc<FetchScheduler>) {
        let _ = self.scheduler.set(scheduler);
    }

    /// Register a listener.
    ///
    /// If a snapshot already exists it is delivered synchronously before
    /// this returns, so a newly mounted consumer never sits empty until
    /// the next poll tick. The first registration starts the scheduler.
    /// Dropping the returned [`Subscription`] unregisters, and dropping
    /// the last one stops the scheduler.
    pub fn subscribe(
        self: &Arc<Self>,
        listener: impl Fn(Arc<Snapshot>) + Send + Sync + 'static,
    ) -> Subscription {
        let id = Uuid::new_v4();
        let listener: Arc<SnapshotListener> = Arc::new(listener);

        let count = {
            let mut listeners = self.listeners.lock();
            listeners.push((id, listener.clone()));
            listeners.len()
        };

        if let Some(snapshot) = self.store.snapshot() {
            Self::deliver(id, &listener, snapshot);
        }

        if count == 1
            && let Some(scheduler) = self.scheduler.get()
        {
            scheduler.start();
        }

        debug!(subscriber = %id, total = count, "snapshot listener added");

        Subscription {
            id,
            registry: self.clone(),
        }
    }

    fn unsubscribe(&self, id: Uuid) {
        let remaining = {
            let mut listeners = self.listeners.lock();
            listeners.retain(|(listener_id, _)| *listener_id != id);
            listeners.len()
        };

        debug!(subscriber = %id, total = remaining, "snapshot listener removed");

        if remaining == 0
            && let Some(scheduler) = self.scheduler.get()
        {
            scheduler.stop();
        }
    }

    /// Fan a snapshot out to every listener.
    pub fn notify(&self, snapshot: &Arc<Snapshot>) {
        // Clone the list so listener callbacks run without the lock held;
        // a callback is free to subscribe or unsubscribe.
        let listeners: Vec<_> = self
            .listeners
            .lock()
            .iter()
            .map(|(id, listener)| (*id, listener.clone()))
            .collect();

        for (id, listener) in listeners {
            Self::deliver(id, &listener, snapshot.clone());
        }
    }

    /// Invoke one listener, isolating a panic so the remaining listeners
    /// still get the snapshot and the publish call survives.
    fn deliver(
        id: Uuid,
        listener: &Arc<SnapshotListener>,
        snapshot: Arc<Snapshot>,
    ) {
        let result = catch_unwind(AssertUnwindSafe(|| listener(snapshot)));
        if result.is_err() {
            error!(subscriber = %id, "snapshot listener panicked during delivery");
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.lock().len()
    }
}

impl std::fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("subscriber_count", &self.subscriber_count())
            .field("scheduler_attached", &self.scheduler.get().is_some())
            .finish()
    }
}

/// RAII registration handle; dropping it unregisters the listener.
pub struct Subscription {
    id: Uuid,
    registry: Arc<SubscriberRegistry>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry.unsubscribe(self.id);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
