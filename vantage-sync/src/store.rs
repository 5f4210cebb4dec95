//! StateStore - single authoritative holder of the latest good snapshot.

use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, warn};

use vantage_model::Snapshot;

/// Hook invoked after a snapshot is applied, outside the store lock.
type SnapshotNotifier = Box<dyn Fn(Arc<Snapshot>) + Send + Sync>;

/// Result of a publish attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    /// The snapshot replaced the held one.
    Applied,
    /// The snapshot carried an older server timestamp than the held one
    /// and was discarded. Happens when a slow response lands after a newer
    /// poll already completed.
    Superseded,
}

#[derive(Debug, Default)]
struct StoreInner {
    snapshot: Option<Arc<Snapshot>>,
    last_error: Option<String>,
    retry_count: u32,
    last_updated: Option<DateTime<Utc>>,
}

/// Single source of truth for the latest good [`Snapshot`] plus error
/// bookkeeping.
///
/// A failed fetch never clears the held snapshot: the dashboard keeps
/// showing the last good picture through transient backend failures
/// rather than going blank.
pub struct StateStore {
    inner: RwLock<StoreInner>,
    notifier: OnceLock<SnapshotNotifier>,
}

impl StateStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner::default()),
            notifier: OnceLock::new(),
        }
    }

    /// Install the fan-out hook. Called once during wiring; later calls
    /// are ignored.
    pub(crate) fn set_notifier(
        &self,
        notify: impl Fn(Arc<Snapshot>) + Send + Sync + 'static,
    ) {
        let _ = self.notifier.set(Box::new(notify));
    }

    /// Replace the held snapshot and notify subscribers.
    ///
    /// The ordering guard runs first: a snapshot whose server timestamp is
    /// older than the held one is discarded so a slow superseded response
    /// cannot overwrite newer data. Equal timestamps are applied, so a
    /// re-poll of an unchanged backend still clears error state.
    pub fn publish(&self, snapshot: Snapshot) -> PublishOutcome {
        let applied = {
            let mut inner = self.inner.write();

            if let Some(current) = &inner.snapshot
                && snapshot.timestamp < current.timestamp
            {
                debug!(
                    held = %current.sync_id,
                    discarded = %snapshot.sync_id,
                    "discarding stale snapshot"
                );
                return PublishOutcome::Superseded;
            }

            let applied = Arc::new(snapshot);
            inner.snapshot = Some(applied.clone());
            inner.last_error = None;
            inner.retry_count = 0;
            inner.last_updated = Some(Utc::now());
            applied
        };

        // Fan out after the lock is released so a listener reading the
        // store cannot deadlock against the publish path.
        if let Some(notify) = self.notifier.get() {
            notify(applied);
        }

        PublishOutcome::Applied
    }

    /// Record a failed fetch. The held snapshot survives.
    pub fn report_error(&self, message: impl Into<String>) {
        let message = message.into();
        let mut inner = self.inner.write();
        inner.retry_count += 1;
        warn!(
            retry = inner.retry_count,
            error = %message,
            "state fetch failed"
        );
        inner.last_error = Some(message);
    }

    /// Synchronous, non-blocking read of the current snapshot.
    pub fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.inner.read().snapshot.clone()
    }

    /// Last fetch error, if the most recent fetch failed.
    pub fn last_error(&self) -> Option<String> {
        self.inner.read().last_error.clone()
    }

    /// Consecutive failed fetches since the last success.
    pub fn retry_count(&self) -> u32 {
        self.inner.read().retry_count
    }

    /// Local time of the last applied snapshot.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.inner.read().last_updated
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("StateStore")
            .field(
                "sync_id",
                &inner.snapshot.as_ref().map(|s| s.sync_id.clone()),
            )
            .field("last_error", &inner.last_error)
            .field("retry_count", &inner.retry_count)
            .field("last_updated", &inner.last_updated)
            .finish()
    }
}
