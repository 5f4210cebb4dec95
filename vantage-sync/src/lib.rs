//! Unified state synchronization layer for the Vantage dashboard.
//!
//! One in-process cache polls the backend's aggregate state endpoint and
//! fans immutable snapshots out to every visual consumer (map, tracking
//! panel, HUD, bridge widget) so no panel issues its own network calls.
//! A shared selection channel coordinates cross-panel highlighting
//! independent of the polling cadence.
//!
//! Construction is explicit dependency injection: build a
//! [`SyncManager`] around a [`StateTransport`] and hand it to consumers.
//! Tests inject scripted transports; production uses [`HttpTransport`].

pub mod error;
pub mod manager;
pub mod registry;
pub mod resolve;
pub mod scheduler;
pub mod selection;
pub mod store;
pub mod transport;

#[cfg(test)]
pub(crate) mod testutil;

pub use error::{SyncError, SyncResult};
pub use manager::{SyncManager, SyncOptions};
pub use registry::{SubscriberRegistry, Subscription};
pub use scheduler::{FetchScheduler, MIN_POLL_INTERVAL};
pub use selection::{
    SelectionCoordinator, SelectionState, SelectionSubscription,
};
pub use store::{PublishOutcome, StateStore};
pub use transport::{HttpTransport, StateTransport};
