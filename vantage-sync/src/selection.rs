//! SelectionCoordinator - cross-panel highlight state.
//!
//! Clicking a route on the map must highlight it in the tracking panel
//! and the bridge widget without waiting for a poll tick, so selection
//! runs on its own broadcast channel, fully independent of snapshot
//! publication.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, error};
use uuid::Uuid;

use vantage_model::{ConvoyId, RouteId};

/// The shared cross-panel selection.
///
/// Both ids are opaque references: selecting an id absent from the
/// current snapshot is valid and simply renders as "nothing found" until
/// a snapshot containing it arrives, possibly never. Snapshot replacement
/// never clears a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub convoy: Option<ConvoyId>,
    pub route: Option<RouteId>,
}

/// Callback invoked with each selection change.
pub type SelectionListener = dyn Fn(SelectionState) + Send + Sync;

/// Owns [`SelectionState`]; consumers read it and subscribe, never write
/// it directly.
pub struct SelectionCoordinator {
    state: RwLock<SelectionState>,
    listeners: Mutex<Vec<(Uuid, Arc<SelectionListener>)>>,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SelectionState::default()),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Current selection.
    pub fn selection(&self) -> SelectionState {
        *self.state.read()
    }

    /// Select (or clear) the highlighted convoy.
    pub fn set_selected_convoy(&self, id: Option<ConvoyId>) {
        let state = {
            let mut state = self.state.write();
            state.convoy = id;
            *state
        };
        debug!(convoy = ?id, "convoy selection changed");
        self.broadcast(state);
    }

    /// Select (or clear) the highlighted route.
    pub fn set_selected_route(&self, id: Option<RouteId>) {
        let state = {
            let mut state = self.state.write();
            state.route = id;
            *state
        };
        debug!(route = ?id, "route selection changed");
        self.broadcast(state);
    }

    /// Register a listener for selection changes. Dropping the returned
    /// handle unregisters.
    pub fn subscribe(
        self: &Arc<Self>,
        listener: impl Fn(SelectionState) + Send + Sync + 'static,
    ) -> SelectionSubscription {
        let id = Uuid::new_v4();
        self.listeners.lock().push((id, Arc::new(listener)));
        SelectionSubscription {
            id,
            coordinator: self.clone(),
        }
    }

    fn unsubscribe(&self, id: Uuid) {
        self.listeners
            .lock()
            .retain(|(listener_id, _)| *listener_id != id);
    }

    fn broadcast(&self, state: SelectionState) {
        let listeners: Vec<_> = self
            .listeners
            .lock()
            .iter()
            .map(|(id, listener)| (*id, listener.clone()))
            .collect();

        for (id, listener) in listeners {
            let result = catch_unwind(AssertUnwindSafe(|| listener(state)));
            if result.is_err() {
                error!(subscriber = %id, "selection listener panicked");
            }
        }
    }
}

impl Default for SelectionCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SelectionCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionCoordinator")
            .field("state", &self.selection())
            .field("listener_count", &self.listeners.lock().len())
            .finish()
    }
}

/// RAII handle for a selection listener.
pub struct SelectionSubscription {
    id: Uuid,
    coordinator: Arc<SelectionCoordinator>,
}

impl Drop for SelectionSubscription {
    fn drop(&mut self) {
        self.coordinator.unsubscribe(self.id);
    }
}

impl std::fmt::Debug for SelectionSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionSubscription")
            .field("id", &self.id)
            .finish()
    }
}
