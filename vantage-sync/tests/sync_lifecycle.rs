//! End-to-end behaviour of the sync layer against a scripted transport.

mod support;

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use support::{FakeTransport, convoy, settle, snapshot_at, vehicle};
use vantage_model::{ConvoyId, ConvoyStatus, RouteId};
use vantage_sync::{SyncError, SyncManager, SyncOptions, resolve};

fn manager_with(transport: Arc<FakeTransport>) -> SyncManager {
    SyncManager::new(
        transport,
        SyncOptions {
            poll_interval: Duration::from_secs(5),
        },
    )
}

#[tokio::test(start_paused = true)]
async fn scheduler_runs_iff_subscribers_exist() {
    let transport = FakeTransport::scripted(vec![
        Ok(snapshot_at("S1", 0)),
        Ok(snapshot_at("S2", 1)),
        Ok(snapshot_at("S3", 2)),
    ]);
    let manager = manager_with(transport);

    assert!(!manager.is_polling());

    let first = manager.subscribe(|_| {});
    assert!(manager.is_polling());

    let second = manager.subscribe(|_| {});
    assert!(manager.is_polling());

    drop(first);
    assert!(manager.is_polling());

    drop(second);
    assert!(!manager.is_polling());

    // Re-subscribing restarts the loop.
    let third = manager.subscribe(|_| {});
    assert!(manager.is_polling());
    drop(third);
    assert!(!manager.is_polling());
}

#[tokio::test(start_paused = true)]
async fn end_to_end_poll_failure_recovery_and_shutdown() {
    let transport = FakeTransport::scripted(vec![
        Ok({
            let mut s = snapshot_at("S1", 0);
            s.convoys = vec![convoy(
                1,
                "PACKHORSE-1",
                ConvoyStatus::InTransit,
                None,
            )];
            s
        }),
        Err(SyncError::Network("connection refused".to_string())),
        Ok(snapshot_at("S2", 10)),
    ]);
    let manager = manager_with(transport.clone());

    assert!(manager.snapshot().is_none());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in = seen.clone();
    let subscription = manager.subscribe(move |snapshot| {
        seen_in.lock().push(snapshot.sync_id.clone());
    });

    // First poll runs immediately on subscribe.
    settle().await;
    assert_eq!(seen.lock().as_slice(), ["S1".to_string()]);
    assert_eq!(manager.snapshot().unwrap().sync_id, "S1");
    assert!(manager.last_error().is_none());

    // Second poll fails: stale-but-available, error surfaced.
    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;
    assert_eq!(manager.snapshot().unwrap().sync_id, "S1");
    assert!(manager.last_error().is_some());
    assert_eq!(manager.retry_count(), 1);
    assert_eq!(seen.lock().len(), 1);

    // Third poll recovers.
    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;
    assert_eq!(manager.snapshot().unwrap().sync_id, "S2");
    assert!(manager.last_error().is_none());
    assert_eq!(manager.retry_count(), 0);
    assert_eq!(
        seen.lock().as_slice(),
        ["S1".to_string(), "S2".to_string()]
    );

    // Last unsubscribe stops all network activity.
    let calls_at_shutdown = transport.state_calls();
    drop(subscription);
    tokio::time::advance(Duration::from_secs(60)).await;
    settle().await;
    assert_eq!(transport.state_calls(), calls_at_shutdown);
}

#[tokio::test(start_paused = true)]
async fn late_subscriber_is_served_from_the_cache() {
    let transport = FakeTransport::scripted(vec![Ok(snapshot_at("S1", 0))]);
    let manager = manager_with(transport.clone());

    let _first = manager.subscribe(|_| {});
    settle().await;
    assert_eq!(transport.state_calls(), 1);

    // The second consumer mounts between ticks and still gets data
    // synchronously, with no extra network call.
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in = seen.clone();
    let _second = manager.subscribe(move |snapshot| {
        seen_in.lock().push(snapshot.sync_id.clone());
    });
    assert_eq!(seen.lock().as_slice(), ["S1".to_string()]);
    assert_eq!(transport.state_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn manual_refresh_is_single_flight() {
    let transport = FakeTransport::scripted_with_delay(
        vec![Ok(snapshot_at("S1", 0)), Ok(snapshot_at("S2", 1))],
        Duration::from_secs(2),
    );
    let manager = manager_with(transport.clone());

    assert!(manager.refresh());
    assert!(!manager.refresh());
    assert!(!manager.refresh());
    settle().await;
    assert_eq!(transport.state_calls(), 1);

    tokio::time::advance(Duration::from_secs(2)).await;
    settle().await;
    assert_eq!(manager.snapshot().unwrap().sync_id, "S1");

    // Slot free again after completion.
    assert!(manager.refresh());
    tokio::time::advance(Duration::from_secs(2)).await;
    settle().await;
    assert_eq!(transport.state_calls(), 2);
    assert_eq!(manager.snapshot().unwrap().sync_id, "S2");
}

#[tokio::test(start_paused = true)]
async fn selection_broadcasts_independent_of_polling() {
    let transport = FakeTransport::scripted(vec![Ok(snapshot_at("S1", 0))]);
    let manager = manager_with(transport);

    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_in = seen.clone();
    let _selection_sub = manager.subscribe_selection(move |state| {
        seen_in.lock().push(state);
    });

    // No snapshot has ever been fetched; the id resolves to nothing but
    // is still a valid, immediately visible selection.
    manager.set_selected_convoy(Some(ConvoyId(99)));
    manager.set_selected_route(Some(RouteId(7)));

    let states = seen.lock().clone();
    assert_eq!(states.len(), 2);
    assert_eq!(states[1].convoy, Some(ConvoyId(99)));
    assert_eq!(states[1].route, Some(RouteId(7)));

    // Dangling selection resolves to None against whatever arrives.
    let snapshot = snapshot_at("S1", 0);
    assert!(resolve::selected_convoy(&snapshot, states[1]).is_none());
}

#[tokio::test(start_paused = true)]
async fn snapshot_replacement_preserves_selection() {
    let transport = FakeTransport::scripted(vec![
        Ok({
            let mut s = snapshot_at("S1", 0);
            s.convoys =
                vec![convoy(1, "PACKHORSE-1", ConvoyStatus::InTransit, None)];
            s
        }),
        // Convoy 1 disappears in the next snapshot.
        Ok(snapshot_at("S2", 10)),
    ]);
    let manager = manager_with(transport);

    let _sub = manager.subscribe(|_| {});
    settle().await;

    manager.set_selected_convoy(Some(ConvoyId(1)));
    let snapshot = manager.snapshot().unwrap();
    assert!(
        resolve::selected_convoy(&snapshot, manager.selection()).is_some()
    );

    tokio::time::advance(Duration::from_secs(5)).await;
    settle().await;

    // The entity is gone but the selection is not auto-cleared.
    let snapshot = manager.snapshot().unwrap();
    assert_eq!(snapshot.sync_id, "S2");
    assert_eq!(manager.selection().convoy, Some(ConvoyId(1)));
    assert!(
        resolve::selected_convoy(&snapshot, manager.selection()).is_none()
    );
}

#[tokio::test(start_paused = true)]
async fn vehicles_are_fetched_on_demand_only() {
    let transport = FakeTransport::scripted(vec![Ok(snapshot_at("S1", 0))]);
    transport.set_vehicles(vec![
        vehicle(1, 1, "PACKHORSE-1-1"),
        vehicle(2, 1, "PACKHORSE-1-2"),
        vehicle(3, 2, "MULE-TRAIN-1"),
    ]);
    let manager = manager_with(transport.clone());

    let roster = manager.fetch_vehicles(ConvoyId(1)).await.unwrap();
    assert_eq!(roster.len(), 2);
    assert!(roster.iter().all(|v| v.convoy_id == ConvoyId(1)));

    // Roster fetches never touch the state endpoint.
    assert_eq!(transport.state_calls(), 0);
}
