//! Pure query functions over a snapshot.
//!
//! Every function borrows the snapshot for the duration of the call and
//! returns borrowed data; nothing here caches across snapshot
//! generations. Missing data is an ordinary `None` or empty vec, never a
//! panic.

use vantage_model::{
    AssetId, Convoy, ConvoyId, MilitaryAsset, Recommendation, Route,
    RouteId, Snapshot, TcpId, Threat, ThreatId, TrafficControlPoint,
};

use crate::selection::SelectionState;

pub fn convoy_by_id(snapshot: &Snapshot, id: ConvoyId) -> Option<&Convoy> {
    snapshot.convoys.iter().find(|convoy| convoy.id == id)
}

pub fn route_by_id(snapshot: &Snapshot, id: RouteId) -> Option<&Route> {
    snapshot.routes.iter().find(|route| route.id == id)
}

pub fn tcp_by_id(
    snapshot: &Snapshot,
    id: TcpId,
) -> Option<&TrafficControlPoint> {
    snapshot.tcps.iter().find(|tcp| tcp.id == id)
}

pub fn threat_by_id(snapshot: &Snapshot, id: ThreatId) -> Option<&Threat> {
    snapshot.threats.iter().find(|threat| threat.id == id)
}

pub fn asset_by_id(
    snapshot: &Snapshot,
    id: AssetId,
) -> Option<&MilitaryAsset> {
    snapshot.military_assets.iter().find(|asset| asset.id == id)
}

/// Convoys currently in transit, in collection order.
pub fn active_convoys(snapshot: &Snapshot) -> Vec<&Convoy> {
    snapshot
        .convoys
        .iter()
        .filter(|convoy| convoy.status.is_active())
        .collect()
}

/// Convoys assigned to the given route, in collection order.
pub fn convoys_on_route(snapshot: &Snapshot, route: RouteId) -> Vec<&Convoy> {
    snapshot
        .convoys
        .iter()
        .filter(|convoy| convoy.route_id == Some(route))
        .collect()
}

/// Threats pinned to the given route, in collection order.
pub fn threats_for_route(snapshot: &Snapshot, route: RouteId) -> Vec<&Threat> {
    snapshot
        .threats
        .iter()
        .filter(|threat| threat.route_id == Some(route))
        .collect()
}

/// AI recommendations addressed to the given convoy.
///
/// A recommendation carrying an explicit `convoy_id` is matched on that
/// key alone. Recommendations without one fall back to case-insensitive
/// substring matching of the convoy's callsign against the free text, a
/// legacy-payload concession: nothing guarantees callsigns are not
/// substrings of each other.
pub fn recommendations_for_convoy(
    snapshot: &Snapshot,
    id: ConvoyId,
) -> Vec<&Recommendation> {
    let callsign = convoy_by_id(snapshot, id)
        .map(|convoy| convoy.callsign.to_lowercase());

    snapshot
        .ai_analysis
        .recommendations
        .iter()
        .filter(|rec| match rec.convoy_id {
            Some(key) => key == id,
            None => callsign
                .as_deref()
                .is_some_and(|cs| rec.text.to_lowercase().contains(cs)),
        })
        .collect()
}

/// Resolve the selected convoy against a snapshot. A dangling selection
/// resolves to `None`.
pub fn selected_convoy<'a>(
    snapshot: &'a Snapshot,
    selection: SelectionState,
) -> Option<&'a Convoy> {
    selection.convoy.and_then(|id| convoy_by_id(snapshot, id))
}

/// Resolve the selected route against a snapshot.
pub fn selected_route<'a>(
    snapshot: &'a Snapshot,
    selection: SelectionState,
) -> Option<&'a Route> {
    selection.route.and_then(|id| route_by_id(snapshot, id))
}
