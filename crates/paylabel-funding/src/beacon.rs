//! Impression beacons.
//!
//! Rendering only places a marker in the tree; firing is left to the host,
//! which walks the finished tree with [`dispatch_beacons`].

use paylabel_dom::{NodeId, RenderTree};

use crate::constants::class;

/// Fires a beacon URL. Implementations must not block the caller.
pub trait BeaconDelivery {
    /// Fire `url` once, scoped by `nonce` when present.
    fn fire(&self, url: &str, nonce: Option<&str>);
}

/// A beacon marker found in a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeaconMarker {
    /// The tracking URL.
    pub url: String,
    /// Request-scoping token.
    pub nonce: Option<String>,
}

/// Beacon markers in `tree`, in document order.
#[must_use]
pub fn beacon_markers(tree: &RenderTree) -> Vec<BeaconMarker> {
    tree.find_by_class(class::TRACKING_BEACON)
        .into_iter()
        .filter_map(|id: NodeId| tree.as_element(id))
        .filter_map(|element| {
            Some(BeaconMarker {
                url: element.attr("src")?.to_string(),
                nonce: element.attr("nonce").map(str::to_string),
            })
        })
        .collect()
}

/// Fire every beacon marker in `tree` exactly once. Returns how many fired.
pub fn dispatch_beacons(tree: &RenderTree, delivery: &dyn BeaconDelivery) -> usize {
    let markers = beacon_markers(tree);
    for marker in &markers {
        tracing::debug!(url = %marker.url, "firing impression beacon");
        delivery.fire(&marker.url, marker.nonce.as_deref());
    }
    markers.len()
}
