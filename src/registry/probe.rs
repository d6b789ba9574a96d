//! Introspection seam for fetching a WMS endpoint's layer list.
//!
//! This trait keeps the registry free of networking concerns while allowing
//! the real introspection client (and test fakes) to plug in behind an
//! abstract boundary.

use async_trait::async_trait;

use super::dataset::WmsLayer;

/// Contract for fetching the selectable layers of a WMS endpoint.
///
/// Implementations absorb their own failures: a probe that cannot reach or
/// parse the endpoint returns an empty list (logged at the call site inside
/// the implementation), never an error. Adding a source must not fail just
/// because introspection did.
#[async_trait]
pub trait LayerProbe: Send + Sync {
    /// Returns the layers offered by the endpoint, keyed by its full URL.
    async fn available_layers(&self, endpoint_url: &str) -> Vec<WmsLayer>;
}
