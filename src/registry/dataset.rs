//! Tracked-dataset and layer types.

use serde::Deserialize;

/// A selectable layer of a WMS source, as reported by the introspection
/// service (`available_layers` entries).
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WmsLayer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
}

/// A WMS source the user has added to the current map session.
///
/// Lives only in the in-memory session; there is no persistence across
/// sessions. `selected_layers` is an order-preserving subset of the names in
/// `available_layers`.
#[derive(Debug, Clone)]
pub struct TrackedDataset {
    /// Session-unique id, generated at add time.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Full WMS endpoint URL, including any query string.
    pub wms_endpoint: String,
    /// Layers the endpoint offers.
    pub available_layers: Vec<WmsLayer>,
    /// Names of the layers currently toggled on.
    pub selected_layers: Vec<String>,
}

impl TrackedDataset {
    /// Returns true when the named layer is toggled on.
    #[must_use]
    pub fn is_layer_selected(&self, layer_name: &str) -> bool {
        self.selected_layers.iter().any(|n| n == layer_name)
    }
}
