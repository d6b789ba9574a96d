//! In-memory registry of tracked WMS datasets.
//!
//! The registry keeps the ordered list of WMS sources the user has added to
//! the current map session. A new source is admitted only when no tracked
//! entry shares its base URL (endpoint URL truncated at the first `?`);
//! collisions surface as a [`DuplicateSignal`] for the confirmation dialog
//! and leave the registry untouched.
//!
//! All mutation happens on a single logical sequence of user-driven events,
//! so the registry is plain owned state with `&mut self` operations; each
//! `add_source`/`refresh_layers` call issues at most one introspection fetch
//! through the [`LayerProbe`] seam.

mod dataset;
mod probe;

pub use dataset::{TrackedDataset, WmsLayer};
pub use probe::LayerProbe;

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, info};

/// Title used in duplicate signals when the new reference carries no title.
const UNTITLED_FALLBACK: &str = "this dataset";

/// Sentinel endpoint value some catalog entries carry instead of a URL.
const NO_ENDPOINT_SENTINEL: &str = "none";

/// A new WMS reference handed to [`LayerRegistry::add_source`].
///
/// Either a bare endpoint URL or a structured payload that already carries
/// the layer metadata (saving the introspection round-trip).
#[derive(Debug, Clone)]
pub enum WmsSource {
    /// A direct endpoint URL; layers are fetched via the probe.
    Endpoint(String),
    /// A structured payload with inline layer metadata.
    Inline {
        endpoint_url: String,
        available_layers: Vec<WmsLayer>,
        title: Option<String>,
    },
}

/// Ephemeral duplicate notice, consumed by the confirmation dialog and
/// discarded after acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSignal {
    /// Resolved title of the reference that collided.
    pub title: String,
}

/// Outcome of an [`LayerRegistry::add_source`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The source was appended; carries the generated dataset id.
    Added { id: String },
    /// An existing entry shares the base URL; nothing was mutated.
    Duplicate(DuplicateSignal),
    /// The reference was empty or the `"none"` sentinel; nothing was mutated.
    Rejected,
}

/// Ordered registry of the session's tracked WMS datasets.
#[derive(Debug, Default)]
pub struct LayerRegistry {
    datasets: Vec<TrackedDataset>,
    next_seq: u64,
}

impl LayerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a WMS source to the session.
    ///
    /// Rejects empty references and the literal `"none"` sentinel
    /// (case-insensitive). Emits a [`DuplicateSignal`] without mutating when
    /// an existing entry shares the new source's base URL. Otherwise fetches
    /// layer metadata through `probe` unless it was supplied inline, and
    /// appends the entry with the first available layer pre-selected.
    pub async fn add_source(
        &mut self,
        source: WmsSource,
        title: Option<&str>,
        probe: &dyn LayerProbe,
    ) -> AddOutcome {
        let (endpoint, inline_layers, inline_title) = match source {
            WmsSource::Endpoint(url) => (url, None, None),
            WmsSource::Inline {
                endpoint_url,
                available_layers,
                title,
            } => (endpoint_url, Some(available_layers), title),
        };

        let endpoint = endpoint.trim().to_string();
        if endpoint.is_empty() || endpoint.eq_ignore_ascii_case(NO_ENDPOINT_SENTINEL) {
            debug!(endpoint = %endpoint, "Rejected WMS reference without a usable endpoint");
            return AddOutcome::Rejected;
        }

        let resolved_title = title
            .map(str::to_string)
            .or(inline_title)
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| UNTITLED_FALLBACK.to_string());

        let base = base_url(&endpoint);
        if let Some(existing) = self
            .datasets
            .iter()
            .find(|d| base_url(&d.wms_endpoint) == base)
        {
            info!(
                base_url = base,
                existing = %existing.title,
                "WMS source already tracked; raising duplicate signal"
            );
            return AddOutcome::Duplicate(DuplicateSignal {
                title: resolved_title,
            });
        }

        let available_layers = match inline_layers {
            Some(layers) => layers,
            None => probe.available_layers(&endpoint).await,
        };

        let id = self.next_id();
        let selected_layers = available_layers
            .first()
            .map(|layer| vec![layer.name.clone()])
            .unwrap_or_default();

        info!(
            id = %id,
            title = %resolved_title,
            layers = available_layers.len(),
            "Tracking new WMS source"
        );

        self.datasets.push(TrackedDataset {
            id: id.clone(),
            title: resolved_title,
            wms_endpoint: endpoint,
            available_layers,
            selected_layers,
        });

        AddOutcome::Added { id }
    }

    /// Removes the entry with the matching id; no-op if absent. The order of
    /// the remaining entries is unchanged.
    pub fn remove_source(&mut self, id: &str) {
        self.datasets.retain(|d| d.id != id);
    }

    /// Toggles a layer of a tracked dataset on or off.
    ///
    /// Selecting an already-selected layer or deselecting an absent one is a
    /// no-op, as is an unknown dataset id.
    pub fn set_layer_selected(&mut self, id: &str, layer_name: &str, selected: bool) {
        let Some(dataset) = self.datasets.iter_mut().find(|d| d.id == id) else {
            return;
        };

        if selected {
            if !dataset.is_layer_selected(layer_name) {
                dataset.selected_layers.push(layer_name.to_string());
            }
        } else {
            dataset.selected_layers.retain(|n| n != layer_name);
        }
    }

    /// Re-fetches the layer list for a tracked dataset and replaces it.
    ///
    /// When the entry had no prior selection, the first returned layer name
    /// is seeded as selected. No-op for unknown ids.
    pub async fn refresh_layers(&mut self, id: &str, endpoint_url: &str, probe: &dyn LayerProbe) {
        let layers = probe.available_layers(endpoint_url).await;

        let Some(dataset) = self.datasets.iter_mut().find(|d| d.id == id) else {
            return;
        };

        dataset.available_layers = layers;
        if dataset.selected_layers.is_empty()
            && let Some(first) = dataset.available_layers.first()
        {
            dataset.selected_layers.push(first.name.clone());
        }
    }

    /// The tracked datasets, in insertion order.
    #[must_use]
    pub fn datasets(&self) -> &[TrackedDataset] {
        &self.datasets
    }

    /// Number of tracked datasets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// True when nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    /// Generates a session-unique id: timestamp-derived, disambiguated by a
    /// monotonic per-registry counter so two adds in the same millisecond
    /// stay distinct.
    fn next_id(&mut self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default();
        self.next_seq += 1;
        format!("wms-{millis}-{}", self.next_seq)
    }
}

/// Returns the duplicate-detection key: the endpoint truncated at the first
/// `?`. Trailing slashes and scheme casing are deliberately left alone; the
/// rule matches what users paste, not canonicalized URLs.
#[must_use]
pub fn base_url(endpoint: &str) -> &str {
    match endpoint.split_once('?') {
        Some((base, _)) => base,
        None => endpoint,
    }
}
