//! Endpoint and client-identification configuration.
//!
//! The front-end keeps these as build-time constants; here they live in one
//! struct so tests can point every client at a mock server.

/// Production address-search API (Kartverket).
pub const DEFAULT_ADDRESS_BASE_URL: &str = "https://ws.geonorge.no/adresser/v1";

/// Production layer-introspection service.
pub const DEFAULT_LAYERS_BASE_URL: &str = "https://kart.geonorge.no/api";

/// Production dataset-ordering API.
pub const DEFAULT_ORDER_BASE_URL: &str = "https://nedlasting.geonorge.no";

/// Default cap on address-search hits per request.
pub const DEFAULT_SEARCH_HIT_CAP: u32 = 10;

/// Default debounce delay for search-as-you-type, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Configuration for the catalog clients.
///
/// `software_client` / `software_client_version` identify this tool in order
/// submissions, mirroring the identification the ordering API expects from
/// allowed clients.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the address-search API.
    pub address_base_url: String,
    /// Base URL for the WMS layer-introspection service.
    pub layers_base_url: String,
    /// Base URL for the dataset-ordering API.
    pub order_base_url: String,
    /// Usage group reported in download orders.
    pub usage_group: String,
    /// Client name reported in download orders.
    pub software_client: String,
    /// Client version reported in download orders.
    pub software_client_version: String,
    /// Maximum address-search hits requested per query.
    pub search_hit_cap: u32,
    /// Debounce delay for search-as-you-type, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            address_base_url: DEFAULT_ADDRESS_BASE_URL.to_string(),
            layers_base_url: DEFAULT_LAYERS_BASE_URL.to_string(),
            order_base_url: DEFAULT_ORDER_BASE_URL.to_string(),
            usage_group: "privat".to_string(),
            software_client: "kartklient".to_string(),
            software_client_version: env!("CARGO_PKG_VERSION").to_string(),
            search_hit_cap: DEFAULT_SEARCH_HIT_CAP,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}
