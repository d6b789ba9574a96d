//! HTTP clients for the catalog's external services.
//!
//! Three outbound surfaces, one per service:
//!
//! - [`AddressClient`] - free-text address search (GET)
//! - [`LayersClient`] - WMS layer introspection (GET)
//! - [`OrderClient`] - dataset download ordering (POST)
//!
//! The address and layer clients absorb their own failures and resolve to
//! empty results (logged, never surfaced as hard errors); only order
//! submission propagates upstream failures, preserving the upstream HTTP
//! status in [`ApiError::Upstream`]. None of the clients retry, cancel, or
//! de-duplicate requests; the shared client timeouts are the only bound.

mod address;
mod error;
mod http_client;
mod layers;
mod order;

pub use address::{AddressClient, AddressHit, AddressPoint};
pub use error::ApiError;
pub use layers::LayersClient;
pub use order::{
    OrderArea, OrderClient, OrderFile, OrderFormat, OrderLine, OrderProjection, OrderReceipt,
    OrderRequest,
};
