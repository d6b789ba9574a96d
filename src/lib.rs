//! Kartklient Core Library
//!
//! This library provides the non-UI core of a map-centric client for the
//! Geonorge geodata catalog: address search, tracked WMS layer management,
//! and dataset download ordering.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//! - [`catalog`] - Download-offering types and deduplication helpers
//! - [`registry`] - In-memory registry of tracked WMS datasets
//! - [`api`] - HTTP clients for the address, layer-introspection, and ordering services
//! - [`search`] - Debounced search-as-you-type driver
//! - [`config`] - Endpoint and client-identification configuration

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod catalog;
pub mod config;
pub mod registry;
pub mod search;
mod user_agent;

// Re-export commonly used types
pub use api::{
    AddressClient, AddressHit, ApiError, LayersClient, OrderArea, OrderClient, OrderFormat,
    OrderLine, OrderProjection, OrderReceipt, OrderRequest,
};
pub use catalog::{
    Area, AreaOptions, DownloadOffering, Projection, dedupe_areas, dedupe_format_names,
    dedupe_projections, dedupe_strings, formats_and_projections_for_area,
};
pub use config::ClientConfig;
pub use registry::{
    AddOutcome, DuplicateSignal, LayerProbe, LayerRegistry, TrackedDataset, WmsLayer, WmsSource,
};
pub use search::DebouncedSearch;
