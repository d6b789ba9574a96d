//! Download-offering types and deduplication helpers.
//!
//! The Kartkatalog download API describes, per dataset, which geographic
//! areas it can be ordered for and which projections and file formats each
//! area supports. The raw per-area offerings repeat projections and formats
//! freely; this module derives the deduplicated views the order form needs.
//!
//! - [`DownloadOffering`] - Raw per-area offering as delivered by the API
//! - [`dedupe_areas`] / [`dedupe_projections`] / [`dedupe_format_names`] -
//!   Deduplicated selection lists, first occurrence wins
//! - [`formats_and_projections_for_area`] - Options for one selected area

mod normalize;
mod offering;

pub use normalize::{
    dedupe_areas, dedupe_format_names, dedupe_projections, dedupe_strings,
    formats_and_projections_for_area,
};
pub use offering::{
    Area, AreaOptions, DownloadOffering, FormatRef, Projection, ProjectionRef,
};
