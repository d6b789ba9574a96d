//! Deduplication of offering areas, projections, and format names.
//!
//! All helpers key on the case-insensitive, trimmed code (or value, for bare
//! strings), keep the first occurrence, and preserve insertion order. They
//! are pure and total over well-formed input.

use std::collections::HashSet;

use tracing::instrument;

use super::offering::{Area, AreaOptions, DownloadOffering, Projection};

/// Deduplicates the areas of a list of offerings.
///
/// One entry per distinct lower-cased, trimmed area code; ties broken by
/// first occurrence; retained fields are trimmed.
#[must_use]
#[instrument(skip(offerings), fields(count = offerings.len()))]
pub fn dedupe_areas(offerings: &[DownloadOffering]) -> Vec<Area> {
    let mut seen = HashSet::new();
    let mut areas = Vec::new();

    for offering in offerings {
        let key = offering.area_code.trim().to_lowercase();
        if seen.insert(key) {
            areas.push(Area {
                kind: offering.area_type.trim().to_string(),
                name: offering.area_name.trim().to_string(),
                code: offering.area_code.trim().to_string(),
            });
        }
    }

    areas
}

/// Deduplicates the projections across all offerings.
///
/// Same keying rule as [`dedupe_areas`], applied to the flattened projection
/// lists (key: lower-cased, trimmed projection code).
#[must_use]
#[instrument(skip(offerings), fields(count = offerings.len()))]
pub fn dedupe_projections(offerings: &[DownloadOffering]) -> Vec<Projection> {
    let mut seen = HashSet::new();
    let mut projections = Vec::new();

    for projection in offerings.iter().flat_map(|o| &o.projections) {
        let key = projection.code.trim().to_lowercase();
        if seen.insert(key) {
            projections.push(Projection {
                name: projection.name.trim().to_string(),
                code: projection.code.trim().to_string(),
            });
        }
    }

    projections
}

/// Deduplicates a list of strings case-insensitively.
///
/// One entry per distinct lower-cased, trimmed value; the first-seen trimmed
/// casing is kept. Insertion order is preserved (no sorting, unlike topic
/// normalization in search tooling: the order form wants upstream order).
#[must_use]
pub fn dedupe_strings<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut deduped = Vec::new();

    for value in values {
        let trimmed = value.as_ref().trim();
        if seen.insert(trimmed.to_lowercase()) {
            deduped.push(trimmed.to_string());
        }
    }

    deduped
}

/// Deduplicates the format names across all offerings.
#[must_use]
#[instrument(skip(offerings), fields(count = offerings.len()))]
pub fn dedupe_format_names(offerings: &[DownloadOffering]) -> Vec<String> {
    let names: Vec<&str> = offerings
        .iter()
        .flat_map(|o| &o.formats)
        .map(|f| f.name.as_str())
        .collect();
    dedupe_strings(&names)
}

/// Returns the projections and format names for one selected area.
///
/// Scans for the first offering whose `area_code` equals `area_code` exactly
/// (no normalization; the picker hands back the code it was given). Returns
/// empty lists when nothing matches.
#[must_use]
#[instrument(skip(offerings), fields(count = offerings.len()))]
pub fn formats_and_projections_for_area(
    area_code: &str,
    offerings: &[DownloadOffering],
) -> AreaOptions {
    let Some(offering) = offerings.iter().find(|o| o.area_code == area_code) else {
        return AreaOptions::default();
    };

    AreaOptions {
        projections: offering
            .projections
            .iter()
            .map(|p| Projection {
                name: p.name.clone(),
                code: p.code.clone(),
            })
            .collect(),
        formats: offering.formats.iter().map(|f| f.name.clone()).collect(),
    }
}
