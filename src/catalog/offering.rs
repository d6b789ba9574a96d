//! Types for the per-area download offerings delivered by the catalog API.

use serde::Deserialize;

/// One per-area download offering for a dataset, as returned by the catalog
/// download API. Read-only input to this crate.
///
/// Absent projection/format lists deserialize as empty rather than failing,
/// since the upstream API omits them for some area types.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadOffering {
    /// Kind of area ("fylke", "kommune", "landsdekkende", ...).
    #[serde(default)]
    pub area_type: String,
    /// Display name of the area.
    #[serde(default)]
    pub area_name: String,
    /// Area code, the selection key for this offering.
    #[serde(default)]
    pub area_code: String,
    /// Map projections the dataset can be delivered in for this area.
    #[serde(default)]
    pub projections: Vec<ProjectionRef>,
    /// File formats the dataset can be delivered in for this area.
    #[serde(default)]
    pub formats: Vec<FormatRef>,
}

/// A projection reference inside an offering.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProjectionRef {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub name: String,
}

/// A file-format reference inside an offering.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FormatRef {
    #[serde(default)]
    pub name: String,
}

/// A deduplicated area entry for the area picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// Kind of area (trimmed `area_type`).
    pub kind: String,
    /// Display name (trimmed).
    pub name: String,
    /// Area code (trimmed, original casing of first occurrence).
    pub code: String,
}

/// A deduplicated projection entry for the projection picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub name: String,
    pub code: String,
}

/// Projections and format names available for one selected area.
///
/// Both lists are empty when no offering matches the selected area code;
/// absence is a valid, silent outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaOptions {
    pub projections: Vec<Projection>,
    pub formats: Vec<String>,
}
