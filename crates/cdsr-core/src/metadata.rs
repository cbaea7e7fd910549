//! Metadata record decoded from a CDSR archive path.

use serde::{Deserialize, Serialize};

/// Antenna value used by satellite families whose scene directories carry no
/// ground-station token (CBERS2B, LANDSAT).
pub const DEFAULT_ANTENNA: &str = "ND";

/// Radiometric processing of a raw digital-number product.
pub const RADIO_DN: &str = "DN";

/// Radiometric processing of a surface-reflectance product.
pub const RADIO_SR: &str = "SR";

/// Geometric processing levels found in the archive.
pub const GEO_PROCESSING_LEVELS: [&str; 4] = ["2", "2B", "3", "4"];

/// Structured metadata for one archive resource.
///
/// Decoding an asset path fills every field. Decoding a directory path leaves
/// `date` and `radio_processing` as `None` since both come from the asset
/// filename. Serializes to a flat JSON object with `null` for absent values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    pub satellite: Option<String>,
    pub sensor: Option<String>,
    pub path: Option<String>,
    pub row: Option<String>,
    /// ISO `YYYY-MM-DD`.
    pub date: Option<String>,
    pub geo_processing: Option<String>,
    /// `DN` or `SR`.
    pub radio_processing: Option<String>,
    pub antenna: Option<String>,
}

impl Metadata {
    /// Looks up a field by its serialized name.
    ///
    /// Returns `None` both for unknown names and for absent values; callers that
    /// need to tell them apart check [`Metadata::FIELDS`] first.
    pub fn field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "satellite" => &self.satellite,
            "sensor" => &self.sensor,
            "path" => &self.path,
            "row" => &self.row,
            "date" => &self.date,
            "geo_processing" => &self.geo_processing,
            "radio_processing" => &self.radio_processing,
            "antenna" => &self.antenna,
            _ => return None,
        };
        value.as_deref()
    }

    /// Field names in serialization order.
    pub const FIELDS: [&'static str; 8] = [
        "satellite",
        "sensor",
        "path",
        "row",
        "date",
        "geo_processing",
        "radio_processing",
        "antenna",
    ];

    /// True when the record was decoded from a full asset path.
    pub fn is_complete(&self) -> bool {
        Self::FIELDS.iter().all(|name| self.field(name).is_some())
    }
}
