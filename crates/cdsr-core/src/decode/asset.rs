//! Asset filename grammar.
//!
//! `AMAZONIA_1_WFI_20210303_217_015_L2_BAND4.tif`: the fourth underscore token
//! is the product date; `GRID_SURFACE` anywhere marks a surface-reflectance
//! product.

use super::error::SegmentError;
use super::scene::is_digits;
use crate::metadata::{RADIO_DN, RADIO_SR};

const SUPPORTED_EXTENSIONS: [&str; 2] = [".tif", ".xml"];

/// Decoded asset filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Product date, `YYYY-MM-DD`.
    pub date: String,
    /// `DN` or `SR`.
    pub radio_processing: &'static str,
}

/// Rejects assets that are neither GeoTIFF nor XML.
pub fn check_extension(asset: &str) -> Result<(), SegmentError> {
    let lower = asset.to_ascii_lowercase();
    if SUPPORTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        Ok(())
    } else {
        Err(SegmentError::UnsupportedExtension {
            asset: asset.to_string(),
        })
    }
}

/// Decodes an asset filename.
pub fn parse_asset(asset: &str) -> Result<Asset, SegmentError> {
    check_extension(asset)?;

    let stem = asset.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(asset);
    let token = stem.split('_').nth(3).unwrap_or(stem);
    if !is_digits(token, 8) {
        return Err(SegmentError::InvalidAssetDate {
            date: token.to_string(),
        });
    }
    let date = format!("{}-{}-{}", &token[0..4], &token[4..6], &token[6..8]);

    Ok(Asset {
        date,
        radio_processing: radio_processing(asset),
    })
}

fn radio_processing(asset: &str) -> &'static str {
    if asset.contains("GRID_SURFACE") {
        RADIO_SR
    } else {
        RADIO_DN
    }
}
