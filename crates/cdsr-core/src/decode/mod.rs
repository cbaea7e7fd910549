//! Path decoding: CDSR archive path -> [`Metadata`].
//!
//! Paths are located by their `TIFF` root marker:
//!
//! ```text
//! /TIFF/<catalog>/<YYYY_MM>/<scene dir>/<path_row dir>/<geo dir>[/<asset>]
//! ```
//!
//! Seven segments (marker included) make an asset path, six a directory path.
//! Directory paths decode without `date` and `radio_processing`.

mod asset;
mod dirs;
mod error;
mod options;
mod scene;

use std::sync::OnceLock;

use crate::metadata::Metadata;

pub use asset::{check_extension, parse_asset, Asset};
pub use dirs::{parse_geo_processing_dir, parse_path_row_dir};
pub use error::{DecodeError, DecodeErrorKind, SegmentError};
pub use options::{DecoderOptions, KNOWN_ANTENNAS};
pub use scene::{parse_scene_dir, SceneDir, SceneFamily};

pub(crate) use error::json_type_name;

/// Segment that anchors the archive layout.
pub const ROOT_MARKER: &str = "TIFF";

/// Segment count of an asset path, marker included.
pub const ASSET_LEVELS: usize = 7;

/// Segment count of a directory path, marker included.
pub const DIRECTORY_LEVELS: usize = 6;

/// Decodes archive paths with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct PathDecoder {
    options: DecoderOptions,
}

impl PathDecoder {
    pub fn new(options: DecoderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decodes an asset or directory path.
    pub fn decode(&self, path: &str) -> Result<Metadata, DecodeError> {
        let result = self.decode_segments(path);
        match &result {
            Ok(metadata) => tracing::debug!(path, ?metadata, "decoded path"),
            Err(err) => tracing::debug!(path, error = %err, "path rejected"),
        }
        result
    }

    /// Decodes a dynamically typed path; anything but a string is a `Type` error.
    pub fn decode_value(&self, value: &serde_json::Value) -> Result<Metadata, DecodeError> {
        match value.as_str() {
            Some(path) => self.decode(path),
            None => Err(DecodeError::Type {
                found: json_type_name(value),
            }),
        }
    }

    fn decode_segments(&self, path: &str) -> Result<Metadata, DecodeError> {
        let segments = archive_segments(path);
        let asset = match segments.len() {
            ASSET_LEVELS => Some(segments[6]),
            DIRECTORY_LEVELS => None,
            levels => {
                return Err(DecodeError::InvalidLevel {
                    levels,
                    path: path.to_string(),
                })
            }
        };
        let wrap = |source| DecodeError::segment(path, source);

        // Extension first: an unsupported asset is reported as such even when
        // the directories above it are malformed too.
        if let Some(asset) = asset {
            check_extension(asset).map_err(wrap)?;
        }

        // segments[1] (catalog) and segments[2] (year_month) carry nothing the
        // scene directory does not.
        let scene = parse_scene_dir(segments[3], &self.options).map_err(wrap)?;
        let (grid_path, grid_row) = parse_path_row_dir(segments[4]).map_err(wrap)?;
        let geo_processing = parse_geo_processing_dir(segments[5]).map_err(wrap)?;
        let asset = asset.map(parse_asset).transpose().map_err(wrap)?;

        Ok(Metadata {
            satellite: Some(scene.satellite),
            sensor: Some(scene.sensor),
            path: Some(grid_path),
            row: Some(grid_row),
            date: asset.as_ref().map(|a| a.date.clone()),
            geo_processing: Some(geo_processing),
            radio_processing: asset.map(|a| a.radio_processing.to_string()),
            antenna: Some(scene.antenna),
        })
    }
}

/// Non-empty segments starting at the root marker; none when the marker is
/// absent.
fn archive_segments(path: &str) -> Vec<&str> {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.iter().position(|s| *s == ROOT_MARKER) {
        Some(start) => segments[start..].to_vec(),
        None => Vec::new(),
    }
}

fn default_decoder() -> &'static PathDecoder {
    static DECODER: OnceLock<PathDecoder> = OnceLock::new();
    DECODER.get_or_init(PathDecoder::default)
}

/// Decodes a path with the default options.
///
/// ```
/// use cdsr_core::decode::decode_path;
///
/// let m = decode_path(
///     "/TIFF/CBERS2B/2010_03/CBERS2B_CCD_20100301.130915/151_098_0/\
///      2_BC_UTM_WGS84/CBERS_2B_CCD2XS_20100301_151_098_L2_BAND1.tif",
/// )
/// .unwrap();
/// assert_eq!(m.satellite.as_deref(), Some("CBERS2B"));
/// assert_eq!(m.date.as_deref(), Some("2010-03-01"));
/// assert_eq!(m.antenna.as_deref(), Some("ND"));
/// ```
pub fn decode_path(path: &str) -> Result<Metadata, DecodeError> {
    default_decoder().decode(path)
}

/// Decodes a JSON value holding a path with the default options.
pub fn decode_value(value: &serde_json::Value) -> Result<Metadata, DecodeError> {
    default_decoder().decode_value(value)
}
