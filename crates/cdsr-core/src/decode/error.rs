//! Error types for path decoding.

use thiserror::Error;

/// Malformed segment found while decoding one path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    /// Scene directory matches no known satellite family.
    #[error("invalid scene directory: `{scene_dir}`")]
    UnrecognizedSceneDir { scene_dir: String },

    /// Antenna token missing or not a known ground station.
    #[error("invalid antenna in scene directory: `{scene_dir}`")]
    InvalidAntenna { scene_dir: String },

    /// `YYYY_MM_DD` reception date of an AMAZONIA/CBERS4 scene is malformed.
    #[error("invalid reception date in scene directory: `{scene_dir}`")]
    InvalidReceptionDate { scene_dir: String },

    /// `HH_MM_SS` reception time of an AMAZONIA/CBERS4 scene is malformed.
    #[error("invalid reception time in scene directory: `{scene_dir}`")]
    InvalidReceptionTime { scene_dir: String },

    /// Compact `YYYYMMDD` date of a CBERS2B/LANDSAT scene has the wrong size.
    #[error("date `{date}` must have {expected} digits")]
    InvalidDateSize { date: String, expected: usize },

    /// Compact `HHMMSS` time of a CBERS2B/LANDSAT scene has the wrong size.
    #[error("time `{time}` must have {expected} digits")]
    InvalidTimeSize { time: String, expected: usize },

    #[error("path/row directory cannot be decoded: `{dir}`")]
    UnrecognizableDir { dir: String },

    #[error("geo. processing directory cannot be decoded: `{dir}`")]
    UnrecognizableGeoProcessing { dir: String },

    #[error("an asset must have a `.tif` or `.xml` extension: `{asset}`")]
    UnsupportedExtension { asset: String },

    /// Product date token of the asset filename is not `YYYYMMDD`.
    #[error("invalid date inside asset: `{date}`")]
    InvalidAssetDate { date: String },
}

/// Error returned by [`decode_path`](super::decode_path) and friends.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Dynamic input was not a string.
    #[error("path must be a string, not {found}")]
    Type { found: &'static str },

    /// Wrong number of segments after the root marker.
    #[error("invalid `{levels}` level to path: `{path}`")]
    InvalidLevel { levels: usize, path: String },

    /// A segment failed its grammar; `path` is the full input.
    #[error("unable to decode `{path}`: {source}")]
    Segment {
        path: String,
        #[source]
        source: SegmentError,
    },
}

/// Machine-distinguishable decode failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    Type,
    InvalidLevel,
    UnrecognizedSceneDir,
    InvalidAntenna,
    InvalidReceptionDate,
    InvalidReceptionTime,
    InvalidDateSize,
    InvalidTimeSize,
    UnrecognizableDir,
    UnrecognizableGeoProcessing,
    UnsupportedExtension,
    InvalidAssetDate,
}

impl SegmentError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            SegmentError::UnrecognizedSceneDir { .. } => DecodeErrorKind::UnrecognizedSceneDir,
            SegmentError::InvalidAntenna { .. } => DecodeErrorKind::InvalidAntenna,
            SegmentError::InvalidReceptionDate { .. } => DecodeErrorKind::InvalidReceptionDate,
            SegmentError::InvalidReceptionTime { .. } => DecodeErrorKind::InvalidReceptionTime,
            SegmentError::InvalidDateSize { .. } => DecodeErrorKind::InvalidDateSize,
            SegmentError::InvalidTimeSize { .. } => DecodeErrorKind::InvalidTimeSize,
            SegmentError::UnrecognizableDir { .. } => DecodeErrorKind::UnrecognizableDir,
            SegmentError::UnrecognizableGeoProcessing { .. } => {
                DecodeErrorKind::UnrecognizableGeoProcessing
            }
            SegmentError::UnsupportedExtension { .. } => DecodeErrorKind::UnsupportedExtension,
            SegmentError::InvalidAssetDate { .. } => DecodeErrorKind::InvalidAssetDate,
        }
    }
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        match self {
            DecodeError::Type { .. } => DecodeErrorKind::Type,
            DecodeError::InvalidLevel { .. } => DecodeErrorKind::InvalidLevel,
            DecodeError::Segment { source, .. } => source.kind(),
        }
    }

    /// Wraps a segment failure with the path it was found in.
    pub(crate) fn segment(path: &str, source: SegmentError) -> Self {
        DecodeError::Segment {
            path: path.to_string(),
            source,
        }
    }
}

/// JSON type name used in `Type` errors.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
