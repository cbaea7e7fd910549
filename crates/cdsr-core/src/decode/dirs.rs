//! Path/row and geo-processing directory grammars.

use super::error::SegmentError;
use crate::metadata::GEO_PROCESSING_LEVELS;

/// Decodes a path/row directory into `(path, row)`.
///
/// - `151_098_0` -> (`151`, `098`)
/// - `151_B_141_5_0` -> (`151`, `141`), used by multi-sub-scene sensors (HRC)
pub fn parse_path_row_dir(dir: &str) -> Result<(String, String), SegmentError> {
    match dir.split('_').collect::<Vec<_>>()[..] {
        [path, row, _] | [path, _, row, _, _] => Ok((path.to_string(), row.to_string())),
        _ => Err(SegmentError::UnrecognizableDir {
            dir: dir.to_string(),
        }),
    }
}

/// Decodes the processing level from a directory such as `2B_BC_UTM_WGS84`.
pub fn parse_geo_processing_dir(dir: &str) -> Result<String, SegmentError> {
    let level = dir.split('_').next().unwrap_or_default();
    if GEO_PROCESSING_LEVELS.contains(&level) {
        Ok(level.to_string())
    } else {
        Err(SegmentError::UnrecognizableGeoProcessing {
            dir: dir.to_string(),
        })
    }
}
