//! Shared fixtures for the per-satellite integration tests.

#![allow(dead_code)]

use cdsr_core::{build_collection, build_item, decode_path, BuildError, Metadata};

/// Metadata of a fully decoded asset, fields in declared order:
/// satellite, sensor, path, row, date, geo_processing, radio_processing, antenna.
pub fn asset_metadata(fields: [&str; 8]) -> Metadata {
    let [satellite, sensor, path, row, date, geo_processing, radio_processing, antenna] = fields;
    Metadata {
        satellite: Some(satellite.into()),
        sensor: Some(sensor.into()),
        path: Some(path.into()),
        row: Some(row.into()),
        date: Some(date.into()),
        geo_processing: Some(geo_processing.into()),
        radio_processing: Some(radio_processing.into()),
        antenna: Some(antenna.into()),
    }
}

/// Metadata of a decoded directory: no date, no radiometric processing.
pub fn directory_metadata(fields: [&str; 6]) -> Metadata {
    let [satellite, sensor, path, row, geo_processing, antenna] = fields;
    Metadata {
        satellite: Some(satellite.into()),
        sensor: Some(sensor.into()),
        path: Some(path.into()),
        row: Some(row.into()),
        date: None,
        geo_processing: Some(geo_processing.into()),
        radio_processing: None,
        antenna: Some(antenna.into()),
    }
}

/// Decodes `asset_path` and checks the record and both names built from it.
pub fn assert_valid_asset(asset_path: &str, expected: &Metadata, collection: &str, item: &str) {
    let decoded = decode_path(asset_path)
        .unwrap_or_else(|e| panic!("decode {}: {}", asset_path, e));
    assert_eq!(&decoded, expected, "metadata of {}", asset_path);
    assert_eq!(build_collection(&decoded).unwrap(), collection, "collection of {}", asset_path);
    assert_eq!(build_item(&decoded).unwrap(), item, "item of {}", asset_path);
}

/// Decodes a directory path and checks that neither name can be built from it.
pub fn assert_valid_directory(path: &str, expected: &Metadata) {
    let decoded = decode_path(path).unwrap_or_else(|e| panic!("decode {}: {}", path, e));
    assert_eq!(&decoded, expected, "metadata of {}", path);
    assert_eq!(
        build_collection(&decoded),
        Err(BuildError::NonStringValue {
            keys: vec!["radio_processing"]
        })
    );
    assert_eq!(
        build_item(&decoded),
        Err(BuildError::NonStringValue { keys: vec!["date"] })
    );
}

/// Decodes `path` and returns the rendered error.
pub fn decode_error(path: &str) -> String {
    match decode_path(path) {
        Ok(m) => panic!("expected {} to be rejected, got {:?}", path, m),
        Err(e) => e.to_string(),
    }
}
