//! `cdsr batch` – decode every entry of a path list.

use anyhow::{bail, Context, Result};
use cdsr_core::{DecodeError, ItemLayout, Metadata, PathDecoder};
use serde_json::Value;

use super::{names_of, read_input};

/// One entry of a batch list.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Entry {
    Line(String),
    Json(Value),
}

impl Entry {
    fn decode(&self, decoder: &PathDecoder) -> Result<Metadata, DecodeError> {
        match self {
            Entry::Line(path) => decoder.decode(path),
            Entry::Json(value) => decoder.decode_value(value),
        }
    }

    fn label(&self) -> String {
        match self {
            Entry::Line(path) => path.clone(),
            Entry::Json(Value::String(path)) => path.clone(),
            Entry::Json(value) => value.to_string(),
        }
    }
}

/// A JSON array yields one entry per element; anything else is read as
/// newline-delimited paths, skipping blank lines.
pub(crate) fn parse_entries(text: &str) -> Result<Vec<Entry>> {
    if text.trim_start().starts_with('[') {
        let values: Vec<Value> = serde_json::from_str(text).context("parse JSON path list")?;
        return Ok(values.into_iter().map(Entry::Json).collect());
    }
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Entry::Line(line.to_string()))
        .collect())
}

pub fn run_batch(decoder: &PathDecoder, layout: ItemLayout, file: &str) -> Result<()> {
    let entries = parse_entries(&read_input(file)?)?;
    let mut failed = 0usize;

    for entry in &entries {
        match entry.decode(decoder) {
            Ok(metadata) => match names_of(&metadata, layout) {
                Some((collection, item)) => println!("ok {} {} {}", entry.label(), collection, item),
                None => println!("ok {}", entry.label()),
            },
            Err(err) => {
                failed += 1;
                tracing::warn!(entry = %entry.label(), error = %err, "batch entry failed");
                println!("error {}", err);
            }
        }
    }

    tracing::info!(total = entries.len(), failed, "batch finished");
    if failed > 0 {
        bail!("{} of {} entries failed", failed, entries.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdsr_core::decode::DecodeErrorKind;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ASSET: &str = "/TIFF/LANDSAT5/2011_11/LANDSAT5_TM_20111101.140950/233_054_0/2_BC_UTM_WGS84/LANDSAT_5_TM_20111101_233_054_L2_BAND1.tif";

    #[test]
    fn text_list_skips_blank_lines() {
        let entries = parse_entries("\n  /TIFF/a  \n\n/TIFF/b\n").unwrap();
        assert_eq!(
            entries,
            vec![Entry::Line("/TIFF/a".into()), Entry::Line("/TIFF/b".into())]
        );
    }

    #[test]
    fn json_list_keeps_non_strings() {
        let entries = parse_entries(r#"["/TIFF/a", 42, null]"#).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1], Entry::Json(json!(42)));
    }

    #[test]
    fn json_non_string_is_type_error() {
        let decoder = PathDecoder::default();
        let err = Entry::Json(json!(42)).decode(&decoder).unwrap_err();
        assert_eq!(err.kind(), DecodeErrorKind::Type);
        assert_eq!(err.to_string(), "path must be a string, not a number");
    }

    #[test]
    fn batch_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "{}", ASSET).unwrap();
        f.flush().unwrap();
        let decoder = PathDecoder::default();
        run_batch(&decoder, ItemLayout::Antenna, f.path().to_str().unwrap()).unwrap();
    }

    #[test]
    fn batch_reports_failures() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "{}\n/TIFF/short/path", ASSET).unwrap();
        f.flush().unwrap();
        let decoder = PathDecoder::default();
        let err = run_batch(&decoder, ItemLayout::Antenna, f.path().to_str().unwrap()).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 entries failed");
    }
}
