//! `cdsr build` – build names from a JSON metadata object.

use anyhow::{Context, Result};
use cdsr_core::{build_collection, build_item_with, BuildError, ItemLayout};

use super::read_input;

pub fn run_build(metadata: &str, layout: ItemLayout) -> Result<()> {
    let text = if metadata == "-" {
        read_input(metadata)?
    } else {
        metadata.to_string()
    };
    let value: serde_json::Value = serde_json::from_str(&text).context("parse metadata JSON")?;
    let (collection, item) = build_names(&value, layout)?;
    println!("{} {}", collection, item);
    Ok(())
}

pub(crate) fn build_names(
    value: &serde_json::Value,
    layout: ItemLayout,
) -> Result<(String, String), BuildError> {
    Ok((build_collection(value)?, build_item_with(value, layout)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_both_names() {
        let value = json!({
            "satellite": "CBERS4A", "sensor": "MUX", "path": "209", "row": "110",
            "date": "2021-01-01", "geo_processing": "2", "radio_processing": "DN",
            "antenna": "ETC2",
        });
        assert_eq!(
            build_names(&value, ItemLayout::Antenna).unwrap(),
            (
                "CBERS4A_MUX_L2_DN".to_string(),
                "CBERS4A_MUX_209110_20210101_ETC2".to_string()
            )
        );
        assert_eq!(
            build_names(&value, ItemLayout::Processing).unwrap().1,
            "CBERS4A_MUX_209110_20210101_L2_DN"
        );
    }

    #[test]
    fn non_object_is_rejected() {
        assert_eq!(
            build_names(&json!([1, 2]), ItemLayout::Antenna),
            Err(BuildError::Type { found: "an array" })
        );
    }
}
