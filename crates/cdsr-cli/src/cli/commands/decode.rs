//! `cdsr decode` – decode paths and print their metadata.

use anyhow::{Context, Result};
use cdsr_core::{ItemLayout, Metadata, PathDecoder};

use super::names_of;

pub fn run_decode(
    decoder: &PathDecoder,
    layout: ItemLayout,
    paths: &[String],
    json: bool,
) -> Result<()> {
    for path in paths {
        let metadata = decoder.decode(path)?;
        let names = names_of(&metadata, layout);
        if json {
            let value = json_record(path, &metadata, names.as_ref())?;
            println!("{}", serde_json::to_string(&value)?);
        } else {
            println!("{}", text_record(path, &metadata, names.as_ref()));
        }
    }
    Ok(())
}

pub(crate) fn text_record(path: &str, metadata: &Metadata, names: Option<&(String, String)>) -> String {
    let mut line = path.to_string();
    for field in Metadata::FIELDS {
        line.push_str(&format!(" {}={}", field, metadata.field(field).unwrap_or("-")));
    }
    if let Some((collection, item)) = names {
        line.push_str(&format!(" collection={} item={}", collection, item));
    }
    line
}

pub(crate) fn json_record(
    path: &str,
    metadata: &Metadata,
    names: Option<&(String, String)>,
) -> Result<serde_json::Value> {
    let mut value = serde_json::json!({
        "path": path,
        "metadata": serde_json::to_value(metadata).context("serialize metadata")?,
    });
    if let Some((collection, item)) = names {
        value["collection"] = collection.as_str().into();
        value["item"] = item.as_str().into();
    }
    Ok(value)
}
