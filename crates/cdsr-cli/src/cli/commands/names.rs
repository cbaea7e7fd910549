//! `cdsr names` – print `collection item` for asset paths.

use anyhow::{Context, Result};
use cdsr_core::{build_collection, build_item_with, ItemLayout, PathDecoder};

pub fn run_names(decoder: &PathDecoder, layout: ItemLayout, paths: &[String]) -> Result<()> {
    for path in paths {
        let metadata = decoder.decode(path)?;
        let collection =
            build_collection(&metadata).with_context(|| format!("collection of {}", path))?;
        let item =
            build_item_with(&metadata, layout).with_context(|| format!("item of {}", path))?;
        println!("{} {}", collection, item);
    }
    Ok(())
}
