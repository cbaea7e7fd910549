//! CLI command handlers, one per file.

mod batch;
mod build;
mod completions;
mod decode;
mod man;
mod names;

use anyhow::{Context, Result};
use cdsr_core::{build_collection, build_item_with, ItemLayout, Metadata};
use std::io::Read;

pub use batch::run_batch;
pub use build::run_build;
pub use completions::run_completions;
pub use decode::run_decode;
pub use man::run_man;
pub use names::run_names;

/// Collection and item names, when the record carries every key both need.
pub(crate) fn names_of(metadata: &Metadata, layout: ItemLayout) -> Option<(String, String)> {
    let collection = build_collection(metadata).ok()?;
    let item = build_item_with(metadata, layout).ok()?;
    Some((collection, item))
}

/// Reads `arg` as a file path, or stdin when it is `-`.
pub(crate) fn read_input(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(arg).with_context(|| format!("read {}", arg))
    }
}
