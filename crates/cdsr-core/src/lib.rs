//! Codec for CDSR satellite-imagery archive paths.
//!
//! [`decode_path`] turns a path such as
//! `/TIFF/AMAZONIA1/2021_03/AMAZONIA_1_WFI_DRD_2021_03_03.12_57_40_CB11/217_015_0/2_BC_LCC_WGS84/AMAZONIA_1_WFI_20210303_217_015_L2_BAND4.tif`
//! into a [`Metadata`] record; [`build_collection`] and [`build_item`] turn the
//! record into `AMAZONIA1_WFI_L2_DN` and `AMAZONIA1_WFI_217015_20210303_CB11`.

pub mod config;
pub mod logging;

pub mod build;
pub mod decode;
pub mod metadata;

pub use build::{build_collection, build_item, build_item_with, BuildError, ItemLayout};
pub use decode::{decode_path, decode_value, DecodeError, PathDecoder};
pub use metadata::Metadata;
