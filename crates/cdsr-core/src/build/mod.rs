//! Name building: [`Metadata`] -> collection and item names.
//!
//! - collection: `{satellite}_{sensor}_L{geo_processing}_{radio_processing}`,
//!   e.g. `AMAZONIA1_WFI_L2_DN`
//! - item: `{satellite}_{sensor}_{path}{row}_{YYYYMMDD}_{antenna}`,
//!   e.g. `AMAZONIA1_WFI_217015_20210303_CB11`

mod error;
mod source;

use serde::{Deserialize, Serialize};

pub use error::{BuildError, BuildErrorKind};
pub use source::{Lookup, MetadataSource};

/// Mandatory keys of a collection name, in report order.
pub const COLLECTION_KEYS: [&str; 4] = ["satellite", "sensor", "geo_processing", "radio_processing"];

const ITEM_ANTENNA_KEYS: [&str; 6] = ["satellite", "sensor", "path", "row", "date", "antenna"];

const ITEM_PROCESSING_KEYS: [&str; 7] = [
    "satellite",
    "sensor",
    "path",
    "row",
    "date",
    "geo_processing",
    "radio_processing",
];

/// Layout of item names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemLayout {
    /// `{satellite}_{sensor}_{path}{row}_{date}_{antenna}`
    #[default]
    Antenna,
    /// `{satellite}_{sensor}_{path}{row}_{date}_L{geo_processing}_{radio_processing}`,
    /// used by catalogs built before antennas were tracked.
    Processing,
}

/// Resolves `keys` to string values, one per key in the same order, reporting
/// every missing key first and then every non-string one.
fn require<'a, S, const N: usize>(
    metadata: &'a S,
    keys: &[&'static str; N],
) -> Result<[&'a str; N], BuildError>
where
    S: MetadataSource + ?Sized,
{
    metadata.ensure_mapping()?;

    let lookups: [Lookup<'a>; N] = keys.map(move |key| metadata.lookup(key));

    let rejected = |wanted: fn(&Lookup<'_>) -> bool| -> Vec<&'static str> {
        keys.iter()
            .zip(&lookups)
            .filter(|(_, lookup)| wanted(lookup))
            .map(|(key, _)| *key)
            .collect()
    };

    let missing = rejected(|lookup| matches!(lookup, Lookup::Missing));
    if !missing.is_empty() {
        return Err(BuildError::MissingKeys { keys: missing });
    }
    let non_string = rejected(|lookup| matches!(lookup, Lookup::NonString));
    if !non_string.is_empty() {
        return Err(BuildError::NonStringValue { keys: non_string });
    }

    let mut values = [""; N];
    for (slot, lookup) in values.iter_mut().zip(lookups) {
        if let Lookup::Str(value) = lookup {
            *slot = value;
        }
    }
    Ok(values)
}

/// Builds the collection name.
///
/// ```
/// use cdsr_core::build::build_collection;
/// use serde_json::json;
///
/// let metadata = json!({
///     "satellite": "CBERS4A", "sensor": "WFI",
///     "geo_processing": "4", "radio_processing": "SR",
/// });
/// assert_eq!(build_collection(&metadata).unwrap(), "CBERS4A_WFI_L4_SR");
/// ```
pub fn build_collection<S>(metadata: &S) -> Result<String, BuildError>
where
    S: MetadataSource + ?Sized,
{
    let [satellite, sensor, geo_processing, radio_processing] =
        require(metadata, &COLLECTION_KEYS)?;
    Ok(format!(
        "{}_{}_L{}_{}",
        satellite, sensor, geo_processing, radio_processing
    ))
}

/// Builds the item name with the antenna layout.
pub fn build_item<S>(metadata: &S) -> Result<String, BuildError>
where
    S: MetadataSource + ?Sized,
{
    build_item_with(metadata, ItemLayout::Antenna)
}

/// Builds the item name with an explicit layout.
pub fn build_item_with<S>(metadata: &S, layout: ItemLayout) -> Result<String, BuildError>
where
    S: MetadataSource + ?Sized,
{
    let name = match layout {
        ItemLayout::Antenna => {
            let [satellite, sensor, path, row, date, antenna] =
                require(metadata, &ITEM_ANTENNA_KEYS)?;
            format!(
                "{}_{}_{}{}_{}_{}",
                satellite,
                sensor,
                path,
                row,
                date.replace('-', ""),
                antenna
            )
        }
        ItemLayout::Processing => {
            let [satellite, sensor, path, row, date, geo_processing, radio_processing] =
                require(metadata, &ITEM_PROCESSING_KEYS)?;
            format!(
                "{}_{}_{}{}_{}_L{}_{}",
                satellite,
                sensor,
                path,
                row,
                date.replace('-', ""),
                geo_processing,
                radio_processing
            )
        }
    };
    Ok(name)
}
