//! Error types for name building.

use thiserror::Error;

/// Error returned by [`build_collection`](super::build_collection) and
/// [`build_item`](super::build_item).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("metadata must be a JSON object, not {found}")]
    Type { found: &'static str },

    /// Every mandatory key absent from the metadata, in declared order.
    #[error("missing keys inside metadata: `{}`", .keys.join(", "))]
    MissingKeys { keys: Vec<&'static str> },

    /// Every mandatory key whose value is not a string, in declared order.
    #[error(
        "all mandatory values inside metadata must be strings, but the following keys are not: `{}`",
        .keys.join(", ")
    )]
    NonStringValue { keys: Vec<&'static str> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildErrorKind {
    Type,
    MissingKeys,
    NonStringValue,
}

impl BuildError {
    pub fn kind(&self) -> BuildErrorKind {
        match self {
            BuildError::Type { .. } => BuildErrorKind::Type,
            BuildError::MissingKeys { .. } => BuildErrorKind::MissingKeys,
            BuildError::NonStringValue { .. } => BuildErrorKind::NonStringValue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_message_lists_all_keys() {
        let err = BuildError::MissingKeys {
            keys: vec!["satellite", "geo_processing", "radio_processing"],
        };
        assert_eq!(
            err.to_string(),
            "missing keys inside metadata: `satellite, geo_processing, radio_processing`"
        );
        assert_eq!(err.kind(), BuildErrorKind::MissingKeys);
    }

    #[test]
    fn non_string_message() {
        let err = BuildError::NonStringValue { keys: vec!["date"] };
        assert_eq!(
            err.to_string(),
            "all mandatory values inside metadata must be strings, but the following keys are not: `date`"
        );
    }
}
