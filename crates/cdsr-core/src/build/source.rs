//! Metadata inputs accepted by the builder.

use super::error::BuildError;
use crate::decode::json_type_name;
use crate::metadata::Metadata;

/// Result of looking up one mandatory key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Missing,
    NonString,
    Str(&'a str),
}

/// Key/value view over a metadata record.
pub trait MetadataSource {
    /// Fails when the source is not a key/value mapping at all.
    fn ensure_mapping(&self) -> Result<(), BuildError> {
        Ok(())
    }

    fn lookup(&self, key: &str) -> Lookup<'_>;
}

impl MetadataSource for Metadata {
    fn lookup(&self, key: &str) -> Lookup<'_> {
        if !Metadata::FIELDS.contains(&key) {
            return Lookup::Missing;
        }
        match self.field(key) {
            Some(value) => Lookup::Str(value),
            None => Lookup::NonString,
        }
    }
}

impl MetadataSource for serde_json::Value {
    fn ensure_mapping(&self) -> Result<(), BuildError> {
        if self.is_object() {
            Ok(())
        } else {
            Err(BuildError::Type {
                found: json_type_name(self),
            })
        }
    }

    fn lookup(&self, key: &str) -> Lookup<'_> {
        match self.get(key) {
            None => Lookup::Missing,
            Some(serde_json::Value::String(value)) => Lookup::Str(value.as_str()),
            Some(_) => Lookup::NonString,
        }
    }
}

impl MetadataSource for serde_json::Map<String, serde_json::Value> {
    fn lookup(&self, key: &str) -> Lookup<'_> {
        match self.get(key) {
            None => Lookup::Missing,
            Some(serde_json::Value::String(value)) => Lookup::Str(value.as_str()),
            Some(_) => Lookup::NonString,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn struct_fields_are_always_present() {
        let m = Metadata {
            satellite: Some("CBERS4".into()),
            ..Metadata::default()
        };
        assert_eq!(m.lookup("satellite"), Lookup::Str("CBERS4"));
        assert_eq!(m.lookup("date"), Lookup::NonString);
        assert_eq!(m.lookup("orbit"), Lookup::Missing);
    }

    #[test]
    fn json_lookup() {
        let value = json!({"satellite": "CBERS4", "date": null, "row": 15});
        assert!(value.ensure_mapping().is_ok());
        assert_eq!(value.lookup("satellite"), Lookup::Str("CBERS4"));
        assert_eq!(value.lookup("date"), Lookup::NonString);
        assert_eq!(value.lookup("row"), Lookup::NonString);
        assert_eq!(value.lookup("sensor"), Lookup::Missing);
    }

    #[test]
    fn json_map_lookup() {
        let value = json!({"sensor": "MUX"});
        let map = value.as_object().unwrap();
        assert!(map.ensure_mapping().is_ok());
        assert_eq!(map.lookup("sensor"), Lookup::Str("MUX"));
        assert_eq!(map.lookup("satellite"), Lookup::Missing);
    }

    #[test]
    fn json_non_object() {
        assert_eq!(
            json!("x").ensure_mapping(),
            Err(BuildError::Type { found: "a string" })
        );
    }
}
