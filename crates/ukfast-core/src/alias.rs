//! Friendly/wire field-name translation and entity hydration.
//!
//! The UKFast API speaks snake_case ("wire" names) while the SDK's entities
//! expose camelCase ("friendly") names. Each resource declares a static
//! [`FieldAliasMap`] of the wire/friendly pairs that differ; keys absent from
//! the map pass through unchanged in both directions, which keeps the SDK
//! tolerant of fields the API adds later.

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Bidirectional mapping between wire and friendly field names.
///
/// One static instance exists per resource type. Only fields whose wire and
/// friendly spellings differ need an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAliasMap {
    pairs: &'static [(&'static str, &'static str)],
}

impl FieldAliasMap {
    /// Create a map from `(wire, friendly)` name pairs.
    #[must_use]
    pub const fn new(pairs: &'static [(&'static str, &'static str)]) -> Self {
        Self { pairs }
    }

    /// A map with no entries; every key passes through unchanged.
    #[must_use]
    pub const fn empty() -> Self {
        Self { pairs: &[] }
    }

    /// Look up the friendly name for a wire name.
    #[must_use]
    pub fn friendly(&self, wire: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(w, _)| *w == wire)
            .map(|(_, f)| *f)
    }

    /// Look up the wire name for a friendly name.
    #[must_use]
    pub fn wire(&self, friendly: &str) -> Option<&'static str> {
        self.pairs
            .iter()
            .find(|(_, f)| *f == friendly)
            .map(|(w, _)| *w)
    }

    /// Returns true if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

fn rename_keys<F>(value: &Value, rename: &F) -> Value
where
    F: Fn(&str) -> Option<&'static str>,
{
    match value {
        Value::Object(object) => {
            let mut renamed = Map::with_capacity(object.len());
            for (key, val) in object {
                let key = rename(key).map_or_else(|| key.clone(), str::to_string);
                renamed.insert(key, rename_keys(val, rename));
            }
            Value::Object(renamed)
        }
        Value::Array(items) => {
            Value::Array(items.iter().map(|item| rename_keys(item, rename)).collect())
        }
        scalar => scalar.clone(),
    }
}

/// Rename wire keys to their friendly form on a decoded JSON value.
///
/// Recurses into nested objects and arrays. Keys without a map entry pass
/// through unchanged. The input is never mutated.
#[must_use]
pub fn api_to_friendly(value: &Value, map: &FieldAliasMap) -> Value {
    rename_keys(value, &|key| map.friendly(key))
}

/// Rename friendly keys to their wire form on a JSON value.
///
/// The inverse of [`api_to_friendly`]. Also accepts plain filter maps, not
/// just full entities.
#[must_use]
pub fn friendly_to_api(value: &Value, map: &FieldAliasMap) -> Value {
    rename_keys(value, &|key| map.wire(key))
}

/// Translate query-filter keys from friendly to wire form.
///
/// Keys already in wire form (absent from the map) pass through unchanged,
/// so callers may mix conventions freely.
#[must_use]
pub fn friendly_to_api_filters(
    filters: &[(String, String)],
    map: &FieldAliasMap,
) -> Vec<(String, String)> {
    filters
        .iter()
        .map(|(key, value)| {
            let key = map.wire(key).map_or_else(|| key.clone(), str::to_string);
            (key, value.clone())
        })
        .collect()
}

/// Hydrate a typed entity from a wire-shaped JSON value.
///
/// Applies [`api_to_friendly`] and then deserializes into `T`, whose fields
/// enumerate the friendly names statically.
pub fn hydrate<T>(raw: &Value, map: &FieldAliasMap) -> Result<T>
where
    T: DeserializeOwned,
{
    serde_json::from_value(api_to_friendly(raw, map))
        .map_err(|err| Error::Parse(format!("Failed to hydrate entity: {err}")))
}

/// Serialize an entity into a wire-shaped JSON value.
///
/// The inverse of [`hydrate`]: serializes `T` under its friendly names and
/// renames them to wire form for an outbound payload.
pub fn dehydrate<T>(entity: &T, map: &FieldAliasMap) -> Result<Value>
where
    T: Serialize,
{
    let friendly = serde_json::to_value(entity)
        .map_err(|err| Error::Parse(format!("Failed to serialize entity: {err}")))?;
    Ok(friendly_to_api(&friendly, map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_ALIASES: FieldAliasMap = FieldAliasMap::new(&[
        ("domain_name", "domainName"),
        ("safedns_record_id", "safednsRecordId"),
        ("ssl_id", "sslId"),
    ]);

    #[test]
    fn api_to_friendly_renames_mapped_keys() {
        let raw = json!({
            "domain_name": "example.com",
            "ssl_id": "abc",
            "name": "www"
        });

        let friendly = api_to_friendly(&raw, &TEST_ALIASES);
        assert_eq!(friendly["domainName"], "example.com");
        assert_eq!(friendly["sslId"], "abc");
        assert_eq!(friendly["name"], "www");
        assert!(friendly.get("domain_name").is_none());
    }

    #[test]
    fn api_to_friendly_passes_unmapped_keys_through() {
        let raw = json!({"unknown_field": 1, "another": true});
        let friendly = api_to_friendly(&raw, &TEST_ALIASES);
        assert_eq!(friendly, raw);
    }

    #[test]
    fn api_to_friendly_does_not_mutate_input() {
        let raw = json!({"domain_name": "example.com"});
        let _ = api_to_friendly(&raw, &TEST_ALIASES);
        assert_eq!(raw["domain_name"], "example.com");
    }

    #[test]
    fn api_to_friendly_recurses_into_nested_structures() {
        let raw = json!({
            "data": [
                {"domain_name": "a.com"},
                {"domain_name": "b.com"}
            ],
            "nested": {"ssl_id": "x"}
        });

        let friendly = api_to_friendly(&raw, &TEST_ALIASES);
        assert_eq!(friendly["data"][0]["domainName"], "a.com");
        assert_eq!(friendly["data"][1]["domainName"], "b.com");
        assert_eq!(friendly["nested"]["sslId"], "x");
    }

    #[test]
    fn friendly_to_api_is_the_inverse_rename() {
        let entity = json!({"domainName": "example.com", "content": "1.2.3.4"});
        let wire = friendly_to_api(&entity, &TEST_ALIASES);
        assert_eq!(wire["domain_name"], "example.com");
        assert_eq!(wire["content"], "1.2.3.4");
    }

    #[test]
    fn round_trip_is_idempotent_on_mapped_subset() {
        let raw = json!({
            "domain_name": "example.com",
            "safedns_record_id": 42,
            "ssl_id": "cert-1",
            "unmapped_key": "stays",
            "name": "www"
        });

        let once = api_to_friendly(&raw, &TEST_ALIASES);
        let again = api_to_friendly(
            &friendly_to_api(&api_to_friendly(&raw, &TEST_ALIASES), &TEST_ALIASES),
            &TEST_ALIASES,
        );
        assert_eq!(once, again);
    }

    #[test]
    fn filters_rename_friendly_keys_only() {
        let filters = vec![
            ("domainName".to_string(), "example.com".to_string()),
            ("already_wire".to_string(), "kept".to_string()),
        ];

        let translated = friendly_to_api_filters(&filters, &TEST_ALIASES);
        assert_eq!(
            translated,
            vec![
                ("domain_name".to_string(), "example.com".to_string()),
                ("already_wire".to_string(), "kept".to_string()),
            ]
        );
    }

    #[test]
    fn empty_map_passes_everything_through() {
        let raw = json!({"domain_name": "example.com"});
        assert_eq!(api_to_friendly(&raw, &FieldAliasMap::empty()), raw);
        assert!(FieldAliasMap::empty().is_empty());
    }

    #[test]
    fn lookup_in_both_directions() {
        assert_eq!(TEST_ALIASES.friendly("domain_name"), Some("domainName"));
        assert_eq!(TEST_ALIASES.wire("domainName"), Some("domain_name"));
        assert_eq!(TEST_ALIASES.friendly("missing"), None);
        assert_eq!(TEST_ALIASES.wire("missing"), None);
    }

    #[test]
    fn hydrate_reports_parse_failures() {
        #[derive(Debug, serde::Deserialize)]
        struct Strict {
            #[allow(dead_code)]
            count: u32,
        }

        let raw = json!({"count": "not a number"});
        let err = hydrate::<Strict>(&raw, &FieldAliasMap::empty()).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
