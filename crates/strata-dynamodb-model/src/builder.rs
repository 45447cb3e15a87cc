//! Shared build-time validation helpers.
//!
//! Map-valued request fields are accumulated as ordered `(key, value)`
//! entries while a builder is open, and converted here in a single pass
//! that rejects duplicate keys. Rejection happens before any value is
//! produced, so a failed build leaves nothing half-constructed.

use std::collections::HashMap;

use crate::error::BuildError;
use crate::types::{KeySchemaElement, KeyType};

/// Converts accumulated entries into a map, failing on the first
/// duplicate key. `field` is the wire name reported in the error.
pub(crate) fn into_unique_map<V>(
    field: &'static str,
    entries: Vec<(String, V)>,
) -> Result<HashMap<String, V>, BuildError> {
    let mut map = HashMap::with_capacity(entries.len());
    for (key, value) in entries {
        if map.contains_key(&key) {
            return Err(BuildError::DuplicateKey { field, key });
        }
        map.insert(key, value);
    }
    Ok(map)
}

/// Returns the name if set and non-empty, else a `MissingField` error.
pub(crate) fn require_name(
    field: &'static str,
    value: Option<String>,
) -> Result<String, BuildError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(BuildError::MissingField(field)),
    }
}

/// Validates the one-HASH / at-most-one-RANGE shape of a key schema.
///
/// Also rejects schemas where the same attribute name appears twice,
/// which the flat element list cannot express structurally.
pub(crate) fn validate_key_schema(schema: &[KeySchemaElement]) -> Result<(), BuildError> {
    if schema.is_empty() {
        return Err(BuildError::KeySchema(
            "a partition (HASH) key element is required".to_owned(),
        ));
    }
    let hash_count = schema
        .iter()
        .filter(|e| e.key_type == KeyType::Hash)
        .count();
    if hash_count != 1 {
        return Err(BuildError::KeySchema(format!(
            "exactly one HASH element is required, got {hash_count}"
        )));
    }
    let range_count = schema.len() - hash_count;
    if range_count > 1 {
        return Err(BuildError::KeySchema(format!(
            "at most one RANGE element is allowed, got {range_count}"
        )));
    }
    for (i, element) in schema.iter().enumerate() {
        if schema[..i]
            .iter()
            .any(|e| e.attribute_name == element.attribute_name)
        {
            return Err(BuildError::KeySchema(format!(
                "attribute {:?} appears in more than one element",
                element.attribute_name
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str, key_type: KeyType) -> KeySchemaElement {
        KeySchemaElement {
            attribute_name: name.to_owned(),
            key_type,
        }
    }

    #[test]
    fn test_should_collect_unique_entries_in_order() {
        let map = into_unique_map(
            "Key",
            vec![("pk".to_owned(), 1), ("sk".to_owned(), 2)],
        )
        .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["pk"], 1);
        assert_eq!(map["sk"], 2);
    }

    #[test]
    fn test_should_reject_duplicate_entry() {
        let err = into_unique_map(
            "ExpressionAttributeNames",
            vec![("#n".to_owned(), "a"), ("#n".to_owned(), "b")],
        )
        .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateKey {
                field: "ExpressionAttributeNames",
                key: "#n".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_require_non_empty_name() {
        assert!(require_name("TableName", Some("Orders".to_owned())).is_ok());
        assert_eq!(
            require_name("TableName", Some(String::new())).unwrap_err(),
            BuildError::MissingField("TableName")
        );
        assert_eq!(
            require_name("TableName", None).unwrap_err(),
            BuildError::MissingField("TableName")
        );
    }

    #[test]
    fn test_should_accept_hash_only_and_hash_range_schemas() {
        assert!(validate_key_schema(&[element("pk", KeyType::Hash)]).is_ok());
        assert!(validate_key_schema(&[
            element("pk", KeyType::Hash),
            element("sk", KeyType::Range)
        ])
        .is_ok());
    }

    #[test]
    fn test_should_reject_malformed_key_schemas() {
        assert!(matches!(
            validate_key_schema(&[]),
            Err(BuildError::KeySchema(_))
        ));
        assert!(matches!(
            validate_key_schema(&[
                element("a", KeyType::Hash),
                element("b", KeyType::Hash)
            ]),
            Err(BuildError::KeySchema(_))
        ));
        assert!(matches!(
            validate_key_schema(&[
                element("a", KeyType::Hash),
                element("b", KeyType::Range),
                element("c", KeyType::Range)
            ]),
            Err(BuildError::KeySchema(_))
        ));
        assert!(matches!(
            validate_key_schema(&[
                element("a", KeyType::Hash),
                element("a", KeyType::Range)
            ]),
            Err(BuildError::KeySchema(_))
        ));
    }
}
