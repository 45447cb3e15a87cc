//! `BatchGetItem` and `BatchWriteItem` response shapes.
//!
//! Both operations may succeed partially: whatever could not be
//! processed comes back in the same shape as the request, ready to be
//! resubmitted as-is.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{
    ConsumedCapacity, Item, ItemCollectionMetrics, KeysAndAttributes, WriteRequest,
};

/// Output of the `BatchGetItem` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetItemOutput {
    /// Fetched items, grouped by table.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub responses: HashMap<String, Vec<Item>>,

    /// Keys that were not processed, resubmittable as `RequestItems`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub unprocessed_keys: HashMap<String, KeysAndAttributes>,

    /// Capacity consumed per table, when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumed_capacity: Vec<ConsumedCapacity>,
}

impl BatchGetItemOutput {
    /// Returns `true` if some keys still need to be resubmitted.
    #[must_use]
    pub fn has_unprocessed(&self) -> bool {
        !self.unprocessed_keys.is_empty()
    }
}

/// Output of the `BatchWriteItem` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchWriteItemOutput {
    /// Writes that were not processed, resubmittable as `RequestItems`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub unprocessed_items: HashMap<String, Vec<WriteRequest>>,

    /// Collection size estimates per table, when requested.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub item_collection_metrics: HashMap<String, Vec<ItemCollectionMetrics>>,

    /// Capacity consumed per table, when requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub consumed_capacity: Vec<ConsumedCapacity>,
}

impl BatchWriteItemOutput {
    /// Returns `true` if some writes still need to be resubmitted.
    #[must_use]
    pub fn has_unprocessed(&self) -> bool {
        !self.unprocessed_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute_value::AttributeValue;

    #[test]
    fn test_should_parse_partial_batch_get_response() {
        let json = r#"{
            "Responses": {
                "Orders": [{"OrderId": {"S": "o-1"}}]
            },
            "UnprocessedKeys": {
                "Orders": {"Keys": [{"OrderId": {"S": "o-2"}}]}
            }
        }"#;
        let output: BatchGetItemOutput = serde_json::from_str(json).unwrap();
        assert!(output.has_unprocessed());
        assert_eq!(output.responses["Orders"].len(), 1);
        assert_eq!(
            output.unprocessed_keys["Orders"].keys[0]["OrderId"],
            AttributeValue::S("o-2".to_owned())
        );
    }

    #[test]
    fn test_should_treat_empty_unprocessed_as_complete() {
        let output: BatchGetItemOutput = serde_json::from_str("{}").unwrap();
        assert!(!output.has_unprocessed());

        let output: BatchWriteItemOutput =
            serde_json::from_str(r#"{"UnprocessedItems":{}}"#).unwrap();
        assert!(!output.has_unprocessed());
    }

    #[test]
    fn test_should_roundtrip_unprocessed_writes() {
        let json = r#"{
            "UnprocessedItems": {
                "Orders": [{"PutRequest": {"Item": {"OrderId": {"S": "o-9"}}}}]
            },
            "ConsumedCapacity": [{"TableName": "Orders", "CapacityUnits": 1.0}]
        }"#;
        let output: BatchWriteItemOutput = serde_json::from_str(json).unwrap();
        assert!(output.has_unprocessed());
        assert!(output.unprocessed_items["Orders"][0].is_well_formed());

        let reparsed: BatchWriteItemOutput =
            serde_json::from_str(&serde_json::to_string(&output).unwrap()).unwrap();
        assert_eq!(reparsed, output);
    }
}
