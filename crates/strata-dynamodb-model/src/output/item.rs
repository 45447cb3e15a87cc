//! Single-item response shapes.

use serde::{Deserialize, Serialize};

use crate::types::{ConsumedCapacity, Item, ItemCollectionMetrics};

/// Output of the `PutItem` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutItemOutput {
    /// The overwritten item, when `ReturnValues` was `ALL_OLD` and an
    /// item existed. Empty otherwise.
    #[serde(default, skip_serializing_if = "Item::is_empty")]
    pub attributes: Item,

    /// Capacity consumed, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,

    /// Collection size estimate, when requested and applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_collection_metrics: Option<ItemCollectionMetrics>,
}

/// Output of the `GetItem` operation.
///
/// `item` is `None` when no item matched the key, which is a successful
/// response; transport-level failures surface as errors instead.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemOutput {
    /// The matching item, absent when none exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<Item>,

    /// Capacity consumed, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}

impl GetItemOutput {
    /// Returns `true` if an item matched the key.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.item.is_some()
    }
}

/// Output of the `UpdateItem` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateItemOutput {
    /// Attribute values as selected by `ReturnValues`. Empty when
    /// `ReturnValues` was `NONE` or unset.
    #[serde(default, skip_serializing_if = "Item::is_empty")]
    pub attributes: Item,

    /// Capacity consumed, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,

    /// Collection size estimate, when requested and applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_collection_metrics: Option<ItemCollectionMetrics>,
}

/// Output of the `DeleteItem` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteItemOutput {
    /// The deleted item, when `ReturnValues` was `ALL_OLD` and an item
    /// existed. Empty otherwise.
    #[serde(default, skip_serializing_if = "Item::is_empty")]
    pub attributes: Item,

    /// Capacity consumed, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,

    /// Collection size estimate, when requested and applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_collection_metrics: Option<ItemCollectionMetrics>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute_value::AttributeValue;

    #[test]
    fn test_should_distinguish_missing_item_from_empty_response() {
        let output: GetItemOutput = serde_json::from_str("{}").unwrap();
        assert!(!output.is_found());
        assert!(output.item.is_none());

        let output: GetItemOutput =
            serde_json::from_str(r#"{"Item":{"OrderId":{"S":"o-1"}}}"#).unwrap();
        assert!(output.is_found());
        assert_eq!(
            output.item.unwrap()["OrderId"],
            AttributeValue::S("o-1".to_owned())
        );
    }

    #[test]
    fn test_should_serialize_empty_put_output_as_empty_object() {
        assert_eq!(
            serde_json::to_string(&PutItemOutput::default()).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_should_parse_update_output_with_returned_attributes() {
        let json = r#"{
            "Attributes": {"Status": {"S": "SHIPPED"}},
            "ConsumedCapacity": {"TableName": "Orders", "CapacityUnits": 1.0}
        }"#;
        let output: UpdateItemOutput = serde_json::from_str(json).unwrap();
        assert_eq!(
            output.attributes["Status"],
            AttributeValue::S("SHIPPED".to_owned())
        );
        assert_eq!(
            output.consumed_capacity.unwrap().table_name.as_deref(),
            Some("Orders")
        );
    }

    #[test]
    fn test_should_roundtrip_delete_output() {
        let json = r#"{"Attributes":{"OrderId":{"S":"o-1"},"Total":{"N":"42"}}}"#;
        let output: DeleteItemOutput = serde_json::from_str(json).unwrap();
        assert_eq!(output.attributes.len(), 2);
        let reparsed: DeleteItemOutput =
            serde_json::from_str(&serde_json::to_string(&output).unwrap()).unwrap();
        assert_eq!(reparsed, output);
    }
}
