//! `BatchGetItem` and `BatchWriteItem` request shapes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::builder;
use crate::error::BuildError;
use crate::types::{
    Key, KeysAndAttributes, ReturnConsumedCapacity, ReturnItemCollectionMetrics, WriteRequest,
};

/// Most items one `BatchGetItem` request may fetch.
pub const BATCH_GET_LIMIT: usize = 100;

/// Most write requests one `BatchWriteItem` request may carry.
pub const BATCH_WRITE_LIMIT: usize = 25;

/// Input for the `BatchGetItem` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchGetItemInput {
    /// Keys to fetch, grouped by table.
    pub request_items: HashMap<String, KeysAndAttributes>,

    /// Consumed-capacity detail to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl BatchGetItemInput {
    /// Starts building a `BatchGetItem` request.
    #[must_use]
    pub fn builder() -> BatchGetItemInputBuilder {
        BatchGetItemInputBuilder {
            request_items: Vec::new(),
            return_consumed_capacity: None,
        }
    }
}

/// Consuming builder for [`BatchGetItemInput`].
#[derive(Debug, Clone)]
pub struct BatchGetItemInputBuilder {
    request_items: Vec<(String, KeysAndAttributes)>,
    return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl BatchGetItemInputBuilder {
    /// Adds the keys to fetch from one table.
    #[must_use]
    pub fn request_items(
        mut self,
        table_name: impl Into<String>,
        keys_and_attributes: KeysAndAttributes,
    ) -> Self {
        self.request_items
            .push((table_name.into(), keys_and_attributes));
        self
    }

    /// Shorthand adding plain keys for one table, with no read shaping.
    #[must_use]
    pub fn keys(mut self, table_name: impl Into<String>, keys: Vec<Key>) -> Self {
        self.request_items.push((
            table_name.into(),
            KeysAndAttributes {
                keys,
                projection_expression: None,
                expression_attribute_names: HashMap::new(),
                consistent_read: None,
                attributes_to_get: Vec::new(),
            },
        ));
        self
    }

    /// Sets the consumed-capacity detail to report.
    #[must_use]
    pub fn return_consumed_capacity(mut self, capacity: ReturnConsumedCapacity) -> Self {
        self.return_consumed_capacity = Some(capacity);
        self
    }

    /// Validates and produces the request.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MissingField`] if no table was added.
    /// - [`BuildError::DuplicateKey`] if a table was added twice.
    /// - [`BuildError::Parameter`] if a table carries no keys or the
    ///   total key count exceeds [`BATCH_GET_LIMIT`].
    pub fn build(self) -> Result<BatchGetItemInput, BuildError> {
        if self.request_items.is_empty() {
            return Err(BuildError::MissingField("RequestItems"));
        }
        let mut total = 0;
        for (table, entry) in &self.request_items {
            if entry.keys.is_empty() {
                return Err(BuildError::Parameter(format!(
                    "table {table:?} carries no keys"
                )));
            }
            total += entry.keys.len();
        }
        if total > BATCH_GET_LIMIT {
            return Err(BuildError::Parameter(format!(
                "at most {BATCH_GET_LIMIT} keys per request, got {total}"
            )));
        }
        Ok(BatchGetItemInput {
            request_items: builder::into_unique_map("RequestItems", self.request_items)?,
            return_consumed_capacity: self.return_consumed_capacity,
        })
    }
}

/// Input for the `BatchWriteItem` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BatchWriteItemInput {
    /// Write requests, grouped by table.
    pub request_items: HashMap<String, Vec<WriteRequest>>,

    /// Consumed-capacity detail to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,

    /// Whether to report item collection size estimates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl BatchWriteItemInput {
    /// Starts building a `BatchWriteItem` request.
    #[must_use]
    pub fn builder() -> BatchWriteItemInputBuilder {
        BatchWriteItemInputBuilder {
            request_items: Vec::new(),
            return_consumed_capacity: None,
            return_item_collection_metrics: None,
        }
    }
}

/// Consuming builder for [`BatchWriteItemInput`].
#[derive(Debug, Clone)]
pub struct BatchWriteItemInputBuilder {
    request_items: Vec<(String, Vec<WriteRequest>)>,
    return_consumed_capacity: Option<ReturnConsumedCapacity>,
    return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl BatchWriteItemInputBuilder {
    /// Adds the write requests for one table.
    #[must_use]
    pub fn request_items(
        mut self,
        table_name: impl Into<String>,
        writes: Vec<WriteRequest>,
    ) -> Self {
        self.request_items.push((table_name.into(), writes));
        self
    }

    /// Sets the consumed-capacity detail to report.
    #[must_use]
    pub fn return_consumed_capacity(mut self, capacity: ReturnConsumedCapacity) -> Self {
        self.return_consumed_capacity = Some(capacity);
        self
    }

    /// Sets whether to report item collection size estimates.
    #[must_use]
    pub fn return_item_collection_metrics(
        mut self,
        metrics: ReturnItemCollectionMetrics,
    ) -> Self {
        self.return_item_collection_metrics = Some(metrics);
        self
    }

    /// Validates and produces the request.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MissingField`] if no table was added.
    /// - [`BuildError::DuplicateKey`] if a table was added twice.
    /// - [`BuildError::Parameter`] if a table carries no writes, a write
    ///   does not carry exactly one of put/delete, or the total write
    ///   count exceeds [`BATCH_WRITE_LIMIT`].
    pub fn build(self) -> Result<BatchWriteItemInput, BuildError> {
        if self.request_items.is_empty() {
            return Err(BuildError::MissingField("RequestItems"));
        }
        let mut total = 0;
        for (table, writes) in &self.request_items {
            if writes.is_empty() {
                return Err(BuildError::Parameter(format!(
                    "table {table:?} carries no write requests"
                )));
            }
            if let Some(i) = writes.iter().position(|w| !w.is_well_formed()) {
                return Err(BuildError::Parameter(format!(
                    "write {i} for table {table:?} must carry exactly one of PutRequest or DeleteRequest"
                )));
            }
            total += writes.len();
        }
        if total > BATCH_WRITE_LIMIT {
            return Err(BuildError::Parameter(format!(
                "at most {BATCH_WRITE_LIMIT} write requests per request, got {total}"
            )));
        }
        Ok(BatchWriteItemInput {
            request_items: builder::into_unique_map("RequestItems", self.request_items)?,
            return_consumed_capacity: self.return_consumed_capacity,
            return_item_collection_metrics: self.return_item_collection_metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute_value::AttributeValue;

    fn key(name: &str, value: &str) -> Key {
        let mut key = HashMap::new();
        key.insert(name.to_owned(), AttributeValue::from(value));
        key
    }

    #[test]
    fn test_should_build_batch_get_across_tables() {
        let input = BatchGetItemInput::builder()
            .keys("Orders", vec![key("OrderId", "o-1"), key("OrderId", "o-2")])
            .keys("Users", vec![key("UserId", "u-1")])
            .return_consumed_capacity(ReturnConsumedCapacity::Total)
            .build()
            .unwrap();
        assert_eq!(input.request_items.len(), 2);
        assert_eq!(input.request_items["Orders"].keys.len(), 2);

        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""ReturnConsumedCapacity":"TOTAL""#));
        let parsed: BatchGetItemInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, input);
    }

    #[test]
    fn test_should_reject_empty_or_duplicate_batch_get_tables() {
        let err = BatchGetItemInput::builder().build().unwrap_err();
        assert_eq!(err, BuildError::MissingField("RequestItems"));

        let err = BatchGetItemInput::builder()
            .keys("Orders", Vec::new())
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));

        let err = BatchGetItemInput::builder()
            .keys("Orders", vec![key("OrderId", "o-1")])
            .keys("Orders", vec![key("OrderId", "o-2")])
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::DuplicateKey { .. }));
    }

    #[test]
    fn test_should_cap_batch_get_at_one_hundred_keys() {
        let keys: Vec<Key> = (0..101).map(|i| key("OrderId", &format!("o-{i}"))).collect();
        let err = BatchGetItemInput::builder()
            .keys("Orders", keys)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));
    }

    #[test]
    fn test_should_build_batch_write_with_puts_and_deletes() {
        let input = BatchWriteItemInput::builder()
            .request_items(
                "Orders",
                vec![
                    WriteRequest::put(key("OrderId", "o-1")),
                    WriteRequest::delete(key("OrderId", "o-2")),
                ],
            )
            .build()
            .unwrap();
        assert_eq!(input.request_items["Orders"].len(), 2);
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("PutRequest"));
        assert!(json.contains("DeleteRequest"));
    }

    #[test]
    fn test_should_reject_two_sided_write_request() {
        let malformed = WriteRequest {
            put_request: Some(crate::types::PutRequest {
                item: key("OrderId", "o-1"),
            }),
            delete_request: Some(crate::types::DeleteRequest {
                key: key("OrderId", "o-1"),
            }),
        };
        let err = BatchWriteItemInput::builder()
            .request_items("Orders", vec![malformed])
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));

        let err = BatchWriteItemInput::builder()
            .request_items("Orders", vec![WriteRequest::default()])
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));
    }

    #[test]
    fn test_should_cap_batch_write_at_twenty_five_requests() {
        let writes: Vec<WriteRequest> = (0..26)
            .map(|i| WriteRequest::put(key("OrderId", &format!("o-{i}"))))
            .collect();
        let err = BatchWriteItemInput::builder()
            .request_items("Orders", writes)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));
    }
}
