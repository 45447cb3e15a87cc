//! `Query` and `Scan` response shapes.

use serde::{Deserialize, Serialize};

use crate::types::{ConsumedCapacity, Item, Key};

/// Output of the `Query` operation.
///
/// `count` is the number of items returned after filtering;
/// `scanned_count` is the number evaluated before filters. A populated
/// `last_evaluated_key` means the page ended before the results did.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryOutput {
    /// Matching items, in key order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,

    /// Number of items returned.
    pub count: i32,

    /// Number of items evaluated before filtering.
    pub scanned_count: i32,

    /// Key to resume from; empty when the results are complete.
    #[serde(default, skip_serializing_if = "Key::is_empty")]
    pub last_evaluated_key: Key,

    /// Capacity consumed, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}

impl QueryOutput {
    /// Returns `true` if another page remains.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.last_evaluated_key.is_empty()
    }
}

/// Output of the `Scan` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanOutput {
    /// Evaluated items that passed the filter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,

    /// Number of items returned.
    pub count: i32,

    /// Number of items evaluated before filtering.
    pub scanned_count: i32,

    /// Key to resume from; empty when the scan is complete.
    #[serde(default, skip_serializing_if = "Key::is_empty")]
    pub last_evaluated_key: Key,

    /// Capacity consumed, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed_capacity: Option<ConsumedCapacity>,
}

impl ScanOutput {
    /// Returns `true` if another page remains.
    #[must_use]
    pub fn has_more(&self) -> bool {
        !self.last_evaluated_key.is_empty()
    }
}
