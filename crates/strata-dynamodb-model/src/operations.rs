//! The operation set and its wire names.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidEnumValue;

/// Protocol version prefix carried in the `X-Amz-Target` header.
pub const TARGET_PREFIX: &str = "DynamoDB_20120810";

/// Every operation this model layer covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // Control plane
    /// Create a table.
    CreateTable,
    /// Delete a table.
    DeleteTable,
    /// Describe a table.
    DescribeTable,
    /// Change table settings.
    UpdateTable,
    /// List table names.
    ListTables,

    // Single-item data plane
    /// Insert or replace an item.
    PutItem,
    /// Read an item by primary key.
    GetItem,
    /// Modify attributes of an item.
    UpdateItem,
    /// Delete an item by primary key.
    DeleteItem,

    // Multi-item reads
    /// Read items by key condition.
    Query,
    /// Read every item in a table or index.
    Scan,

    // Batches
    /// Read up to 100 items across tables.
    BatchGetItem,
    /// Put or delete up to 25 items across tables.
    BatchWriteItem,
}

impl Operation {
    /// Returns the operation's wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateTable => "CreateTable",
            Self::DeleteTable => "DeleteTable",
            Self::DescribeTable => "DescribeTable",
            Self::UpdateTable => "UpdateTable",
            Self::ListTables => "ListTables",
            Self::PutItem => "PutItem",
            Self::GetItem => "GetItem",
            Self::UpdateItem => "UpdateItem",
            Self::DeleteItem => "DeleteItem",
            Self::Query => "Query",
            Self::Scan => "Scan",
            Self::BatchGetItem => "BatchGetItem",
            Self::BatchWriteItem => "BatchWriteItem",
        }
    }

    /// Returns the full `X-Amz-Target` header value.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.as_str())
    }

    /// Parses an operation from its wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CreateTable" => Some(Self::CreateTable),
            "DeleteTable" => Some(Self::DeleteTable),
            "DescribeTable" => Some(Self::DescribeTable),
            "UpdateTable" => Some(Self::UpdateTable),
            "ListTables" => Some(Self::ListTables),
            "PutItem" => Some(Self::PutItem),
            "GetItem" => Some(Self::GetItem),
            "UpdateItem" => Some(Self::UpdateItem),
            "DeleteItem" => Some(Self::DeleteItem),
            "Query" => Some(Self::Query),
            "Scan" => Some(Self::Scan),
            "BatchGetItem" => Some(Self::BatchGetItem),
            "BatchWriteItem" => Some(Self::BatchWriteItem),
            _ => None,
        }
    }

    /// Parses an operation from an `X-Amz-Target` header value.
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        let name = target.strip_prefix(TARGET_PREFIX)?.strip_prefix('.')?;
        Self::from_name(name)
    }

    /// Returns `true` for operations that change table or item state.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Self::DescribeTable
                | Self::ListTables
                | Self::GetItem
                | Self::Query
                | Self::Scan
                | Self::BatchGetItem
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| InvalidEnumValue {
            expected: "Operation",
            value: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Operation; 13] = [
        Operation::CreateTable,
        Operation::DeleteTable,
        Operation::DescribeTable,
        Operation::UpdateTable,
        Operation::ListTables,
        Operation::PutItem,
        Operation::GetItem,
        Operation::UpdateItem,
        Operation::DeleteItem,
        Operation::Query,
        Operation::Scan,
        Operation::BatchGetItem,
        Operation::BatchWriteItem,
    ];

    #[test]
    fn test_should_roundtrip_every_operation_name() {
        for op in ALL {
            assert_eq!(Operation::from_name(op.as_str()), Some(op));
            assert_eq!(op.as_str().parse::<Operation>().unwrap(), op);
        }
        assert!(Operation::from_name("TransactWriteItems").is_none());
        assert!("putitem".parse::<Operation>().is_err());
    }

    #[test]
    fn test_should_build_and_parse_target_header() {
        assert_eq!(Operation::PutItem.target(), "DynamoDB_20120810.PutItem");
        assert_eq!(
            Operation::from_target("DynamoDB_20120810.Query"),
            Some(Operation::Query)
        );
        assert!(Operation::from_target("DynamoDB_20111205.Query").is_none());
        assert!(Operation::from_target("Query").is_none());
    }

    #[test]
    fn test_should_classify_mutations() {
        assert!(Operation::PutItem.is_mutation());
        assert!(Operation::UpdateTable.is_mutation());
        assert!(Operation::BatchWriteItem.is_mutation());
        assert!(!Operation::GetItem.is_mutation());
        assert!(!Operation::Scan.is_mutation());
        assert!(!Operation::ListTables.is_mutation());
    }
}
