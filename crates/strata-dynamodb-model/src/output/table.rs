//! Control-plane response shapes.

use serde::{Deserialize, Serialize};

use crate::table::TableDescription;

/// Output of the `CreateTable` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableOutput {
    /// Metadata of the new table, in `CREATING` state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_description: Option<TableDescription>,
}

impl CreateTableOutput {
    /// Wraps a description of the new table.
    #[must_use]
    pub fn new(description: TableDescription) -> Self {
        Self {
            table_description: Some(description),
        }
    }
}

/// Output of the `DeleteTable` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTableOutput {
    /// Metadata of the table, in `DELETING` state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_description: Option<TableDescription>,
}

impl DeleteTableOutput {
    /// Wraps a description of the deleted table.
    #[must_use]
    pub fn new(description: TableDescription) -> Self {
        Self {
            table_description: Some(description),
        }
    }
}

/// Output of the `DescribeTable` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTableOutput {
    /// Metadata of the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<TableDescription>,
}

impl DescribeTableOutput {
    /// Wraps a table description.
    #[must_use]
    pub fn new(description: TableDescription) -> Self {
        Self {
            table: Some(description),
        }
    }
}

/// Output of the `UpdateTable` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTableOutput {
    /// Metadata of the table with the updated settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_description: Option<TableDescription>,
}

impl UpdateTableOutput {
    /// Wraps a description of the updated table.
    #[must_use]
    pub fn new(description: TableDescription) -> Self {
        Self {
            table_description: Some(description),
        }
    }
}

/// Output of the `ListTables` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTablesOutput {
    /// Table names, in lexical order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub table_names: Vec<String>,

    /// Name to pass as `ExclusiveStartTableName` for the next page;
    /// absent when the listing is complete.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_evaluated_table_name: Option<String>,
}

impl ListTablesOutput {
    /// Returns `true` if another page remains.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.last_evaluated_table_name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KeySchemaElement;
    use crate::types::TableStatus;

    #[test]
    fn test_should_parse_describe_table_response() {
        let json = r#"{"Table":{"TableName":"Orders","TableStatus":"ACTIVE"}}"#;
        let output: DescribeTableOutput = serde_json::from_str(json).unwrap();
        let table = output.table.unwrap();
        assert_eq!(table.table_name.as_deref(), Some("Orders"));
        assert_eq!(table.table_status, Some(TableStatus::Active));
    }

    #[test]
    fn test_should_wrap_create_table_description() {
        let description = TableDescription::builder("Orders")
            .table_status(TableStatus::Creating)
            .key_schema_element(KeySchemaElement::hash("OrderId"))
            .build()
            .unwrap();
        let output = CreateTableOutput::new(description);
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.starts_with(r#"{"TableDescription":"#));
        assert!(json.contains(r#""TableStatus":"CREATING""#));
    }

    #[test]
    fn test_should_detect_list_tables_pagination() {
        let complete: ListTablesOutput =
            serde_json::from_str(r#"{"TableNames":["A","B"]}"#).unwrap();
        assert!(!complete.has_more());
        assert_eq!(complete.table_names, vec!["A", "B"]);

        let partial: ListTablesOutput = serde_json::from_str(
            r#"{"TableNames":["A"],"LastEvaluatedTableName":"A"}"#,
        )
        .unwrap();
        assert!(partial.has_more());
    }

    #[test]
    fn test_should_serialize_empty_list_as_empty_object() {
        assert_eq!(
            serde_json::to_string(&ListTablesOutput::default()).unwrap(),
            "{}"
        );
    }
}
