//! Control-plane request shapes.

use serde::{Deserialize, Serialize};

use crate::builder;
use crate::error::BuildError;
use crate::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndex, KeySchemaElement, KeyType,
    LocalSecondaryIndex, ProvisionedThroughput, SseSpecification, StreamSpecification, Tag,
};

/// Input for the `CreateTable` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableInput {
    /// Name of the table to create.
    pub table_name: String,

    /// Primary key schema: one `HASH` element, optionally one `RANGE`.
    pub key_schema: Vec<KeySchemaElement>,

    /// Types of every key and index key attribute.
    pub attribute_definitions: Vec<AttributeDefinition>,

    /// Billing mode; the service default applies when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<BillingMode>,

    /// Capacity settings, required in `PROVISIONED` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,

    /// Global secondary indexes to create with the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<GlobalSecondaryIndex>,

    /// Local secondary indexes to create with the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_secondary_indexes: Vec<LocalSecondaryIndex>,

    /// Change-capture stream settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpecification>,

    /// Server-side encryption settings.
    #[serde(rename = "SSESpecification", skip_serializing_if = "Option::is_none")]
    pub sse_specification: Option<SseSpecification>,

    /// Tags to attach to the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

impl CreateTableInput {
    /// Starts building a `CreateTable` request for the named table.
    #[must_use]
    pub fn builder(table_name: impl Into<String>) -> CreateTableInputBuilder {
        CreateTableInputBuilder {
            input: Self {
                table_name: table_name.into(),
                ..Self::default()
            },
        }
    }
}

/// Consuming builder for [`CreateTableInput`].
#[derive(Debug, Clone)]
pub struct CreateTableInputBuilder {
    input: CreateTableInput,
}

impl CreateTableInputBuilder {
    /// Appends one key schema element.
    #[must_use]
    pub fn key_schema_element(mut self, element: KeySchemaElement) -> Self {
        self.input.key_schema.push(element);
        self
    }

    /// Discards every key schema element accumulated so far.
    #[must_use]
    pub fn clear_key_schema(mut self) -> Self {
        self.input.key_schema.clear();
        self
    }

    /// Appends one attribute definition.
    #[must_use]
    pub fn attribute_definition(mut self, definition: AttributeDefinition) -> Self {
        self.input.attribute_definitions.push(definition);
        self
    }

    /// Discards every attribute definition accumulated so far.
    #[must_use]
    pub fn clear_attribute_definitions(mut self) -> Self {
        self.input.attribute_definitions.clear();
        self
    }

    /// Sets the billing mode.
    #[must_use]
    pub fn billing_mode(mut self, mode: BillingMode) -> Self {
        self.input.billing_mode = Some(mode);
        self
    }

    /// Sets the capacity settings.
    #[must_use]
    pub fn provisioned_throughput(mut self, throughput: ProvisionedThroughput) -> Self {
        self.input.provisioned_throughput = Some(throughput);
        self
    }

    /// Appends one global secondary index.
    #[must_use]
    pub fn global_secondary_index(mut self, index: GlobalSecondaryIndex) -> Self {
        self.input.global_secondary_indexes.push(index);
        self
    }

    /// Appends one local secondary index.
    #[must_use]
    pub fn local_secondary_index(mut self, index: LocalSecondaryIndex) -> Self {
        self.input.local_secondary_indexes.push(index);
        self
    }

    /// Sets the stream settings.
    #[must_use]
    pub fn stream_specification(mut self, spec: StreamSpecification) -> Self {
        self.input.stream_specification = Some(spec);
        self
    }

    /// Sets the encryption settings.
    #[must_use]
    pub fn sse_specification(mut self, sse: SseSpecification) -> Self {
        self.input.sse_specification = Some(sse);
        self
    }

    /// Appends one tag.
    #[must_use]
    pub fn tag(mut self, tag: Tag) -> Self {
        self.input.tags.push(tag);
        self
    }

    /// Validates and produces the request.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MissingField`] if the table name is empty.
    /// - [`BuildError::KeySchema`] if the key schema is malformed, a key
    ///   attribute has no definition, or a defined attribute type is not
    ///   valid for keys.
    /// - [`BuildError::DuplicateKey`] if two definitions name the same
    ///   attribute.
    /// - [`BuildError::Parameter`] if the throughput settings contradict
    ///   the billing mode, or an index key schema is malformed.
    pub fn build(self) -> Result<CreateTableInput, BuildError> {
        let input = self.input;
        builder::require_name("TableName", Some(input.table_name.clone()))?;
        builder::validate_key_schema(&input.key_schema)?;

        for (i, def) in input.attribute_definitions.iter().enumerate() {
            if input.attribute_definitions[..i]
                .iter()
                .any(|d| d.attribute_name == def.attribute_name)
            {
                return Err(BuildError::DuplicateKey {
                    field: "AttributeDefinitions",
                    key: def.attribute_name.clone(),
                });
            }
            if !def.attribute_type.is_valid_key_type() {
                return Err(BuildError::KeySchema(format!(
                    "attribute {:?} has non-key type {}",
                    def.attribute_name, def.attribute_type
                )));
            }
        }
        for element in &input.key_schema {
            if !input
                .attribute_definitions
                .iter()
                .any(|d| d.attribute_name == element.attribute_name)
            {
                return Err(BuildError::KeySchema(format!(
                    "key attribute {:?} has no definition",
                    element.attribute_name
                )));
            }
        }

        for index in &input.global_secondary_indexes {
            builder::validate_key_schema(&index.key_schema).map_err(|e| {
                BuildError::Parameter(format!("index {:?}: {e}", index.index_name))
            })?;
        }
        for index in &input.local_secondary_indexes {
            builder::validate_key_schema(&index.key_schema).map_err(|e| {
                BuildError::Parameter(format!("index {:?}: {e}", index.index_name))
            })?;
            // LSIs share the table's partition key.
            let table_hash = input
                .key_schema
                .iter()
                .find(|e| e.key_type == KeyType::Hash);
            let index_hash = index.key_schema.iter().find(|e| e.key_type == KeyType::Hash);
            if let (Some(table_hash), Some(index_hash)) = (table_hash, index_hash)
                && table_hash.attribute_name != index_hash.attribute_name
            {
                return Err(BuildError::Parameter(format!(
                    "index {:?} must use the table's HASH key {:?}",
                    index.index_name, table_hash.attribute_name
                )));
            }
        }

        match (&input.billing_mode, &input.provisioned_throughput) {
            (Some(BillingMode::Provisioned) | None, None) => {
                return Err(BuildError::Parameter(
                    "ProvisionedThroughput is required unless BillingMode is PAY_PER_REQUEST"
                        .to_owned(),
                ));
            }
            (Some(BillingMode::PayPerRequest), Some(_)) => {
                return Err(BuildError::Parameter(
                    "ProvisionedThroughput cannot be set when BillingMode is PAY_PER_REQUEST"
                        .to_owned(),
                ));
            }
            _ => {}
        }

        Ok(input)
    }
}

/// Input for the `UpdateTable` operation. Only the settings being changed
/// are populated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateTableInput {
    /// Name of the table to update.
    pub table_name: String,

    /// New definitions for attributes being added to an index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_definitions: Vec<AttributeDefinition>,

    /// New billing mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<BillingMode>,

    /// New capacity settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,

    /// New stream settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpecification>,

    /// New encryption settings.
    #[serde(rename = "SSESpecification", skip_serializing_if = "Option::is_none")]
    pub sse_specification: Option<SseSpecification>,
}

impl UpdateTableInput {
    /// Starts building an `UpdateTable` request for the named table.
    #[must_use]
    pub fn builder(table_name: impl Into<String>) -> UpdateTableInputBuilder {
        UpdateTableInputBuilder {
            input: Self {
                table_name: table_name.into(),
                ..Self::default()
            },
        }
    }
}

/// Consuming builder for [`UpdateTableInput`].
#[derive(Debug, Clone)]
pub struct UpdateTableInputBuilder {
    input: UpdateTableInput,
}

impl UpdateTableInputBuilder {
    /// Appends one attribute definition.
    #[must_use]
    pub fn attribute_definition(mut self, definition: AttributeDefinition) -> Self {
        self.input.attribute_definitions.push(definition);
        self
    }

    /// Sets the new billing mode.
    #[must_use]
    pub fn billing_mode(mut self, mode: BillingMode) -> Self {
        self.input.billing_mode = Some(mode);
        self
    }

    /// Sets the new capacity settings.
    #[must_use]
    pub fn provisioned_throughput(mut self, throughput: ProvisionedThroughput) -> Self {
        self.input.provisioned_throughput = Some(throughput);
        self
    }

    /// Sets the new stream settings.
    #[must_use]
    pub fn stream_specification(mut self, spec: StreamSpecification) -> Self {
        self.input.stream_specification = Some(spec);
        self
    }

    /// Sets the new encryption settings.
    #[must_use]
    pub fn sse_specification(mut self, sse: SseSpecification) -> Self {
        self.input.sse_specification = Some(sse);
        self
    }

    /// Validates and produces the request.
    ///
    /// # Errors
    ///
    /// [`BuildError::MissingField`] if the table name is empty, and
    /// [`BuildError::Parameter`] if no setting is being changed or the
    /// throughput settings contradict the billing mode.
    pub fn build(self) -> Result<UpdateTableInput, BuildError> {
        let input = self.input;
        builder::require_name("TableName", Some(input.table_name.clone()))?;
        if input.attribute_definitions.is_empty()
            && input.billing_mode.is_none()
            && input.provisioned_throughput.is_none()
            && input.stream_specification.is_none()
            && input.sse_specification.is_none()
        {
            return Err(BuildError::Parameter(
                "at least one setting must be changed".to_owned(),
            ));
        }
        if input.billing_mode == Some(BillingMode::PayPerRequest)
            && input.provisioned_throughput.is_some()
        {
            return Err(BuildError::Parameter(
                "ProvisionedThroughput cannot be set when BillingMode is PAY_PER_REQUEST"
                    .to_owned(),
            ));
        }
        Ok(input)
    }
}

/// Input for the `DeleteTable` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTableInput {
    /// Name of the table to delete.
    pub table_name: String,
}

impl DeleteTableInput {
    /// Creates the request.
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

/// Input for the `DescribeTable` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTableInput {
    /// Name of the table to describe.
    pub table_name: String,
}

impl DescribeTableInput {
    /// Creates the request.
    #[must_use]
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
        }
    }
}

/// Input for the `ListTables` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListTablesInput {
    /// Table name to resume listing after, from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_table_name: Option<String>,

    /// Maximum number of names to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

impl ListTablesInput {
    /// Creates a request for the first page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Projection, ScalarAttributeType};

    fn base_builder() -> CreateTableInputBuilder {
        CreateTableInput::builder("Orders")
            .key_schema_element(KeySchemaElement::hash("OrderId"))
            .attribute_definition(AttributeDefinition::new("OrderId", ScalarAttributeType::S))
            .billing_mode(BillingMode::PayPerRequest)
    }

    #[test]
    fn test_should_build_minimal_create_table_request() {
        let input = base_builder().build().unwrap();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""TableName":"Orders""#));
        assert!(json.contains(r#""BillingMode":"PAY_PER_REQUEST""#));
        assert!(!json.contains("GlobalSecondaryIndexes"));
        assert!(!json.contains("ProvisionedThroughput"));
    }

    #[test]
    fn test_should_require_throughput_for_provisioned_mode() {
        let err = CreateTableInput::builder("Orders")
            .key_schema_element(KeySchemaElement::hash("OrderId"))
            .attribute_definition(AttributeDefinition::new("OrderId", ScalarAttributeType::S))
            .billing_mode(BillingMode::Provisioned)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));

        let input = CreateTableInput::builder("Orders")
            .key_schema_element(KeySchemaElement::hash("OrderId"))
            .attribute_definition(AttributeDefinition::new("OrderId", ScalarAttributeType::S))
            .billing_mode(BillingMode::Provisioned)
            .provisioned_throughput(ProvisionedThroughput {
                read_capacity_units: 5,
                write_capacity_units: 5,
            })
            .build()
            .unwrap();
        assert!(input.provisioned_throughput.is_some());
    }

    #[test]
    fn test_should_reject_throughput_in_on_demand_mode() {
        let err = base_builder()
            .provisioned_throughput(ProvisionedThroughput {
                read_capacity_units: 5,
                write_capacity_units: 5,
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));
    }

    #[test]
    fn test_should_reject_duplicate_attribute_definitions() {
        let err = base_builder()
            .attribute_definition(AttributeDefinition::new("OrderId", ScalarAttributeType::N))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateKey {
                field: "AttributeDefinitions",
                key: "OrderId".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_reject_undefined_key_attribute() {
        let err = CreateTableInput::builder("Orders")
            .key_schema_element(KeySchemaElement::hash("OrderId"))
            .key_schema_element(KeySchemaElement::range("PlacedAt"))
            .attribute_definition(AttributeDefinition::new("OrderId", ScalarAttributeType::S))
            .billing_mode(BillingMode::PayPerRequest)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::KeySchema(_)));
    }

    #[test]
    fn test_should_reject_non_key_attribute_type_in_definitions() {
        let err = base_builder()
            .attribute_definition(AttributeDefinition::new(
                "Tags",
                ScalarAttributeType::Unknown("SS".to_owned()),
            ))
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::KeySchema(_)));
    }

    #[test]
    fn test_should_reject_lsi_with_foreign_hash_key() {
        let err = base_builder()
            .attribute_definition(AttributeDefinition::new(
                "CustomerId",
                ScalarAttributeType::S,
            ))
            .local_secondary_index(LocalSecondaryIndex {
                index_name: "ByCustomer".to_owned(),
                key_schema: vec![
                    KeySchemaElement::hash("CustomerId"),
                    KeySchemaElement::range("OrderId"),
                ],
                projection: Projection::default(),
            })
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));
    }

    #[test]
    fn test_should_accept_gsi_with_its_own_keys() {
        let input = base_builder()
            .attribute_definition(AttributeDefinition::new(
                "CustomerId",
                ScalarAttributeType::S,
            ))
            .global_secondary_index(GlobalSecondaryIndex {
                index_name: "ByCustomer".to_owned(),
                key_schema: vec![KeySchemaElement::hash("CustomerId")],
                projection: Projection::default(),
                provisioned_throughput: None,
            })
            .build()
            .unwrap();
        assert_eq!(input.global_secondary_indexes.len(), 1);
    }

    #[test]
    fn test_should_require_some_change_in_update_table() {
        let err = UpdateTableInput::builder("Orders").build().unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));

        let input = UpdateTableInput::builder("Orders")
            .billing_mode(BillingMode::PayPerRequest)
            .build()
            .unwrap();
        assert_eq!(input.billing_mode, Some(BillingMode::PayPerRequest));
    }

    #[test]
    fn test_should_serialize_trivial_inputs() {
        assert_eq!(
            serde_json::to_string(&DeleteTableInput::new("Orders")).unwrap(),
            r#"{"TableName":"Orders"}"#
        );
        assert_eq!(
            serde_json::to_string(&DescribeTableInput::new("Orders")).unwrap(),
            r#"{"TableName":"Orders"}"#
        );
        assert_eq!(serde_json::to_string(&ListTablesInput::new()).unwrap(), "{}");
        let paged = ListTablesInput {
            exclusive_start_table_name: Some("Orders".to_owned()),
            limit: Some(10),
        };
        assert_eq!(
            serde_json::to_string(&paged).unwrap(),
            r#"{"ExclusiveStartTableName":"Orders","Limit":10}"#
        );
    }
}
