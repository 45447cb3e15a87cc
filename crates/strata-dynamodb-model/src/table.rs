//! Table metadata aggregates.
//!
//! [`TableDescription`] is the shape returned by every control-plane
//! operation. Services assemble it through [`TableDescription::builder`],
//! which enforces the key schema shape; clients deserialize it straight
//! from the wire, where the service's own description is taken at face
//! value.

use serde::{Deserialize, Serialize};

use crate::builder;
use crate::error::BuildError;
use crate::types::{
    AttributeDefinition, BillingMode, GlobalSecondaryIndexDescription, KeySchemaElement,
    LocalSecondaryIndexDescription, ProvisionedThroughputDescription, SseDescription,
    StreamSpecification, TableStatus,
};

/// Billing mode of a table, with the time it last changed.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingModeSummary {
    /// Current billing mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_mode: Option<BillingMode>,
    /// Epoch seconds when the mode was last switched to `PAY_PER_REQUEST`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_to_pay_per_request_date_time: Option<f64>,
}

/// Details of the restore a table was created from, if any.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RestoreSummary {
    /// ARN of the backup the table was restored from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_backup_arn: Option<String>,
    /// ARN of the source table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_table_arn: Option<String>,
    /// Epoch seconds of the point in time restored to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_date_time: Option<f64>,
    /// Whether the restore is still running.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_in_progress: Option<bool>,
}

/// Full metadata of one table.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TableDescription {
    /// Table name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    /// Lifecycle state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_status: Option<TableStatus>,
    /// Primary key schema: one `HASH` element, optionally one `RANGE`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_schema: Vec<KeySchemaElement>,
    /// Declared key and index attributes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_definitions: Vec<AttributeDefinition>,
    /// Epoch seconds when the table was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<f64>,
    /// Capacity settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughputDescription>,
    /// Approximate table size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_size_bytes: Option<i64>,
    /// Approximate number of items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
    /// ARN of the table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_arn: Option<String>,
    /// Service-assigned unique identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    /// Billing mode and when it last changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_mode_summary: Option<BillingModeSummary>,
    /// Local secondary indexes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub local_secondary_indexes: Vec<LocalSecondaryIndexDescription>,
    /// Global secondary indexes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub global_secondary_indexes: Vec<GlobalSecondaryIndexDescription>,
    /// Change-capture stream settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_specification: Option<StreamSpecification>,
    /// Timestamp label of the current stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_stream_label: Option<String>,
    /// ARN of the current stream.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_stream_arn: Option<String>,
    /// Restore the table was created from, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restore_summary: Option<RestoreSummary>,
    /// Server-side encryption state.
    #[serde(rename = "SSEDescription", skip_serializing_if = "Option::is_none")]
    pub sse_description: Option<SseDescription>,
}

impl TableDescription {
    /// Starts building a description for the named table.
    #[must_use]
    pub fn builder(table_name: impl Into<String>) -> TableDescriptionBuilder {
        TableDescriptionBuilder {
            table_name: table_name.into(),
            description: Self::default(),
            key_schema: Vec::new(),
        }
    }

    /// Returns the partition key element, if the schema carries one.
    #[must_use]
    pub fn hash_key(&self) -> Option<&KeySchemaElement> {
        self.key_schema
            .iter()
            .find(|e| e.key_type == crate::types::KeyType::Hash)
    }

    /// Returns the sort key element, if the schema carries one.
    #[must_use]
    pub fn range_key(&self) -> Option<&KeySchemaElement> {
        self.key_schema
            .iter()
            .find(|e| e.key_type == crate::types::KeyType::Range)
    }
}

/// Consuming builder for [`TableDescription`].
///
/// Key schema elements accumulate in call order; the terminal
/// [`build`](Self::build) enforces the one-`HASH` / at-most-one-`RANGE`
/// shape.
#[derive(Debug, Clone)]
pub struct TableDescriptionBuilder {
    table_name: String,
    description: TableDescription,
    key_schema: Vec<KeySchemaElement>,
}

impl TableDescriptionBuilder {
    /// Sets the lifecycle state.
    #[must_use]
    pub fn table_status(mut self, status: TableStatus) -> Self {
        self.description.table_status = Some(status);
        self
    }

    /// Appends one key schema element.
    #[must_use]
    pub fn key_schema_element(mut self, element: KeySchemaElement) -> Self {
        self.key_schema.push(element);
        self
    }

    /// Discards every key schema element accumulated so far.
    #[must_use]
    pub fn clear_key_schema(mut self) -> Self {
        self.key_schema.clear();
        self
    }

    /// Appends one attribute definition.
    #[must_use]
    pub fn attribute_definition(mut self, definition: AttributeDefinition) -> Self {
        self.description.attribute_definitions.push(definition);
        self
    }

    /// Sets the creation time as epoch seconds.
    #[must_use]
    pub fn creation_date_time(mut self, epoch_seconds: f64) -> Self {
        self.description.creation_date_time = Some(epoch_seconds);
        self
    }

    /// Sets the capacity settings.
    #[must_use]
    pub fn provisioned_throughput(mut self, throughput: ProvisionedThroughputDescription) -> Self {
        self.description.provisioned_throughput = Some(throughput);
        self
    }

    /// Sets the approximate size in bytes.
    #[must_use]
    pub fn table_size_bytes(mut self, bytes: i64) -> Self {
        self.description.table_size_bytes = Some(bytes);
        self
    }

    /// Sets the approximate item count.
    #[must_use]
    pub fn item_count(mut self, count: i64) -> Self {
        self.description.item_count = Some(count);
        self
    }

    /// Sets the table ARN.
    #[must_use]
    pub fn table_arn(mut self, arn: impl Into<String>) -> Self {
        self.description.table_arn = Some(arn.into());
        self
    }

    /// Sets the service-assigned table id.
    #[must_use]
    pub fn table_id(mut self, id: impl Into<String>) -> Self {
        self.description.table_id = Some(id.into());
        self
    }

    /// Sets the billing mode summary.
    #[must_use]
    pub fn billing_mode_summary(mut self, summary: BillingModeSummary) -> Self {
        self.description.billing_mode_summary = Some(summary);
        self
    }

    /// Appends one local secondary index.
    #[must_use]
    pub fn local_secondary_index(mut self, index: LocalSecondaryIndexDescription) -> Self {
        self.description.local_secondary_indexes.push(index);
        self
    }

    /// Appends one global secondary index.
    #[must_use]
    pub fn global_secondary_index(mut self, index: GlobalSecondaryIndexDescription) -> Self {
        self.description.global_secondary_indexes.push(index);
        self
    }

    /// Sets the stream settings.
    #[must_use]
    pub fn stream_specification(mut self, spec: StreamSpecification) -> Self {
        self.description.stream_specification = Some(spec);
        self
    }

    /// Sets the current stream's timestamp label.
    #[must_use]
    pub fn latest_stream_label(mut self, label: impl Into<String>) -> Self {
        self.description.latest_stream_label = Some(label.into());
        self
    }

    /// Sets the current stream's ARN.
    #[must_use]
    pub fn latest_stream_arn(mut self, arn: impl Into<String>) -> Self {
        self.description.latest_stream_arn = Some(arn.into());
        self
    }

    /// Records the restore the table was created from.
    #[must_use]
    pub fn restore_summary(mut self, summary: RestoreSummary) -> Self {
        self.description.restore_summary = Some(summary);
        self
    }

    /// Sets the encryption state.
    #[must_use]
    pub fn sse_description(mut self, sse: SseDescription) -> Self {
        self.description.sse_description = Some(sse);
        self
    }

    /// Validates the key schema and produces the description.
    ///
    /// # Errors
    ///
    /// [`BuildError::KeySchema`] if the accumulated elements do not form
    /// exactly one `HASH` with at most one `RANGE`, or name the same
    /// attribute twice.
    pub fn build(mut self) -> Result<TableDescription, BuildError> {
        builder::validate_key_schema(&self.key_schema)?;
        self.description.table_name = Some(self.table_name);
        self.description.key_schema = self.key_schema;
        Ok(self.description)
    }
}
