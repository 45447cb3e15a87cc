//! Shared wire types: choice enums and the structs reused across
//! request and response models.
//!
//! Structs serialize with `PascalCase` field names to match the wire
//! protocol, and every optional field is omitted when unset. Choice
//! enums are declared through [`wire_enum!`], which routes both serde
//! directions through a single string table so that a value set from the
//! symbolic enum and one parsed from its canonical string are
//! indistinguishable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;
use crate::condition::ComparisonOperator;

/// Declares a closed wire enum.
///
/// Generates the enum plus `as_str`, `Display`, `FromStr` (failing with
/// [`crate::error::InvalidEnumValue`]), and serde impls that serialize
/// the exact wire string and reject anything outside the closed set.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// Returns the exact wire-format string for this value.
            #[must_use]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::InvalidEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err($crate::error::InvalidEnumValue {
                        expected: stringify!($name),
                        value: s.to_owned(),
                    }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}
pub(crate) use wire_enum;

// ---------------------------------------------------------------------------
// Choice enums
// ---------------------------------------------------------------------------

wire_enum! {
    /// Role of an attribute within a key schema.
    KeyType {
        /// Partition key.
        Hash => "HASH",
        /// Sort key.
        Range => "RANGE",
    }
}

wire_enum! {
    /// Lifecycle state of a table.
    TableStatus {
        /// The table is being created.
        Creating => "CREATING",
        /// The table is being updated.
        Updating => "UPDATING",
        /// The table is being deleted.
        Deleting => "DELETING",
        /// The table is ready for use.
        Active => "ACTIVE",
    }
}

wire_enum! {
    /// Lifecycle state of a global secondary index.
    IndexStatus {
        /// The index is being created.
        Creating => "CREATING",
        /// The index is being updated.
        Updating => "UPDATING",
        /// The index is being deleted.
        Deleting => "DELETING",
        /// The index is ready for use.
        Active => "ACTIVE",
    }
}

wire_enum! {
    /// Which attributes a secondary index copies from the base table.
    ProjectionType {
        /// Every attribute.
        All => "ALL",
        /// Only the index and primary key attributes.
        KeysOnly => "KEYS_ONLY",
        /// Keys plus the listed non-key attributes.
        Include => "INCLUDE",
    }
}

impl Default for ProjectionType {
    fn default() -> Self {
        Self::All
    }
}

wire_enum! {
    /// What a change-capture stream records for each modification.
    StreamViewType {
        /// Only the key attributes.
        KeysOnly => "KEYS_ONLY",
        /// The item as it appears after the modification.
        NewImage => "NEW_IMAGE",
        /// The item as it appeared before the modification.
        OldImage => "OLD_IMAGE",
        /// Both images.
        NewAndOldImages => "NEW_AND_OLD_IMAGES",
    }
}

wire_enum! {
    /// Server-side encryption key type.
    SseType {
        /// Service-owned key.
        Aes256 => "AES256",
        /// Customer-managed KMS key.
        Kms => "KMS",
    }
}

wire_enum! {
    /// Server-side encryption state.
    SseStatus {
        /// Encryption is being enabled.
        Enabling => "ENABLING",
        /// Encryption is active.
        Enabled => "ENABLED",
        /// Encryption is being disabled.
        Disabling => "DISABLING",
        /// Encryption is off.
        Disabled => "DISABLED",
        /// Encryption settings are being updated.
        Updating => "UPDATING",
    }
}

wire_enum! {
    /// Which attribute values a write operation echoes back.
    ReturnValue {
        /// Nothing.
        None => "NONE",
        /// The whole item as it was before the write.
        AllOld => "ALL_OLD",
        /// Only the touched attributes, pre-write.
        UpdatedOld => "UPDATED_OLD",
        /// The whole item as it is after the write.
        AllNew => "ALL_NEW",
        /// Only the touched attributes, post-write.
        UpdatedNew => "UPDATED_NEW",
    }
}

impl Default for ReturnValue {
    fn default() -> Self {
        Self::None
    }
}

wire_enum! {
    /// How much consumed-capacity detail a response carries.
    ReturnConsumedCapacity {
        /// Per-table and per-index breakdown.
        Indexes => "INDEXES",
        /// Only the operation total.
        Total => "TOTAL",
        /// No capacity information.
        None => "NONE",
    }
}

impl Default for ReturnConsumedCapacity {
    fn default() -> Self {
        Self::None
    }
}

impl ReturnConsumedCapacity {
    /// Returns `true` if any capacity reporting was requested.
    #[must_use]
    pub fn should_report(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if per-index capacity was requested.
    #[must_use]
    pub fn should_report_indexes(&self) -> bool {
        matches!(self, Self::Indexes)
    }
}

wire_enum! {
    /// Whether a write reports item collection size estimates.
    ReturnItemCollectionMetrics {
        /// Report size estimates.
        Size => "SIZE",
        /// Report nothing.
        None => "NONE",
    }
}

impl Default for ReturnItemCollectionMetrics {
    fn default() -> Self {
        Self::None
    }
}

wire_enum! {
    /// Which attributes a Query or Scan returns.
    Select {
        /// Every attribute of each item.
        AllAttributes => "ALL_ATTRIBUTES",
        /// Every projected attribute (index reads).
        AllProjectedAttributes => "ALL_PROJECTED_ATTRIBUTES",
        /// Only the attributes named by the projection expression.
        SpecificAttributes => "SPECIFIC_ATTRIBUTES",
        /// Only the count of matching items.
        Count => "COUNT",
    }
}

impl Default for Select {
    fn default() -> Self {
        Self::AllAttributes
    }
}

wire_enum! {
    /// Per-attribute action in the legacy `AttributeUpdates` parameter.
    AttributeAction {
        /// Set the attribute to the given value.
        Put => "PUT",
        /// Remove the attribute, or remove elements from a set.
        Delete => "DELETE",
        /// Add to a number, or insert into a set.
        Add => "ADD",
    }
}

impl Default for AttributeAction {
    fn default() -> Self {
        Self::Put
    }
}

/// Scalar type of a key or index attribute.
///
/// Only `S`, `N`, and `B` are valid for key attributes, but the wire may
/// deliver other strings; those are preserved in [`Self::Unknown`] so the
/// caller can reject them with a proper validation error instead of a
/// deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScalarAttributeType {
    /// String.
    S,
    /// Number.
    N,
    /// Binary.
    B,
    /// An unrecognized type string, preserved verbatim.
    Unknown(String),
}

impl ScalarAttributeType {
    /// Returns the wire-format string for this type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::S => "S",
            Self::N => "N",
            Self::B => "B",
            Self::Unknown(s) => s,
        }
    }

    /// Returns `true` if this type may appear in a key schema.
    #[must_use]
    pub fn is_valid_key_type(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl From<&str> for ScalarAttributeType {
    fn from(s: &str) -> Self {
        match s {
            "S" => Self::S,
            "N" => Self::N,
            "B" => Self::B,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl std::fmt::Display for ScalarAttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ScalarAttributeType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ScalarAttributeType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// Capacity billing mode of a table.
///
/// Open-set for the same reason as [`ScalarAttributeType`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BillingMode {
    /// Pre-allocated read/write capacity.
    Provisioned,
    /// Pay per request.
    #[default]
    PayPerRequest,
    /// An unrecognized mode string, preserved verbatim.
    Unknown(String),
}

impl BillingMode {
    /// Returns the wire-format string for this mode.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Provisioned => "PROVISIONED",
            Self::PayPerRequest => "PAY_PER_REQUEST",
            Self::Unknown(s) => s,
        }
    }
}

impl From<&str> for BillingMode {
    fn from(s: &str) -> Self {
        match s {
            "PROVISIONED" => Self::Provisioned,
            "PAY_PER_REQUEST" => Self::PayPerRequest,
            _ => Self::Unknown(s.to_owned()),
        }
    }
}

impl std::fmt::Display for BillingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BillingMode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BillingMode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

// ---------------------------------------------------------------------------
// Key schema and attribute definitions
// ---------------------------------------------------------------------------

/// One element of a key schema: an attribute name and its key role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeySchemaElement {
    /// Name of the key attribute.
    pub attribute_name: String,
    /// `HASH` (partition) or `RANGE` (sort).
    pub key_type: KeyType,
}

impl KeySchemaElement {
    /// Shorthand for a partition-key element.
    #[must_use]
    pub fn hash(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            key_type: KeyType::Hash,
        }
    }

    /// Shorthand for a sort-key element.
    #[must_use]
    pub fn range(attribute_name: impl Into<String>) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            key_type: KeyType::Range,
        }
    }
}

/// Declares an attribute that participates in a key schema or index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeDefinition {
    /// Name of the attribute.
    pub attribute_name: String,
    /// Scalar type of the attribute (`S`, `N`, or `B`).
    pub attribute_type: ScalarAttributeType,
}

impl AttributeDefinition {
    /// Creates a definition from a name and type.
    #[must_use]
    pub fn new(attribute_name: impl Into<String>, attribute_type: ScalarAttributeType) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            attribute_type,
        }
    }
}

// ---------------------------------------------------------------------------
// Throughput
// ---------------------------------------------------------------------------

/// Requested read/write capacity for a table or index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughput {
    /// Strongly consistent reads per second.
    pub read_capacity_units: i64,
    /// Writes per second.
    pub write_capacity_units: i64,
}

/// Provisioned capacity as reported in table metadata, with change history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughputDescription {
    /// Provisioned read capacity units.
    pub read_capacity_units: i64,
    /// Provisioned write capacity units.
    pub write_capacity_units: i64,
    /// Capacity decreases performed today.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_decreases_today: Option<i64>,
    /// Epoch seconds of the last capacity increase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_increase_date_time: Option<f64>,
    /// Epoch seconds of the last capacity decrease.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_decrease_date_time: Option<f64>,
}

// ---------------------------------------------------------------------------
// Secondary indexes
// ---------------------------------------------------------------------------

/// Which attributes an index copies from the base table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Projection {
    /// The projection kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_type: Option<ProjectionType>,
    /// Non-key attributes to copy when the kind is `INCLUDE`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_key_attributes: Vec<String>,
}

/// Global secondary index definition, as supplied at table creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSecondaryIndex {
    /// Index name, unique within the table.
    pub index_name: String,
    /// Key schema of the index.
    pub key_schema: Vec<KeySchemaElement>,
    /// Projected attributes.
    pub projection: Projection,
    /// Dedicated capacity, required in `PROVISIONED` mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughput>,
}

/// Global secondary index as reported in table metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSecondaryIndexDescription {
    /// Index name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// Key schema of the index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_schema: Vec<KeySchemaElement>,
    /// Projected attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    /// Lifecycle state of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_status: Option<IndexStatus>,
    /// Whether the index is still backfilling from the base table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfilling: Option<bool>,
    /// Capacity settings of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioned_throughput: Option<ProvisionedThroughputDescription>,
    /// Approximate index size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_size_bytes: Option<i64>,
    /// Approximate number of items in the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
    /// ARN of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_arn: Option<String>,
}

/// Local secondary index definition. LSIs share the table's partition
/// key and must be declared at table creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalSecondaryIndex {
    /// Index name, unique within the table.
    pub index_name: String,
    /// Key schema of the index.
    pub key_schema: Vec<KeySchemaElement>,
    /// Projected attributes.
    pub projection: Projection,
}

/// Local secondary index as reported in table metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LocalSecondaryIndexDescription {
    /// Index name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,
    /// Key schema of the index.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_schema: Vec<KeySchemaElement>,
    /// Projected attributes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    /// Approximate index size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_size_bytes: Option<i64>,
    /// Approximate number of items in the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_count: Option<i64>,
    /// ARN of the index.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_arn: Option<String>,
}

// ---------------------------------------------------------------------------
// Streams and encryption
// ---------------------------------------------------------------------------

/// Change-capture stream settings for a table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamSpecification {
    /// Whether the stream is enabled.
    pub stream_enabled: bool,
    /// What each stream record carries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_view_type: Option<StreamViewType>,
}

/// Requested server-side encryption settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SseSpecification {
    /// Whether encryption with a customer-managed key is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// The key type.
    #[serde(rename = "SSEType", skip_serializing_if = "Option::is_none")]
    pub sse_type: Option<SseType>,
    /// KMS key identifier when the type is `KMS`.
    #[serde(rename = "KMSMasterKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<String>,
}

/// Server-side encryption state as reported in table metadata.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SseDescription {
    /// Current encryption state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SseStatus>,
    /// The key type in use.
    #[serde(rename = "SSEType", skip_serializing_if = "Option::is_none")]
    pub sse_type: Option<SseType>,
    /// KMS key ARN in use.
    #[serde(rename = "KMSMasterKeyId", skip_serializing_if = "Option::is_none")]
    pub kms_master_key_id: Option<String>,
    /// Epoch seconds when the KMS key became inaccessible, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inaccessible_encryption_date_time: Option<f64>,
}

/// A key-value tag attached to a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key.
    pub key: String,
    /// Tag value.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Consumed capacity and item collection metrics
// ---------------------------------------------------------------------------

/// Capacity consumed by one table or index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Capacity {
    /// Read capacity units consumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_capacity_units: Option<f64>,
    /// Write capacity units consumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_capacity_units: Option<f64>,
    /// Total capacity units consumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_units: Option<f64>,
}

/// Capacity consumed by an operation, optionally broken down by index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsumedCapacity {
    /// The table the operation touched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    /// Total capacity units consumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_units: Option<f64>,
    /// Total read capacity units consumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_capacity_units: Option<f64>,
    /// Total write capacity units consumed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_capacity_units: Option<f64>,
    /// Capacity consumed by the base table alone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<Capacity>,
    /// Capacity consumed per local secondary index.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub local_secondary_indexes: HashMap<String, Capacity>,
    /// Capacity consumed per global secondary index.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub global_secondary_indexes: HashMap<String, Capacity>,
}

/// Size estimate for an item collection (items sharing a partition key).
/// Reported for tables with local secondary indexes when requested.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ItemCollectionMetrics {
    /// Partition key value identifying the collection.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub item_collection_key: HashMap<String, AttributeValue>,
    /// Lower and upper size bound in gigabytes.
    #[serde(
        rename = "SizeEstimateRangeGB",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub size_estimate_range_gb: Vec<f64>,
}

// ---------------------------------------------------------------------------
// Legacy update and conditional-check types
// ---------------------------------------------------------------------------

/// One entry of the legacy `AttributeUpdates` parameter.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttributeValueUpdate {
    /// The value the action applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
    /// What to do with the attribute (defaults to `PUT` on the wire).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<AttributeAction>,
}

impl AttributeValueUpdate {
    /// A `PUT` update carrying the given value.
    #[must_use]
    pub fn put(value: AttributeValue) -> Self {
        Self {
            value: Some(value),
            action: Some(AttributeAction::Put),
        }
    }

    /// A `DELETE` update (removes the attribute entirely).
    #[must_use]
    pub fn delete() -> Self {
        Self {
            value: None,
            action: Some(AttributeAction::Delete),
        }
    }

    /// An `ADD` update carrying the increment or set elements.
    #[must_use]
    pub fn add(value: AttributeValue) -> Self {
        Self {
            value: Some(value),
            action: Some(AttributeAction::Add),
        }
    }
}

/// One entry of the legacy `Expected` parameter (conditional writes).
///
/// Either the simple form (`value`/`exists`) or the extended form
/// (`comparison_operator` + `attribute_value_list`) is populated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpectedAttributeValue {
    /// Simple form: the value the attribute must equal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<AttributeValue>,
    /// Simple form: whether the attribute must exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    /// Extended form: the comparison to evaluate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_operator: Option<ComparisonOperator>,
    /// Extended form: the comparison operands, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_value_list: Vec<AttributeValue>,
}

// ---------------------------------------------------------------------------
// Batch operation pieces
// ---------------------------------------------------------------------------

/// Keys to fetch from one table in a batch read, plus read shaping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeysAndAttributes {
    /// Primary keys of the items to fetch.
    pub keys: Vec<HashMap<String, AttributeValue>>,
    /// Attributes to fetch; absent means all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,
    /// Placeholder substitutions for the projection expression.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: HashMap<String, String>,
    /// Whether to read with strong consistency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,
    /// Legacy list of attribute names to fetch.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,
}

/// One write in a batch: exactly one of put or delete is populated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WriteRequest {
    /// Put the carried item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put_request: Option<PutRequest>,
    /// Delete the item with the carried key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_request: Option<DeleteRequest>,
}

impl WriteRequest {
    /// A put of the given item.
    #[must_use]
    pub fn put(item: HashMap<String, AttributeValue>) -> Self {
        Self {
            put_request: Some(PutRequest { item }),
            delete_request: None,
        }
    }

    /// A delete of the item with the given key.
    #[must_use]
    pub fn delete(key: HashMap<String, AttributeValue>) -> Self {
        Self {
            put_request: None,
            delete_request: Some(DeleteRequest { key }),
        }
    }

    /// Returns `true` if exactly one of put/delete is populated.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.put_request.is_some() != self.delete_request.is_some()
    }
}

/// The put half of a [`WriteRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutRequest {
    /// Full item to write.
    pub item: HashMap<String, AttributeValue>,
}

/// The delete half of a [`WriteRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteRequest {
    /// Primary key of the item to delete.
    pub key: HashMap<String, AttributeValue>,
}

// ---------------------------------------------------------------------------
// Common aliases
// ---------------------------------------------------------------------------

/// An item: attribute names mapped to values.
pub type Item = HashMap<String, AttributeValue>;

/// A primary key: key attribute names mapped to values.
pub type Key = HashMap<String, AttributeValue>;

/// `#name` placeholders mapped to real attribute names.
pub type ExpressionAttributeNames = HashMap<String, String>;

/// `:value` placeholders mapped to attribute values.
pub type ExpressionAttributeValues = HashMap<String, AttributeValue>;
