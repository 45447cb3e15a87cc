//! Single-item request shapes: `PutItem`, `GetItem`, `UpdateItem`,
//! `DeleteItem`.
//!
//! Each builder accumulates map-valued fields as ordered entries and
//! converts them with [`crate::builder::into_unique_map`] at `build()`,
//! so a duplicated attribute name or expression placeholder fails the
//! build instead of silently overwriting an earlier entry. Builders also
//! reject mixing a legacy parameter with its expression replacement,
//! which the wire would otherwise carry to the service only to be
//! rejected there.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;
use crate::builder;
use crate::condition::ConditionalOperator;
use crate::error::BuildError;
use crate::types::{
    AttributeValueUpdate, ExpectedAttributeValue, ExpressionAttributeNames,
    ExpressionAttributeValues, Item, Key, ReturnConsumedCapacity, ReturnItemCollectionMetrics,
    ReturnValue,
};

/// Input for the `PutItem` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutItemInput {
    /// Name of the target table.
    pub table_name: String,

    /// Full item to write, including the primary key attributes.
    pub item: Item,

    /// Condition that must hold for the write to proceed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,

    /// Placeholder substitutions for attribute names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,

    /// Placeholder substitutions for attribute values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: ExpressionAttributeValues,

    /// Legacy conditional-write parameter.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expected: HashMap<String, ExpectedAttributeValue>,

    /// How multiple legacy `Expected` entries combine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,

    /// Which attribute values to echo back (`NONE` or `ALL_OLD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<ReturnValue>,

    /// Consumed-capacity detail to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,

    /// Whether to report item collection size estimates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl PutItemInput {
    /// Starts building a `PutItem` request for the named table.
    #[must_use]
    pub fn builder(table_name: impl Into<String>) -> PutItemInputBuilder {
        PutItemInputBuilder {
            table_name: table_name.into(),
            item: Vec::new(),
            condition_expression: None,
            expression_attribute_names: Vec::new(),
            expression_attribute_values: Vec::new(),
            expected: Vec::new(),
            conditional_operator: None,
            return_values: None,
            return_consumed_capacity: None,
            return_item_collection_metrics: None,
        }
    }
}

/// Consuming builder for [`PutItemInput`].
#[derive(Debug, Clone)]
pub struct PutItemInputBuilder {
    table_name: String,
    item: Vec<(String, AttributeValue)>,
    condition_expression: Option<String>,
    expression_attribute_names: Vec<(String, String)>,
    expression_attribute_values: Vec<(String, AttributeValue)>,
    expected: Vec<(String, ExpectedAttributeValue)>,
    conditional_operator: Option<ConditionalOperator>,
    return_values: Option<ReturnValue>,
    return_consumed_capacity: Option<ReturnConsumedCapacity>,
    return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl PutItemInputBuilder {
    /// Adds one attribute to the item.
    #[must_use]
    pub fn item(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.item.push((name.into(), value.into()));
        self
    }

    /// Discards every item attribute accumulated so far.
    #[must_use]
    pub fn clear_item(mut self) -> Self {
        self.item.clear();
        self
    }

    /// Sets the condition expression.
    #[must_use]
    pub fn condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    /// Maps one `#name` placeholder to a real attribute name.
    #[must_use]
    pub fn expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.expression_attribute_names
            .push((placeholder.into(), name.into()));
        self
    }

    /// Maps one `:value` placeholder to an attribute value.
    #[must_use]
    pub fn expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.expression_attribute_values
            .push((placeholder.into(), value.into()));
        self
    }

    /// Adds one legacy `Expected` entry.
    #[must_use]
    pub fn expected(
        mut self,
        attribute_name: impl Into<String>,
        expected: ExpectedAttributeValue,
    ) -> Self {
        self.expected.push((attribute_name.into(), expected));
        self
    }

    /// Sets how multiple `Expected` entries combine.
    #[must_use]
    pub fn conditional_operator(mut self, operator: ConditionalOperator) -> Self {
        self.conditional_operator = Some(operator);
        self
    }

    /// Sets which attribute values to echo back.
    #[must_use]
    pub fn return_values(mut self, values: ReturnValue) -> Self {
        self.return_values = Some(values);
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
    /// - [`BuildError::MissingField`] if the table name or item is empty.
    /// - [`BuildError::DuplicateKey`] if an attribute or placeholder was
    ///   added twice.
    /// - [`BuildError::LegacyConflict`] if `Expected` or
    ///   `ConditionalOperator` is combined with `ConditionExpression`.
    pub fn build(self) -> Result<PutItemInput, BuildError> {
        let table_name = builder::require_name("TableName", Some(self.table_name))?;
        if self.item.is_empty() {
            return Err(BuildError::MissingField("Item"));
        }
        if self.condition_expression.is_some() {
            if !self.expected.is_empty() {
                return Err(BuildError::LegacyConflict {
                    legacy: "Expected",
                    modern: "ConditionExpression",
                });
            }
            if self.conditional_operator.is_some() {
                return Err(BuildError::LegacyConflict {
                    legacy: "ConditionalOperator",
                    modern: "ConditionExpression",
                });
            }
        }
        Ok(PutItemInput {
            table_name,
            item: builder::into_unique_map("Item", self.item)?,
            condition_expression: self.condition_expression,
            expression_attribute_names: builder::into_unique_map(
                "ExpressionAttributeNames",
                self.expression_attribute_names,
            )?,
            expression_attribute_values: builder::into_unique_map(
                "ExpressionAttributeValues",
                self.expression_attribute_values,
            )?,
            expected: builder::into_unique_map("Expected", self.expected)?,
            conditional_operator: self.conditional_operator,
            return_values: self.return_values,
            return_consumed_capacity: self.return_consumed_capacity,
            return_item_collection_metrics: self.return_item_collection_metrics,
        })
    }
}

/// Input for the `GetItem` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemInput {
    /// Name of the target table.
    pub table_name: String,

    /// Primary key of the item to read.
    pub key: Key,

    /// Attributes to return; absent means all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,

    /// Placeholder substitutions for the projection expression.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,

    /// Legacy list of attribute names to return.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,

    /// Whether to read with strong consistency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,

    /// Consumed-capacity detail to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl GetItemInput {
    /// Starts building a `GetItem` request for the named table.
    #[must_use]
    pub fn builder(table_name: impl Into<String>) -> GetItemInputBuilder {
        GetItemInputBuilder {
            table_name: table_name.into(),
            key: Vec::new(),
            projection_expression: None,
            expression_attribute_names: Vec::new(),
            attributes_to_get: Vec::new(),
            consistent_read: None,
            return_consumed_capacity: None,
        }
    }
}

/// Consuming builder for [`GetItemInput`].
#[derive(Debug, Clone)]
pub struct GetItemInputBuilder {
    table_name: String,
    key: Vec<(String, AttributeValue)>,
    projection_expression: Option<String>,
    expression_attribute_names: Vec<(String, String)>,
    attributes_to_get: Vec<String>,
    consistent_read: Option<bool>,
    return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl GetItemInputBuilder {
    /// Adds one key attribute.
    #[must_use]
    pub fn key(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.key.push((name.into(), value.into()));
        self
    }

    /// Discards every key attribute accumulated so far.
    #[must_use]
    pub fn clear_key(mut self) -> Self {
        self.key.clear();
        self
    }

    /// Sets the projection expression.
    #[must_use]
    pub fn projection_expression(mut self, expression: impl Into<String>) -> Self {
        self.projection_expression = Some(expression.into());
        self
    }

    /// Maps one `#name` placeholder to a real attribute name.
    #[must_use]
    pub fn expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.expression_attribute_names
            .push((placeholder.into(), name.into()));
        self
    }

    /// Appends one legacy attribute name to return.
    #[must_use]
    pub fn attribute_to_get(mut self, name: impl Into<String>) -> Self {
        self.attributes_to_get.push(name.into());
        self
    }

    /// Sets whether to read with strong consistency.
    #[must_use]
    pub fn consistent_read(mut self, consistent: bool) -> Self {
        self.consistent_read = Some(consistent);
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
    /// - [`BuildError::MissingField`] if the table name or key is empty.
    /// - [`BuildError::DuplicateKey`] if a key attribute or placeholder
    ///   was added twice.
    /// - [`BuildError::LegacyConflict`] if `AttributesToGet` is combined
    ///   with `ProjectionExpression`.
    pub fn build(self) -> Result<GetItemInput, BuildError> {
        let table_name = builder::require_name("TableName", Some(self.table_name))?;
        if self.key.is_empty() {
            return Err(BuildError::MissingField("Key"));
        }
        if self.projection_expression.is_some() && !self.attributes_to_get.is_empty() {
            return Err(BuildError::LegacyConflict {
                legacy: "AttributesToGet",
                modern: "ProjectionExpression",
            });
        }
        Ok(GetItemInput {
            table_name,
            key: builder::into_unique_map("Key", self.key)?,
            projection_expression: self.projection_expression,
            expression_attribute_names: builder::into_unique_map(
                "ExpressionAttributeNames",
                self.expression_attribute_names,
            )?,
            attributes_to_get: self.attributes_to_get,
            consistent_read: self.consistent_read,
            return_consumed_capacity: self.return_consumed_capacity,
        })
    }
}

/// Input for the `UpdateItem` operation.
///
/// Carries either the expression parameters (`UpdateExpression`,
/// `ConditionExpression`) or their legacy counterparts
/// (`AttributeUpdates`, `Expected`), never both sides of a pair.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateItemInput {
    /// Name of the target table.
    pub table_name: String,

    /// Primary key of the item to update.
    pub key: Key,

    /// Update actions, e.g. `SET Price = :p`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_expression: Option<String>,

    /// Condition that must hold for the update to proceed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,

    /// Placeholder substitutions for attribute names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,

    /// Placeholder substitutions for attribute values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: ExpressionAttributeValues,

    /// Legacy per-attribute update actions.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attribute_updates: HashMap<String, AttributeValueUpdate>,

    /// Legacy conditional-write parameter.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expected: HashMap<String, ExpectedAttributeValue>,

    /// How multiple legacy `Expected` entries combine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,

    /// Which attribute values to echo back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<ReturnValue>,

    /// Consumed-capacity detail to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,

    /// Whether to report item collection size estimates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl UpdateItemInput {
    /// Starts building an `UpdateItem` request for the named table.
    #[must_use]
    pub fn builder(table_name: impl Into<String>) -> UpdateItemInputBuilder {
        UpdateItemInputBuilder {
            table_name: table_name.into(),
            key: Vec::new(),
            update_expression: None,
            condition_expression: None,
            expression_attribute_names: Vec::new(),
            expression_attribute_values: Vec::new(),
            attribute_updates: Vec::new(),
            expected: Vec::new(),
            conditional_operator: None,
            return_values: None,
            return_consumed_capacity: None,
            return_item_collection_metrics: None,
        }
    }
}

/// Consuming builder for [`UpdateItemInput`].
#[derive(Debug, Clone)]
pub struct UpdateItemInputBuilder {
    table_name: String,
    key: Vec<(String, AttributeValue)>,
    update_expression: Option<String>,
    condition_expression: Option<String>,
    expression_attribute_names: Vec<(String, String)>,
    expression_attribute_values: Vec<(String, AttributeValue)>,
    attribute_updates: Vec<(String, AttributeValueUpdate)>,
    expected: Vec<(String, ExpectedAttributeValue)>,
    conditional_operator: Option<ConditionalOperator>,
    return_values: Option<ReturnValue>,
    return_consumed_capacity: Option<ReturnConsumedCapacity>,
    return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl UpdateItemInputBuilder {
    /// Adds one key attribute.
    #[must_use]
    pub fn key(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.key.push((name.into(), value.into()));
        self
    }

    /// Discards every key attribute accumulated so far.
    #[must_use]
    pub fn clear_key(mut self) -> Self {
        self.key.clear();
        self
    }

    /// Sets the update expression.
    #[must_use]
    pub fn update_expression(mut self, expression: impl Into<String>) -> Self {
        self.update_expression = Some(expression.into());
        self
    }

    /// Sets the condition expression.
    #[must_use]
    pub fn condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    /// Maps one `#name` placeholder to a real attribute name.
    #[must_use]
    pub fn expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.expression_attribute_names
            .push((placeholder.into(), name.into()));
        self
    }

    /// Maps one `:value` placeholder to an attribute value.
    #[must_use]
    pub fn expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.expression_attribute_values
            .push((placeholder.into(), value.into()));
        self
    }

    /// Adds one legacy per-attribute update action.
    #[must_use]
    pub fn attribute_update(
        mut self,
        attribute_name: impl Into<String>,
        update: AttributeValueUpdate,
    ) -> Self {
        self.attribute_updates.push((attribute_name.into(), update));
        self
    }

    /// Discards every legacy update action accumulated so far.
    #[must_use]
    pub fn clear_attribute_updates(mut self) -> Self {
        self.attribute_updates.clear();
        self
    }

    /// Adds one legacy `Expected` entry.
    #[must_use]
    pub fn expected(
        mut self,
        attribute_name: impl Into<String>,
        expected: ExpectedAttributeValue,
    ) -> Self {
        self.expected.push((attribute_name.into(), expected));
        self
    }

    /// Sets how multiple `Expected` entries combine.
    #[must_use]
    pub fn conditional_operator(mut self, operator: ConditionalOperator) -> Self {
        self.conditional_operator = Some(operator);
        self
    }

    /// Sets which attribute values to echo back.
    #[must_use]
    pub fn return_values(mut self, values: ReturnValue) -> Self {
        self.return_values = Some(values);
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
    /// - [`BuildError::MissingField`] if the table name or key is empty.
    /// - [`BuildError::DuplicateKey`] if a key attribute, placeholder,
    ///   legacy update, or `Expected` entry was added twice.
    /// - [`BuildError::LegacyConflict`] if `AttributeUpdates` is combined
    ///   with `UpdateExpression`, or `Expected`/`ConditionalOperator`
    ///   with `ConditionExpression`.
    pub fn build(self) -> Result<UpdateItemInput, BuildError> {
        let table_name = builder::require_name("TableName", Some(self.table_name))?;
        if self.key.is_empty() {
            return Err(BuildError::MissingField("Key"));
        }
        if self.update_expression.is_some() && !self.attribute_updates.is_empty() {
            return Err(BuildError::LegacyConflict {
                legacy: "AttributeUpdates",
                modern: "UpdateExpression",
            });
        }
        if self.condition_expression.is_some() {
            if !self.expected.is_empty() {
                return Err(BuildError::LegacyConflict {
                    legacy: "Expected",
                    modern: "ConditionExpression",
                });
            }
            if self.conditional_operator.is_some() {
                return Err(BuildError::LegacyConflict {
                    legacy: "ConditionalOperator",
                    modern: "ConditionExpression",
                });
            }
        }
        Ok(UpdateItemInput {
            table_name,
            key: builder::into_unique_map("Key", self.key)?,
            update_expression: self.update_expression,
            condition_expression: self.condition_expression,
            expression_attribute_names: builder::into_unique_map(
                "ExpressionAttributeNames",
                self.expression_attribute_names,
            )?,
            expression_attribute_values: builder::into_unique_map(
                "ExpressionAttributeValues",
                self.expression_attribute_values,
            )?,
            attribute_updates: builder::into_unique_map(
                "AttributeUpdates",
                self.attribute_updates,
            )?,
            expected: builder::into_unique_map("Expected", self.expected)?,
            conditional_operator: self.conditional_operator,
            return_values: self.return_values,
            return_consumed_capacity: self.return_consumed_capacity,
            return_item_collection_metrics: self.return_item_collection_metrics,
        })
    }
}

/// Input for the `DeleteItem` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteItemInput {
    /// Name of the target table.
    pub table_name: String,

    /// Primary key of the item to delete.
    pub key: Key,

    /// Condition that must hold for the delete to proceed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_expression: Option<String>,

    /// Placeholder substitutions for attribute names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,

    /// Placeholder substitutions for attribute values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: ExpressionAttributeValues,

    /// Legacy conditional-write parameter.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expected: HashMap<String, ExpectedAttributeValue>,

    /// How multiple legacy `Expected` entries combine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,

    /// Which attribute values to echo back (`NONE` or `ALL_OLD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_values: Option<ReturnValue>,

    /// Consumed-capacity detail to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,

    /// Whether to report item collection size estimates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl DeleteItemInput {
    /// Starts building a `DeleteItem` request for the named table.
    #[must_use]
    pub fn builder(table_name: impl Into<String>) -> DeleteItemInputBuilder {
        DeleteItemInputBuilder {
            table_name: table_name.into(),
            key: Vec::new(),
            condition_expression: None,
            expression_attribute_names: Vec::new(),
            expression_attribute_values: Vec::new(),
            expected: Vec::new(),
            conditional_operator: None,
            return_values: None,
            return_consumed_capacity: None,
            return_item_collection_metrics: None,
        }
    }
}

/// Consuming builder for [`DeleteItemInput`].
#[derive(Debug, Clone)]
pub struct DeleteItemInputBuilder {
    table_name: String,
    key: Vec<(String, AttributeValue)>,
    condition_expression: Option<String>,
    expression_attribute_names: Vec<(String, String)>,
    expression_attribute_values: Vec<(String, AttributeValue)>,
    expected: Vec<(String, ExpectedAttributeValue)>,
    conditional_operator: Option<ConditionalOperator>,
    return_values: Option<ReturnValue>,
    return_consumed_capacity: Option<ReturnConsumedCapacity>,
    return_item_collection_metrics: Option<ReturnItemCollectionMetrics>,
}

impl DeleteItemInputBuilder {
    /// Adds one key attribute.
    #[must_use]
    pub fn key(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.key.push((name.into(), value.into()));
        self
    }

    /// Sets the condition expression.
    #[must_use]
    pub fn condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.condition_expression = Some(expression.into());
        self
    }

    /// Maps one `#name` placeholder to a real attribute name.
    #[must_use]
    pub fn expression_attribute_name(
        mut self,
        placeholder: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.expression_attribute_names
            .push((placeholder.into(), name.into()));
        self
    }

    /// Maps one `:value` placeholder to an attribute value.
    #[must_use]
    pub fn expression_attribute_value(
        mut self,
        placeholder: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.expression_attribute_values
            .push((placeholder.into(), value.into()));
        self
    }

    /// Adds one legacy `Expected` entry.
    #[must_use]
    pub fn expected(
        mut self,
        attribute_name: impl Into<String>,
        expected: ExpectedAttributeValue,
    ) -> Self {
        self.expected.push((attribute_name.into(), expected));
        self
    }

    /// Sets how multiple `Expected` entries combine.
    #[must_use]
    pub fn conditional_operator(mut self, operator: ConditionalOperator) -> Self {
        self.conditional_operator = Some(operator);
        self
    }

    /// Sets which attribute values to echo back.
    #[must_use]
    pub fn return_values(mut self, values: ReturnValue) -> Self {
        self.return_values = Some(values);
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
    /// Same rules as [`PutItemInputBuilder::build`], with `Key` in place
    /// of `Item`.
    pub fn build(self) -> Result<DeleteItemInput, BuildError> {
        let table_name = builder::require_name("TableName", Some(self.table_name))?;
        if self.key.is_empty() {
            return Err(BuildError::MissingField("Key"));
        }
        if self.condition_expression.is_some() {
            if !self.expected.is_empty() {
                return Err(BuildError::LegacyConflict {
                    legacy: "Expected",
                    modern: "ConditionExpression",
                });
            }
            if self.conditional_operator.is_some() {
                return Err(BuildError::LegacyConflict {
                    legacy: "ConditionalOperator",
                    modern: "ConditionExpression",
                });
            }
        }
        Ok(DeleteItemInput {
            table_name,
            key: builder::into_unique_map("Key", self.key)?,
            condition_expression: self.condition_expression,
            expression_attribute_names: builder::into_unique_map(
                "ExpressionAttributeNames",
                self.expression_attribute_names,
            )?,
            expression_attribute_values: builder::into_unique_map(
                "ExpressionAttributeValues",
                self.expression_attribute_values,
            )?,
            expected: builder::into_unique_map("Expected", self.expected)?,
            conditional_operator: self.conditional_operator,
            return_values: self.return_values,
            return_consumed_capacity: self.return_consumed_capacity,
            return_item_collection_metrics: self.return_item_collection_metrics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_put_item_with_condition_expression() {
        let input = PutItemInput::builder("Orders")
            .item("OrderId", "order-1")
            .item("Total", 42_i64)
            .condition_expression("attribute_not_exists(OrderId)")
            .return_values(ReturnValue::AllOld)
            .build()
            .unwrap();
        assert_eq!(input.item.len(), 2);
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""ConditionExpression":"attribute_not_exists(OrderId)""#));
        assert!(json.contains(r#""ReturnValues":"ALL_OLD""#));
        assert!(!json.contains("Expected"));
    }

    #[test]
    fn test_should_reject_duplicate_item_attribute() {
        let err = PutItemInput::builder("Orders")
            .item("OrderId", "order-1")
            .item("OrderId", "order-2")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateKey {
                field: "Item",
                key: "OrderId".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_reject_duplicate_expression_placeholder() {
        let err = UpdateItemInput::builder("Orders")
            .key("OrderId", "order-1")
            .update_expression("SET Price = :p")
            .expression_attribute_value(":p", 10_i64)
            .expression_attribute_value(":p", 20_i64)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::DuplicateKey {
                field: "ExpressionAttributeValues",
                key: ":p".to_owned(),
            }
        );
    }

    #[test]
    fn test_should_build_update_item_with_expression_parameters() {
        let input = UpdateItemInput::builder("Orders")
            .key("OrderId", "order-1")
            .update_expression("SET #st = :s")
            .expression_attribute_name("#st", "Status")
            .expression_attribute_value(":s", "SHIPPED")
            .return_values(ReturnValue::UpdatedNew)
            .build()
            .unwrap();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""UpdateExpression":"SET #st = :s""#));
        assert!(json.contains(r##""ExpressionAttributeNames":{"#st":"Status"}"##));
        assert!(json.contains(r#""ExpressionAttributeValues":{":s":{"S":"SHIPPED"}}"#));
        assert!(!json.contains("AttributeUpdates"));
        assert!(!json.contains("null"));
    }

    #[test]
    fn test_should_return_update_item_fields_unchanged() {
        let input = UpdateItemInput::builder("Orders")
            .key("OrderId", "123")
            .update_expression("SET Status = :s")
            .expression_attribute_value(":s", "SHIPPED")
            .build()
            .unwrap();
        assert_eq!(input.table_name, "Orders");
        assert_eq!(input.key["OrderId"], AttributeValue::S("123".to_owned()));
        assert_eq!(input.update_expression.as_deref(), Some("SET Status = :s"));
        assert_eq!(
            input.expression_attribute_values[":s"],
            AttributeValue::S("SHIPPED".to_owned())
        );
    }

    #[test]
    fn test_should_build_update_item_with_legacy_parameters() {
        let input = UpdateItemInput::builder("Orders")
            .key("OrderId", "order-1")
            .attribute_update("Status", AttributeValueUpdate::put("SHIPPED".into()))
            .attribute_update("Draft", AttributeValueUpdate::delete())
            .expected(
                "Status",
                ExpectedAttributeValue {
                    value: Some("PENDING".into()),
                    ..Default::default()
                },
            )
            .build()
            .unwrap();
        assert_eq!(input.attribute_updates.len(), 2);
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""AttributeUpdates""#));
        assert!(json.contains(r#""Expected""#));
        assert!(!json.contains("UpdateExpression"));
    }

    #[test]
    fn test_should_reject_legacy_updates_mixed_with_update_expression() {
        let err = UpdateItemInput::builder("Orders")
            .key("OrderId", "order-1")
            .update_expression("SET Price = :p")
            .attribute_update("Price", AttributeValueUpdate::put(10_i64.into()))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::LegacyConflict {
                legacy: "AttributeUpdates",
                modern: "UpdateExpression",
            }
        );
    }

    #[test]
    fn test_should_reject_expected_mixed_with_condition_expression() {
        let err = DeleteItemInput::builder("Orders")
            .key("OrderId", "order-1")
            .condition_expression("attribute_exists(OrderId)")
            .expected(
                "OrderId",
                ExpectedAttributeValue {
                    exists: Some(true),
                    ..Default::default()
                },
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::LegacyConflict {
                legacy: "Expected",
                modern: "ConditionExpression",
            }
        );

        let err = PutItemInput::builder("Orders")
            .item("OrderId", "order-1")
            .condition_expression("attribute_not_exists(OrderId)")
            .conditional_operator(ConditionalOperator::And)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::LegacyConflict {
                legacy: "ConditionalOperator",
                modern: "ConditionExpression",
            }
        );
    }

    #[test]
    fn test_should_reject_projection_mixed_with_attributes_to_get() {
        let err = GetItemInput::builder("Orders")
            .key("OrderId", "order-1")
            .projection_expression("OrderId, Total")
            .attribute_to_get("Total")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::LegacyConflict {
                legacy: "AttributesToGet",
                modern: "ProjectionExpression",
            }
        );
    }

    #[test]
    fn test_should_require_table_name_and_key() {
        assert_eq!(
            GetItemInput::builder("").key("pk", "1").build().unwrap_err(),
            BuildError::MissingField("TableName")
        );
        assert_eq!(
            GetItemInput::builder("Orders").build().unwrap_err(),
            BuildError::MissingField("Key")
        );
        assert_eq!(
            PutItemInput::builder("Orders").build().unwrap_err(),
            BuildError::MissingField("Item")
        );
    }

    #[test]
    fn test_should_recover_with_clear_before_build() {
        let input = PutItemInput::builder("Orders")
            .item("OrderId", "order-1")
            .item("OrderId", "order-2")
            .clear_item()
            .item("OrderId", "order-3")
            .build()
            .unwrap();
        assert_eq!(
            input.item["OrderId"],
            AttributeValue::S("order-3".to_owned())
        );
    }

    #[test]
    fn test_should_roundtrip_delete_item_input() {
        let input = DeleteItemInput::builder("Orders")
            .key("OrderId", "order-1")
            .condition_expression("Total > :min")
            .expression_attribute_value(":min", 100_i64)
            .return_values(ReturnValue::AllOld)
            .build()
            .unwrap();
        let json = serde_json::to_string(&input).unwrap();
        let parsed: DeleteItemInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, input);
    }
}
