//! `Query` and `Scan` request shapes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;
use crate::builder;
use crate::condition::{Condition, ConditionalOperator};
use crate::error::BuildError;
use crate::types::{
    ExpressionAttributeNames, ExpressionAttributeValues, Key, ReturnConsumedCapacity, Select,
};

/// Input for the `Query` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryInput {
    /// Name of the target table.
    pub table_name: String,

    /// Index to query instead of the base table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,

    /// Key condition, e.g. `UserId = :u AND Ts BETWEEN :a AND :b`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_condition_expression: Option<String>,

    /// Filter applied after the key condition, before returning items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,

    /// Attributes to return; absent means all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,

    /// Placeholder substitutions for attribute names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,

    /// Placeholder substitutions for attribute values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: ExpressionAttributeValues,

    /// Legacy per-attribute key conditions.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub key_conditions: HashMap<String, Condition>,

    /// Legacy per-attribute result filter.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub query_filter: HashMap<String, Condition>,

    /// How multiple legacy filter conditions combine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,

    /// Legacy list of attribute names to return.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,

    /// Which attribute set to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,

    /// Maximum number of items to evaluate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// Whether to read with strong consistency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,

    /// Sort-key traversal order; `false` for descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_index_forward: Option<bool>,

    /// Key to resume from, taken from a previous page's
    /// `LastEvaluatedKey`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub exclusive_start_key: Key,

    /// Consumed-capacity detail to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl QueryInput {
    /// Starts building a `Query` request for the named table.
    #[must_use]
    pub fn builder(table_name: impl Into<String>) -> QueryInputBuilder {
        QueryInputBuilder {
            input: QueryInput {
                table_name: table_name.into(),
                ..QueryInput::default()
            },
            key_conditions: Vec::new(),
            query_filter: Vec::new(),
            expression_attribute_names: Vec::new(),
            expression_attribute_values: Vec::new(),
            exclusive_start_key: Vec::new(),
        }
    }
}

/// Consuming builder for [`QueryInput`].
#[derive(Debug, Clone)]
pub struct QueryInputBuilder {
    input: QueryInput,
    key_conditions: Vec<(String, Condition)>,
    query_filter: Vec<(String, Condition)>,
    expression_attribute_names: Vec<(String, String)>,
    expression_attribute_values: Vec<(String, AttributeValue)>,
    exclusive_start_key: Vec<(String, AttributeValue)>,
}

impl QueryInputBuilder {
    /// Targets an index instead of the base table.
    #[must_use]
    pub fn index_name(mut self, name: impl Into<String>) -> Self {
        self.input.index_name = Some(name.into());
        self
    }

    /// Sets the key condition expression.
    #[must_use]
    pub fn key_condition_expression(mut self, expression: impl Into<String>) -> Self {
        self.input.key_condition_expression = Some(expression.into());
        self
    }

    /// Sets the filter expression.
    #[must_use]
    pub fn filter_expression(mut self, expression: impl Into<String>) -> Self {
        self.input.filter_expression = Some(expression.into());
        self
    }

    /// Sets the projection expression.
    #[must_use]
    pub fn projection_expression(mut self, expression: impl Into<String>) -> Self {
        self.input.projection_expression = Some(expression.into());
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

    /// Adds one legacy key condition.
    #[must_use]
    pub fn key_condition(
        mut self,
        attribute_name: impl Into<String>,
        condition: Condition,
    ) -> Self {
        self.key_conditions.push((attribute_name.into(), condition));
        self
    }

    /// Discards every legacy key condition accumulated so far.
    #[must_use]
    pub fn clear_key_conditions(mut self) -> Self {
        self.key_conditions.clear();
        self
    }

    /// Adds one legacy filter condition.
    #[must_use]
    pub fn query_filter(
        mut self,
        attribute_name: impl Into<String>,
        condition: Condition,
    ) -> Self {
        self.query_filter.push((attribute_name.into(), condition));
        self
    }

    /// Sets how multiple legacy filter conditions combine.
    #[must_use]
    pub fn conditional_operator(mut self, operator: ConditionalOperator) -> Self {
        self.input.conditional_operator = Some(operator);
        self
    }

    /// Appends one legacy attribute name to return.
    #[must_use]
    pub fn attribute_to_get(mut self, name: impl Into<String>) -> Self {
        self.input.attributes_to_get.push(name.into());
        self
    }

    /// Sets which attribute set to return.
    #[must_use]
    pub fn select(mut self, select: Select) -> Self {
        self.input.select = Some(select);
        self
    }

    /// Caps the number of items evaluated.
    #[must_use]
    pub fn limit(mut self, limit: i32) -> Self {
        self.input.limit = Some(limit);
        self
    }

    /// Sets whether to read with strong consistency.
    #[must_use]
    pub fn consistent_read(mut self, consistent: bool) -> Self {
        self.input.consistent_read = Some(consistent);
        self
    }

    /// Sets the sort-key traversal order.
    #[must_use]
    pub fn scan_index_forward(mut self, forward: bool) -> Self {
        self.input.scan_index_forward = Some(forward);
        self
    }

    /// Adds one attribute of the key to resume from.
    #[must_use]
    pub fn exclusive_start_key(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.exclusive_start_key.push((name.into(), value.into()));
        self
    }

    /// Sets the consumed-capacity detail to report.
    #[must_use]
    pub fn return_consumed_capacity(mut self, capacity: ReturnConsumedCapacity) -> Self {
        self.input.return_consumed_capacity = Some(capacity);
        self
    }

    /// Validates and produces the request.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MissingField`] if the table name is empty.
    /// - [`BuildError::Parameter`] if no key condition was supplied in
    ///   either form, or the limit is not positive.
    /// - [`BuildError::DuplicateKey`] for repeated map entries.
    /// - [`BuildError::LegacyConflict`] if `KeyConditions`, `QueryFilter`,
    ///   or `AttributesToGet` is combined with its expression
    ///   replacement.
    pub fn build(mut self) -> Result<QueryInput, BuildError> {
        builder::require_name("TableName", Some(self.input.table_name.clone()))?;
        if self.input.key_condition_expression.is_none() && self.key_conditions.is_empty() {
            return Err(BuildError::Parameter(
                "a key condition is required, via KeyConditionExpression or KeyConditions"
                    .to_owned(),
            ));
        }
        if self.input.key_condition_expression.is_some() && !self.key_conditions.is_empty() {
            return Err(BuildError::LegacyConflict {
                legacy: "KeyConditions",
                modern: "KeyConditionExpression",
            });
        }
        if self.input.filter_expression.is_some() && !self.query_filter.is_empty() {
            return Err(BuildError::LegacyConflict {
                legacy: "QueryFilter",
                modern: "FilterExpression",
            });
        }
        if self.input.projection_expression.is_some() && !self.input.attributes_to_get.is_empty() {
            return Err(BuildError::LegacyConflict {
                legacy: "AttributesToGet",
                modern: "ProjectionExpression",
            });
        }
        if let Some(limit) = self.input.limit
            && limit <= 0
        {
            return Err(BuildError::Parameter(format!(
                "Limit must be positive, got {limit}"
            )));
        }
        self.input.key_conditions = builder::into_unique_map("KeyConditions", self.key_conditions)?;
        self.input.query_filter = builder::into_unique_map("QueryFilter", self.query_filter)?;
        self.input.expression_attribute_names = builder::into_unique_map(
            "ExpressionAttributeNames",
            self.expression_attribute_names,
        )?;
        self.input.expression_attribute_values = builder::into_unique_map(
            "ExpressionAttributeValues",
            self.expression_attribute_values,
        )?;
        self.input.exclusive_start_key =
            builder::into_unique_map("ExclusiveStartKey", self.exclusive_start_key)?;
        Ok(self.input)
    }
}

/// Input for the `Scan` operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScanInput {
    /// Name of the target table.
    pub table_name: String,

    /// Index to scan instead of the base table.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_name: Option<String>,

    /// Filter applied before returning items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_expression: Option<String>,

    /// Attributes to return; absent means all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projection_expression: Option<String>,

    /// Placeholder substitutions for attribute names.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_names: ExpressionAttributeNames,

    /// Placeholder substitutions for attribute values.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub expression_attribute_values: ExpressionAttributeValues,

    /// Legacy per-attribute result filter.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub scan_filter: HashMap<String, Condition>,

    /// How multiple legacy filter conditions combine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditional_operator: Option<ConditionalOperator>,

    /// Legacy list of attribute names to return.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes_to_get: Vec<String>,

    /// Which attribute set to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub select: Option<Select>,

    /// Maximum number of items to evaluate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// Whether to read with strong consistency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,

    /// Key to resume from, taken from a previous page's
    /// `LastEvaluatedKey`.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub exclusive_start_key: Key,

    /// Number of parallel-scan workers; set together with `Segment`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_segments: Option<i32>,

    /// This worker's segment, in `0..TotalSegments`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<i32>,

    /// Consumed-capacity detail to report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_consumed_capacity: Option<ReturnConsumedCapacity>,
}

impl ScanInput {
    /// Starts building a `Scan` request for the named table.
    #[must_use]
    pub fn builder(table_name: impl Into<String>) -> ScanInputBuilder {
        ScanInputBuilder {
            input: ScanInput {
                table_name: table_name.into(),
                ..ScanInput::default()
            },
            scan_filter: Vec::new(),
            expression_attribute_names: Vec::new(),
            expression_attribute_values: Vec::new(),
            exclusive_start_key: Vec::new(),
        }
    }
}

/// Consuming builder for [`ScanInput`].
#[derive(Debug, Clone)]
pub struct ScanInputBuilder {
    input: ScanInput,
    scan_filter: Vec<(String, Condition)>,
    expression_attribute_names: Vec<(String, String)>,
    expression_attribute_values: Vec<(String, AttributeValue)>,
    exclusive_start_key: Vec<(String, AttributeValue)>,
}

impl ScanInputBuilder {
    /// Targets an index instead of the base table.
    #[must_use]
    pub fn index_name(mut self, name: impl Into<String>) -> Self {
        self.input.index_name = Some(name.into());
        self
    }

    /// Sets the filter expression.
    #[must_use]
    pub fn filter_expression(mut self, expression: impl Into<String>) -> Self {
        self.input.filter_expression = Some(expression.into());
        self
    }

    /// Sets the projection expression.
    #[must_use]
    pub fn projection_expression(mut self, expression: impl Into<String>) -> Self {
        self.input.projection_expression = Some(expression.into());
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

    /// Adds one legacy filter condition.
    #[must_use]
    pub fn scan_filter(
        mut self,
        attribute_name: impl Into<String>,
        condition: Condition,
    ) -> Self {
        self.scan_filter.push((attribute_name.into(), condition));
        self
    }

    /// Sets how multiple legacy filter conditions combine.
    #[must_use]
    pub fn conditional_operator(mut self, operator: ConditionalOperator) -> Self {
        self.input.conditional_operator = Some(operator);
        self
    }

    /// Appends one legacy attribute name to return.
    #[must_use]
    pub fn attribute_to_get(mut self, name: impl Into<String>) -> Self {
        self.input.attributes_to_get.push(name.into());
        self
    }

    /// Sets which attribute set to return.
    #[must_use]
    pub fn select(mut self, select: Select) -> Self {
        self.input.select = Some(select);
        self
    }

    /// Caps the number of items evaluated.
    #[must_use]
    pub fn limit(mut self, limit: i32) -> Self {
        self.input.limit = Some(limit);
        self
    }

    /// Sets whether to read with strong consistency.
    #[must_use]
    pub fn consistent_read(mut self, consistent: bool) -> Self {
        self.input.consistent_read = Some(consistent);
        self
    }

    /// Adds one attribute of the key to resume from.
    #[must_use]
    pub fn exclusive_start_key(
        mut self,
        name: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.exclusive_start_key.push((name.into(), value.into()));
        self
    }

    /// Configures this worker's slice of a parallel scan.
    #[must_use]
    pub fn parallel_scan(mut self, segment: i32, total_segments: i32) -> Self {
        self.input.segment = Some(segment);
        self.input.total_segments = Some(total_segments);
        self
    }

    /// Sets the consumed-capacity detail to report.
    #[must_use]
    pub fn return_consumed_capacity(mut self, capacity: ReturnConsumedCapacity) -> Self {
        self.input.return_consumed_capacity = Some(capacity);
        self
    }

    /// Validates and produces the request.
    ///
    /// # Errors
    ///
    /// Same legacy-conflict and map-uniqueness rules as
    /// [`QueryInputBuilder::build`], plus [`BuildError::Parameter`] when
    /// `Segment`/`TotalSegments` are set alone or out of range.
    pub fn build(mut self) -> Result<ScanInput, BuildError> {
        builder::require_name("TableName", Some(self.input.table_name.clone()))?;
        if self.input.filter_expression.is_some() && !self.scan_filter.is_empty() {
            return Err(BuildError::LegacyConflict {
                legacy: "ScanFilter",
                modern: "FilterExpression",
            });
        }
        if self.input.projection_expression.is_some() && !self.input.attributes_to_get.is_empty() {
            return Err(BuildError::LegacyConflict {
                legacy: "AttributesToGet",
                modern: "ProjectionExpression",
            });
        }
        if let Some(limit) = self.input.limit
            && limit <= 0
        {
            return Err(BuildError::Parameter(format!(
                "Limit must be positive, got {limit}"
            )));
        }
        match (self.input.segment, self.input.total_segments) {
            (None, None) => {}
            (Some(_), None) => {
                return Err(BuildError::Parameter(
                    "Segment requires TotalSegments".to_owned(),
                ));
            }
            (None, Some(_)) => {
                return Err(BuildError::Parameter(
                    "TotalSegments requires Segment".to_owned(),
                ));
            }
            (Some(segment), Some(total)) => {
                if total < 1 {
                    return Err(BuildError::Parameter(format!(
                        "TotalSegments must be at least 1, got {total}"
                    )));
                }
                if segment < 0 || segment >= total {
                    return Err(BuildError::Parameter(format!(
                        "Segment must be in 0..{total}, got {segment}"
                    )));
                }
            }
        }
        self.input.scan_filter = builder::into_unique_map("ScanFilter", self.scan_filter)?;
        self.input.expression_attribute_names = builder::into_unique_map(
            "ExpressionAttributeNames",
            self.expression_attribute_names,
        )?;
        self.input.expression_attribute_values = builder::into_unique_map(
            "ExpressionAttributeValues",
            self.expression_attribute_values,
        )?;
        self.input.exclusive_start_key =
            builder::into_unique_map("ExclusiveStartKey", self.exclusive_start_key)?;
        Ok(self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::ComparisonOperator;

    #[test]
    fn test_should_build_query_with_expression_parameters() {
        let input = QueryInput::builder("Sessions")
            .key_condition_expression("UserId = :u AND Ts BETWEEN :a AND :b")
            .expression_attribute_value(":u", "user-1")
            .expression_attribute_value(":a", 100_i64)
            .expression_attribute_value(":b", 200_i64)
            .scan_index_forward(false)
            .limit(25)
            .build()
            .unwrap();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""KeyConditionExpression":"UserId = :u AND Ts BETWEEN :a AND :b""#));
        assert!(json.contains(r#""ScanIndexForward":false"#));
        assert!(json.contains(r#""Limit":25"#));
        assert!(!json.contains("KeyConditions\""));
    }

    #[test]
    fn test_should_build_query_with_legacy_key_conditions() {
        let input = QueryInput::builder("Sessions")
            .key_condition("UserId", Condition::eq("user-1").unwrap())
            .key_condition("Ts", Condition::between(100_i64, 200_i64).unwrap())
            .build()
            .unwrap();
        assert_eq!(input.key_conditions.len(), 2);
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""ComparisonOperator":"BETWEEN""#));
    }

    #[test]
    fn test_should_require_a_key_condition() {
        let err = QueryInput::builder("Sessions").build().unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));
    }

    #[test]
    fn test_should_reject_both_key_condition_forms() {
        let err = QueryInput::builder("Sessions")
            .key_condition_expression("UserId = :u")
            .key_condition("UserId", Condition::eq("user-1").unwrap())
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::LegacyConflict {
                legacy: "KeyConditions",
                modern: "KeyConditionExpression",
            }
        );
    }

    #[test]
    fn test_should_reject_query_filter_with_filter_expression() {
        let err = QueryInput::builder("Sessions")
            .key_condition_expression("UserId = :u")
            .filter_expression("Active = :a")
            .query_filter(
                "Active",
                Condition::builder(ComparisonOperator::NotNull).build().unwrap(),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::LegacyConflict {
                legacy: "QueryFilter",
                modern: "FilterExpression",
            }
        );
    }

    #[test]
    fn test_should_reject_non_positive_limit() {
        let err = QueryInput::builder("Sessions")
            .key_condition_expression("UserId = :u")
            .limit(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));
    }

    #[test]
    fn test_should_build_scan_with_filter_and_pagination() {
        let input = ScanInput::builder("Sessions")
            .filter_expression("Ts > :cutoff")
            .expression_attribute_value(":cutoff", 100_i64)
            .exclusive_start_key("UserId", "user-5")
            .limit(100)
            .build()
            .unwrap();
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""FilterExpression":"Ts > :cutoff""#));
        assert!(json.contains(r#""ExclusiveStartKey":{"UserId":{"S":"user-5"}}"#));
    }

    #[test]
    fn test_should_pair_parallel_scan_segments() {
        let input = ScanInput::builder("Sessions")
            .parallel_scan(3, 8)
            .build()
            .unwrap();
        assert_eq!(input.segment, Some(3));
        assert_eq!(input.total_segments, Some(8));

        let mut half_set = ScanInput::builder("Sessions").parallel_scan(0, 4);
        half_set.input.total_segments = None;
        assert!(matches!(
            half_set.build().unwrap_err(),
            BuildError::Parameter(_)
        ));

        let err = ScanInput::builder("Sessions")
            .parallel_scan(8, 8)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));

        let err = ScanInput::builder("Sessions")
            .parallel_scan(-1, 8)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::Parameter(_)));
    }

    #[test]
    fn test_should_reject_scan_filter_with_filter_expression() {
        let err = ScanInput::builder("Sessions")
            .filter_expression("Active = :a")
            .scan_filter(
                "Active",
                Condition::builder(ComparisonOperator::Null).build().unwrap(),
            )
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::LegacyConflict {
                legacy: "ScanFilter",
                modern: "FilterExpression",
            }
        );
    }

    #[test]
    fn test_should_roundtrip_scan_input() {
        let input = ScanInput::builder("Sessions")
            .scan_filter("Ts", Condition::between(1_i64, 10_i64).unwrap())
            .conditional_operator(ConditionalOperator::And)
            .select(Select::Count)
            .build()
            .unwrap();
        let json = serde_json::to_string(&input).unwrap();
        let parsed: ScanInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, input);
    }
}
