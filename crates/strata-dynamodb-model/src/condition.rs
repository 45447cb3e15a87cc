//! Legacy comparison conditions.
//!
//! A [`Condition`] pairs a [`ComparisonOperator`] with an ordered operand
//! list and appears in the legacy `KeyConditions`, `QueryFilter`, and
//! `ScanFilter` request parameters. Each operator admits a fixed operand
//! count; [`ConditionBuilder::build`] checks the count (and, for
//! `BETWEEN`, operand type agreement) so that an ill-formed condition is
//! never put on the wire.

use serde::{Deserialize, Serialize};

use crate::attribute_value::AttributeValue;
use crate::error::BuildError;
use crate::types::wire_enum;

wire_enum! {
    /// Comparison applied by a legacy condition.
    ComparisonOperator {
        /// Equal.
        Eq => "EQ",
        /// Not equal.
        Ne => "NE",
        /// Contains (substring or set membership).
        Contains => "CONTAINS",
        /// Does not contain.
        NotContains => "NOT_CONTAINS",
        /// String prefix match.
        BeginsWith => "BEGINS_WITH",
        /// Equal to any listed operand.
        In => "IN",
        /// Less than or equal.
        Le => "LE",
        /// Less than.
        Lt => "LT",
        /// Greater than or equal.
        Ge => "GE",
        /// Greater than.
        Gt => "GT",
        /// Within an inclusive range.
        Between => "BETWEEN",
        /// Attribute is present.
        NotNull => "NOT_NULL",
        /// Attribute is absent.
        Null => "NULL",
    }
}

wire_enum! {
    /// How multiple legacy conditions combine.
    ConditionalOperator {
        /// All conditions must hold.
        And => "AND",
        /// At least one condition must hold.
        Or => "OR",
    }
}

impl Default for ConditionalOperator {
    fn default() -> Self {
        Self::And
    }
}

/// Operand count an operator admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandArity {
    /// No operands (`NULL`, `NOT_NULL`).
    Zero,
    /// Exactly one operand.
    One,
    /// Exactly two operands of the same value type (`BETWEEN`).
    TwoSameType,
    /// One or more operands (`IN`).
    AtLeastOne,
}

impl OperandArity {
    /// Returns `true` if `count` operands satisfy this arity.
    #[must_use]
    pub fn matches(&self, count: usize) -> bool {
        match self {
            Self::Zero => count == 0,
            Self::One => count == 1,
            Self::TwoSameType => count == 2,
            Self::AtLeastOne => count >= 1,
        }
    }

    fn expected(&self) -> &'static str {
        match self {
            Self::Zero => "no",
            Self::One => "exactly one",
            Self::TwoSameType => "exactly two",
            Self::AtLeastOne => "at least one",
        }
    }
}

impl ComparisonOperator {
    /// Returns the operand count this operator admits.
    #[must_use]
    pub fn operand_arity(&self) -> OperandArity {
        match self {
            Self::Null | Self::NotNull => OperandArity::Zero,
            Self::Eq
            | Self::Ne
            | Self::Le
            | Self::Lt
            | Self::Ge
            | Self::Gt
            | Self::Contains
            | Self::NotContains
            | Self::BeginsWith => OperandArity::One,
            Self::Between => OperandArity::TwoSameType,
            Self::In => OperandArity::AtLeastOne,
        }
    }
}

/// A validated legacy comparison: operator plus ordered operands.
///
/// Build one with [`Condition::builder`]; deserialized conditions are
/// accepted as-is, since the service re-validates whatever arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Condition {
    /// Operands, in the order they were supplied.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attribute_value_list: Vec<AttributeValue>,
    /// The comparison to evaluate.
    pub comparison_operator: ComparisonOperator,
}

impl Condition {
    /// Starts building a condition for the given operator.
    #[must_use]
    pub fn builder(operator: ComparisonOperator) -> ConditionBuilder {
        ConditionBuilder {
            operator,
            operands: Vec::new(),
        }
    }

    /// Shorthand for an `EQ` condition on a single value.
    pub fn eq(value: impl Into<AttributeValue>) -> Result<Self, BuildError> {
        Self::builder(ComparisonOperator::Eq)
            .operand(value)
            .build()
    }

    /// Shorthand for a `BETWEEN` condition over an inclusive range.
    pub fn between(
        low: impl Into<AttributeValue>,
        high: impl Into<AttributeValue>,
    ) -> Result<Self, BuildError> {
        Self::builder(ComparisonOperator::Between)
            .operand(low)
            .operand(high)
            .build()
    }
}

/// Consuming builder for [`Condition`].
///
/// Operands accumulate in call order. Nothing is checked until
/// [`build`](Self::build), which verifies the operand count against the
/// operator's arity and, for `BETWEEN`, that both bounds share a value
/// type.
#[derive(Debug, Clone)]
pub struct ConditionBuilder {
    operator: ComparisonOperator,
    operands: Vec<AttributeValue>,
}

impl ConditionBuilder {
    /// Appends one operand.
    #[must_use]
    pub fn operand(mut self, value: impl Into<AttributeValue>) -> Self {
        self.operands.push(value.into());
        self
    }

    /// Appends every operand from the iterator, preserving order.
    #[must_use]
    pub fn operands<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AttributeValue>,
    {
        self.operands.extend(values.into_iter().map(Into::into));
        self
    }

    /// Discards every operand accumulated so far.
    #[must_use]
    pub fn clear_operands(mut self) -> Self {
        self.operands.clear();
        self
    }

    /// Validates and produces the condition.
    ///
    /// # Errors
    ///
    /// [`BuildError::OperandArity`] if the operand count does not match
    /// the operator, and [`BuildError::OperandTypeMismatch`] if the two
    /// `BETWEEN` bounds carry different value types.
    pub fn build(self) -> Result<Condition, BuildError> {
        let arity = self.operator.operand_arity();
        if !arity.matches(self.operands.len()) {
            return Err(BuildError::OperandArity {
                operator: self.operator,
                expected: arity.expected(),
                actual: self.operands.len(),
            });
        }
        if self.operator == ComparisonOperator::Between && !self.operands[0].same_type(&self.operands[1]) {
            return Err(BuildError::OperandTypeMismatch {
                low: self.operands[0].type_descriptor(),
                high: self.operands[1].type_descriptor(),
            });
        }
        Ok(Condition {
            attribute_value_list: self.operands,
            comparison_operator: self.operator,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_build_between_condition_over_number_range() {
        let condition = Condition::between(1_i64, 10_i64).unwrap();
        assert_eq!(condition.comparison_operator, ComparisonOperator::Between);

        let json = serde_json::to_string(&condition).unwrap();
        assert_eq!(
            json,
            r#"{"AttributeValueList":[{"N":"1"},{"N":"10"}],"ComparisonOperator":"BETWEEN"}"#
        );
        let parsed: Condition = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, condition);
    }

    #[test]
    fn test_should_reject_wrong_operand_count() {
        let err = Condition::builder(ComparisonOperator::Eq).build().unwrap_err();
        assert_eq!(
            err,
            BuildError::OperandArity {
                operator: ComparisonOperator::Eq,
                expected: "exactly one",
                actual: 0,
            }
        );

        let err = Condition::builder(ComparisonOperator::Between)
            .operand(1_i64)
            .build()
            .unwrap_err();
        assert!(matches!(err, BuildError::OperandArity { actual: 1, .. }));

        let err = Condition::builder(ComparisonOperator::Null)
            .operand("x")
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::OperandArity {
                operator: ComparisonOperator::Null,
                ..
            }
        ));

        let err = Condition::builder(ComparisonOperator::In).build().unwrap_err();
        assert!(matches!(err, BuildError::OperandArity { actual: 0, .. }));
    }

    #[test]
    fn test_should_reject_mixed_type_between_bounds() {
        let err = Condition::builder(ComparisonOperator::Between)
            .operand(1_i64)
            .operand("10")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            BuildError::OperandTypeMismatch {
                low: "N",
                high: "S",
            }
        );
    }

    #[test]
    fn test_should_accept_zero_operand_existence_checks() {
        let condition = Condition::builder(ComparisonOperator::NotNull).build().unwrap();
        assert!(condition.attribute_value_list.is_empty());
        let json = serde_json::to_string(&condition).unwrap();
        assert_eq!(json, r#"{"ComparisonOperator":"NOT_NULL"}"#);
    }

    #[test]
    fn test_should_accept_multi_operand_in_list() {
        let condition = Condition::builder(ComparisonOperator::In)
            .operands(["a", "b", "c"])
            .build()
            .unwrap();
        assert_eq!(condition.attribute_value_list.len(), 3);
    }

    #[test]
    fn test_should_clear_accumulated_operands() {
        let condition = Condition::builder(ComparisonOperator::Eq)
            .operand("stale")
            .clear_operands()
            .operand("fresh")
            .build()
            .unwrap();
        assert_eq!(
            condition.attribute_value_list,
            vec![AttributeValue::S("fresh".to_owned())]
        );
    }

    #[test]
    fn test_should_treat_parsed_operator_same_as_symbolic() {
        let parsed: ComparisonOperator = "BEGINS_WITH".parse().unwrap();
        let from_string = Condition::builder(parsed).operand("prefix").build().unwrap();
        let symbolic = Condition::builder(ComparisonOperator::BeginsWith)
            .operand("prefix")
            .build()
            .unwrap();
        assert_eq!(from_string, symbolic);
        assert_eq!(
            serde_json::to_string(&from_string).unwrap(),
            serde_json::to_string(&symbolic).unwrap()
        );
    }

    #[test]
    fn test_should_expose_operand_arity_table() {
        assert_eq!(ComparisonOperator::Null.operand_arity(), OperandArity::Zero);
        assert_eq!(ComparisonOperator::NotNull.operand_arity(), OperandArity::Zero);
        assert_eq!(ComparisonOperator::Gt.operand_arity(), OperandArity::One);
        assert_eq!(ComparisonOperator::Contains.operand_arity(), OperandArity::One);
        assert_eq!(
            ComparisonOperator::Between.operand_arity(),
            OperandArity::TwoSameType
        );
        assert_eq!(ComparisonOperator::In.operand_arity(), OperandArity::AtLeastOne);
        assert!(OperandArity::AtLeastOne.matches(7));
        assert!(!OperandArity::TwoSameType.matches(3));
    }
}
