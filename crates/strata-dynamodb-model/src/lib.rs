//! Typed wire models for a DynamoDB-compatible table store.
//!
//! This crate is the payload layer of a client or server for the
//! DynamoDB JSON protocol (`awsJson1_0`): request ("input") and response
//! ("output") shapes, the `AttributeValue` union, legacy condition types,
//! and the table metadata aggregates. It deliberately contains no
//! transport, signing, retry, or pagination logic.
//!
//! Request values are assembled through consuming builders that validate
//! once at `build()` time (required fields, map-key uniqueness, condition
//! operand arity, key schema shape, legacy/expression exclusivity) and
//! produce values that are never mutated afterwards. Response values are
//! plain serde targets deserialized straight from the wire.
//!
//! Wire fidelity rules, applied everywhere:
//! - field names map 1:1 to the protocol's `PascalCase` keys;
//! - unset optional fields are omitted from the payload, never emitted as
//!   `null`, empty, or zero;
//! - choice-valued fields are closed enums whose string form appears only
//!   at the serde boundary (and in `as_str`/`FromStr`).
#![allow(clippy::module_name_repetitions)]

pub mod attribute_value;
mod builder;
pub mod condition;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod table;
pub mod types;

pub use attribute_value::AttributeValue;
pub use condition::{
    ComparisonOperator, Condition, ConditionBuilder, ConditionalOperator, OperandArity,
};
pub use error::{ApiError, ApiErrorCode, BuildError, InvalidEnumValue};
pub use operations::Operation;
pub use table::{TableDescription, TableDescriptionBuilder};
