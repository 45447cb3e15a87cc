//! Error types for the model layer.
//!
//! Two failure families exist at this layer:
//!
//! - [`BuildError`]: local, synchronous failures raised while a request
//!   value is being assembled (missing required fields, duplicate map
//!   keys, condition operand arity, key schema shape). These never leave
//!   the process.
//! - [`ApiError`]: service-side failures as they appear on the wire, with
//!   the fully-qualified `__type` identifier and an associated HTTP
//!   status. Producing or parsing the HTTP envelope itself is the
//!   transport layer's job.

use std::fmt;

use crate::condition::ComparisonOperator;

/// A string that does not name any value of a closed wire enum.
///
/// Returned by the `FromStr` impls on enum types such as
/// [`ComparisonOperator`] and [`crate::types::ReturnValue`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {expected} value: {value:?}")]
pub struct InvalidEnumValue {
    /// Name of the enum the string was parsed as.
    pub expected: &'static str,
    /// The rejected input.
    pub value: String,
}

/// A request value failed validation while being built.
///
/// Raised only by the terminal `build()` call of the request builders; a
/// failed build produces no value, so a partially-validated request can
/// never be observed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// A required field was never set or was set to an empty value.
    #[error("required field {0} is missing or empty")]
    MissingField(&'static str),

    /// The same key was added twice to a single-valued map field.
    #[error("duplicate key {key:?} in {field}")]
    DuplicateKey {
        /// Wire name of the map field.
        field: &'static str,
        /// The key that was added more than once.
        key: String,
    },

    /// A condition's operand count does not match its operator.
    #[error("{operator} requires {expected} operand(s), got {actual}")]
    OperandArity {
        /// The operator whose arity was violated.
        operator: ComparisonOperator,
        /// Human-readable description of the required count.
        expected: &'static str,
        /// The number of operands supplied.
        actual: usize,
    },

    /// The two BETWEEN operands carry different value types.
    #[error("BETWEEN operands must share a value type, got {low} and {high}")]
    OperandTypeMismatch {
        /// Type descriptor of the lower bound.
        low: &'static str,
        /// Type descriptor of the upper bound.
        high: &'static str,
    },

    /// A key schema violates the one-HASH / at-most-one-RANGE rule.
    #[error("invalid key schema: {0}")]
    KeySchema(String),

    /// A legacy parameter was combined with its expression replacement.
    #[error("legacy parameter {legacy} cannot be combined with {modern}")]
    LegacyConflict {
        /// Wire name of the legacy parameter.
        legacy: &'static str,
        /// Wire name of the expression-based parameter.
        modern: &'static str,
    },

    /// A cross-field parameter constraint was violated.
    #[error("invalid parameter: {0}")]
    Parameter(String),

    /// A string did not parse as a closed enum value.
    #[error(transparent)]
    InvalidEnumValue(#[from] InvalidEnumValue),
}

/// Well-known service error codes.
///
/// Each code carries the fully-qualified `__type` string used in the JSON
/// error body and a default HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ApiErrorCode {
    /// The named resource already exists or is being modified.
    ResourceInUse,
    /// The named table or index does not exist.
    ResourceNotFound,
    /// A condition expression evaluated to false.
    ConditionalCheckFailed,
    /// An item collection grew past the LSI size limit.
    ItemCollectionSizeLimitExceeded,
    /// The request rate exceeds the provisioned throughput.
    ProvisionedThroughputExceeded,
    /// The request was throttled.
    Throttling,
    /// The account-level request limit was exceeded.
    RequestLimitExceeded,
    /// The request payload failed server-side validation.
    #[default]
    Validation,
    /// The request body could not be parsed.
    Serialization,
    /// The service encountered an internal error.
    InternalServerError,
    /// The caller is not authorized for the operation.
    AccessDenied,
}

impl ApiErrorCode {
    /// Returns the fully-qualified `__type` string for the JSON error body.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::ResourceInUse => "com.amazonaws.dynamodb.v20120810#ResourceInUseException",
            Self::ResourceNotFound => "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException",
            Self::ConditionalCheckFailed => {
                "com.amazonaws.dynamodb.v20120810#ConditionalCheckFailedException"
            }
            Self::ItemCollectionSizeLimitExceeded => {
                "com.amazonaws.dynamodb.v20120810#ItemCollectionSizeLimitExceededException"
            }
            Self::ProvisionedThroughputExceeded => {
                "com.amazonaws.dynamodb.v20120810#ProvisionedThroughputExceededException"
            }
            Self::Throttling => "com.amazonaws.dynamodb.v20120810#ThrottlingException",
            Self::RequestLimitExceeded => "com.amazonaws.dynamodb.v20120810#RequestLimitExceeded",
            Self::Validation => "com.amazon.coral.validate#ValidationException",
            Self::Serialization => "com.amazonaws.dynamodb.v20120810#SerializationException",
            Self::InternalServerError => "com.amazonaws.dynamodb.v20120810#InternalServerError",
            Self::AccessDenied => "com.amazonaws.dynamodb.v20120810#AccessDeniedException",
        }
    }

    /// Returns the short error code, i.e. the part after `#`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ResourceInUse => "ResourceInUseException",
            Self::ResourceNotFound => "ResourceNotFoundException",
            Self::ConditionalCheckFailed => "ConditionalCheckFailedException",
            Self::ItemCollectionSizeLimitExceeded => "ItemCollectionSizeLimitExceededException",
            Self::ProvisionedThroughputExceeded => "ProvisionedThroughputExceededException",
            Self::Throttling => "ThrottlingException",
            Self::RequestLimitExceeded => "RequestLimitExceeded",
            Self::Validation => "ValidationException",
            Self::Serialization => "SerializationException",
            Self::InternalServerError => "InternalServerError",
            Self::AccessDenied => "AccessDeniedException",
        }
    }

    /// Returns the HTTP status the service sends for this code.
    #[must_use]
    pub fn status_code(&self) -> http::StatusCode {
        match self {
            Self::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service error response.
#[derive(Debug, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// The error code.
    pub code: ApiErrorCode,
    /// Human-readable message from the service.
    pub message: String,
    /// The HTTP status the error was (or should be) carried with.
    pub status_code: http::StatusCode,
    /// The underlying cause, if any.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl ApiError {
    /// Creates an error with the code's short name as its message.
    #[must_use]
    pub fn new(code: ApiErrorCode) -> Self {
        Self {
            status_code: code.status_code(),
            message: code.as_str().to_owned(),
            code,
            source: None,
        }
    }

    /// Creates an error with a custom message.
    #[must_use]
    pub fn with_message(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Attaches the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the `__type` string for the JSON error body.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        self.code.error_type()
    }

    /// Named resource does not exist.
    #[must_use]
    pub fn resource_not_found(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::ResourceNotFound, message)
    }

    /// Named resource already exists or is in a transitional state.
    #[must_use]
    pub fn resource_in_use(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::ResourceInUse, message)
    }

    /// Condition expression evaluated to false.
    #[must_use]
    pub fn conditional_check_failed(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::ConditionalCheckFailed, message)
    }

    /// Request was throttled.
    #[must_use]
    pub fn throttling(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::Throttling, message)
    }

    /// Request failed server-side validation.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::Validation, message)
    }

    /// Internal service failure.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(ApiErrorCode::InternalServerError, message)
    }
}

/// Creates an [`ApiError`] from a code, with an optional message.
///
/// # Examples
///
/// ```
/// use strata_dynamodb_model::{api_error, ApiErrorCode};
///
/// let err = api_error!(Validation);
/// assert_eq!(err.code, ApiErrorCode::Validation);
///
/// let err = api_error!(ResourceNotFound, "Requested resource not found: Table: Orders");
/// assert!(err.message.contains("Orders"));
/// ```
#[macro_export]
macro_rules! api_error {
    ($code:ident) => {
        $crate::error::ApiError::new($crate::error::ApiErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::ApiError::with_message($crate::error::ApiErrorCode::$code, $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_expose_fully_qualified_error_types() {
        assert_eq!(
            ApiErrorCode::ResourceNotFound.error_type(),
            "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException"
        );
        assert_eq!(
            ApiErrorCode::ConditionalCheckFailed.error_type(),
            "com.amazonaws.dynamodb.v20120810#ConditionalCheckFailedException"
        );
        assert_eq!(
            ApiErrorCode::Validation.error_type(),
            "com.amazon.coral.validate#ValidationException"
        );
        assert_eq!(
            ApiErrorCode::Throttling.error_type(),
            "com.amazonaws.dynamodb.v20120810#ThrottlingException"
        );
    }

    #[test]
    fn test_should_map_codes_to_http_status() {
        assert_eq!(
            ApiErrorCode::InternalServerError.status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiErrorCode::ConditionalCheckFailed.status_code(),
            http::StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiErrorCode::Throttling.status_code(),
            http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_should_build_error_via_macro() {
        let err = api_error!(ConditionalCheckFailed, "The conditional request failed");
        assert_eq!(err.code, ApiErrorCode::ConditionalCheckFailed);
        assert_eq!(err.message, "The conditional request failed");
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_should_display_build_errors_with_context() {
        let err = BuildError::DuplicateKey {
            field: "ExpressionAttributeValues",
            key: ":s".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate key \":s\" in ExpressionAttributeValues"
        );

        let err = BuildError::LegacyConflict {
            legacy: "AttributeUpdates",
            modern: "UpdateExpression",
        };
        assert!(err.to_string().contains("AttributeUpdates"));
        assert!(err.to_string().contains("UpdateExpression"));
    }

    #[test]
    fn test_should_carry_source_error() {
        let cause = serde_json::from_str::<i32>("not json").unwrap_err();
        let err = ApiError::new(ApiErrorCode::Serialization).with_source(cause);
        assert!(std::error::Error::source(&err).is_some());
    }
}
