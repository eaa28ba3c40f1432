use crate::value::ValueFamily;
use thiserror::Error as ThisError;

///
/// ConstructError
///
/// Structured failures raised while building or updating a record.
/// Validation hook errors never pass through this type; they reach the
/// caller as the hook returned them.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[remain::sorted]
pub enum ConstructError {
    #[error("duplicate input key '{key}' for {record}")]
    DuplicateKey { record: &'static str, key: String },

    #[error("field '{field}' of {record} expects {expected}, found {actual}")]
    FieldType {
        record: &'static str,
        field: &'static str,
        expected: ValueFamily,
        actual: ValueFamily,
    },

    #[error("invalid construction input: {message}")]
    InvalidInput { message: String },

    #[error("missing required field '{field}' for {record}")]
    MissingRequiredField {
        record: &'static str,
        field: &'static str,
    },

    #[error("unknown field '{key}' for {record}")]
    UnknownField { record: &'static str, key: String },
}

impl ConstructError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Record path the failure belongs to, when known.
    #[must_use]
    pub const fn record(&self) -> Option<&'static str> {
        match self {
            Self::DuplicateKey { record, .. }
            | Self::FieldType { record, .. }
            | Self::MissingRequiredField { record, .. }
            | Self::UnknownField { record, .. } => Some(*record),
            Self::InvalidInput { .. } => None,
        }
    }

    /// Declared field the failure is about, when one was resolved.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::FieldType { field, .. } | Self::MissingRequiredField { field, .. } => {
                Some(*field)
            }
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_missing_required(&self) -> bool {
        matches!(self, Self::MissingRequiredField { .. })
    }
}
