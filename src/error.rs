//! Error types for schema acceptance

use thiserror::Error;

/// Reasons an edited schema document is not committed to the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// Text is not syntactically valid JSON
    #[error("{message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// Valid JSON that does not have the shape of a form schema
    #[error("Invalid form schema: {0}")]
    Shape(String),

    /// Two or more fields share the same id
    #[error("Duplicate field id: {0}")]
    DuplicateFieldId(String),

    /// A text/email field carries a pattern that does not compile. Reported
    /// as a warning on the form plan; the schema is still committed.
    #[error("Invalid pattern for field '{field}': {reason}")]
    InvalidPattern { field: String, reason: String },
}

impl SchemaError {
    /// Builds a syntax error carrying the fixed indicator message and the
    /// parser's position
    pub fn syntax(message: impl Into<String>, err: &serde_json::Error) -> Self {
        SchemaError::Syntax {
            message: message.into(),
            line: err.line(),
            column: err.column(),
        }
    }

    /// Line/column of a syntax error, if this is one
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            SchemaError::Syntax { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::Shape(err.to_string())
    }
}

/// Result type alias for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Returned by a submit attempt when at least one field fails its rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Submission blocked: {} field(s) failed validation", .failing.len())]
pub struct SubmitBlocked {
    /// Ids of the failing fields, in display order
    pub failing: Vec<String>,
}
