use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform failure shape `{"success": false, "error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// Always false
    pub success: bool,
    /// Description of the failure
    pub error: String,
}

impl ErrorRecord {
    /// Creates a failure record with the given description
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    /// JSON form of the record
    pub fn to_value(&self) -> Value {
        serde_json::json!({ "success": self.success, "error": self.error })
    }
}

impl From<&AppError> for ErrorRecord {
    fn from(error: &AppError) -> Self {
        ErrorRecord::new(error.to_string())
    }
}

impl From<AppError> for ErrorRecord {
    fn from(error: AppError) -> Self {
        ErrorRecord::from(&error)
    }
}

/// Folds a dispatcher result into a single JSON value
///
/// Successful bodies pass through unchanged, failures become an [`ErrorRecord`].
pub fn into_json(result: Result<Value, AppError>) -> Value {
    match result {
        Ok(value) => value,
        Err(e) => ErrorRecord::from(&e).to_value(),
    }
}
