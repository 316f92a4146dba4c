use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the online IDE
#[async_trait]
pub trait IdeService: Send + Sync {
    /// Submits code to run; the response carries a link to poll
    async fn run_code(&self, source_code: &str, language: &str, input: &str)
    -> Result<Value, AppError>;

    /// Gets the status and output of a run
    async fn get_run_status(&self, link: &str) -> Result<Value, AppError>;
}
