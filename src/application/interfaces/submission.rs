use crate::error::AppError;
use crate::model::options::SubmissionFilter;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for submission endpoints
#[async_trait]
pub trait SubmissionService: Send + Sync {
    /// Lists submissions matching a filter
    async fn get_submissions(
        &self,
        filter: &SubmissionFilter,
        fields: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AppError>;

    /// Gets one submission by id
    async fn get_submission(&self, id: u64, fields: &[&str]) -> Result<Value, AppError>;
}
