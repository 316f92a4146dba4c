use crate::error::AppError;
use crate::model::options::ListOptions;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for practice problem and tag endpoints
#[async_trait]
pub trait ProblemService: Send + Sync {
    /// Lists practice problems of a category
    ///
    /// # Arguments
    /// * `category` - One of "school", "easy", "medium", "hard", "challenge" or "extcontest"
    /// * `options` - Fields, paging and sorting
    async fn get_problems(&self, category: &str, options: &ListOptions)
    -> Result<Value, AppError>;

    /// Lists problem tags
    async fn get_problem_tags(
        &self,
        filter: Option<&str>,
        fields: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AppError>;
}
