use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the problem set endpoints of the authenticated user
#[async_trait]
pub trait SetService: Send + Sync {
    /// Lists the sets of the user
    async fn get_sets(
        &self,
        fields: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AppError>;

    /// Creates a set
    async fn create_set(&self, set_name: &str, description: Option<&str>)
    -> Result<Value, AppError>;

    /// Renames a set and/or changes its description
    async fn update_set(
        &self,
        set_name: &str,
        new_set_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Deletes a set
    async fn delete_set(&self, set_name: &str) -> Result<Value, AppError>;

    /// Lists the problems of a set
    async fn get_set_problems(
        &self,
        set_name: &str,
        fields: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AppError>;

    /// Adds problems to a set
    ///
    /// `problem_codes` and `contest_codes` are each sent as one comma separated value.
    async fn add_problems_to_set(
        &self,
        set_name: &str,
        problem_codes: &[&str],
        contest_codes: &[&str],
    ) -> Result<Value, AppError>;

    /// Removes problems from a set
    async fn remove_problems_from_set(
        &self,
        set_name: &str,
        problem_codes: &[&str],
        contest_codes: &[&str],
    ) -> Result<Value, AppError>;
}
