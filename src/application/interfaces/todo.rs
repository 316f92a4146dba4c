use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the todo list of the authenticated user
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Lists the problems in the todo list
    async fn get_todo_problems(&self, fields: &[&str]) -> Result<Value, AppError>;

    /// Adds a problem to the todo list
    async fn add_todo_problem(
        &self,
        problem_code: &str,
        contest_code: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Removes a problem from the todo list
    async fn remove_todo_problem(
        &self,
        problem_code: &str,
        contest_code: Option<&str>,
    ) -> Result<Value, AppError>;

    /// Empties the todo list
    async fn clear_todo(&self) -> Result<Value, AppError>;
}
