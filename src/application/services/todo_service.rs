use crate::application::interfaces::todo::TodoService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::query::QueryParams;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

#[async_trait]
impl TodoService for Client {
    async fn get_todo_problems(&self, fields: &[&str]) -> Result<Value, AppError> {
        let mut query = QueryParams::new();
        query.push_list("fields", fields);

        self.get("todo/problems", Some(&query)).await
    }

    async fn add_todo_problem(
        &self,
        problem_code: &str,
        contest_code: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Adding {} to todo list", problem_code);

        let mut query = QueryParams::new();
        query
            .push("problemCode", problem_code)
            .push_opt("contestCode", contest_code);

        self.post("todo/add", Some(&query), None::<&()>).await
    }

    async fn remove_todo_problem(
        &self,
        problem_code: &str,
        contest_code: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Removing {} from todo list", problem_code);

        let mut query = QueryParams::new();
        query
            .push("problemCode", problem_code)
            .push_opt("contestCode", contest_code);

        self.post("todo/remove", Some(&query), None::<&()>).await
    }

    async fn clear_todo(&self) -> Result<Value, AppError> {
        info!("Clearing todo list");
        self.delete("todo/clear", None).await
    }
}
