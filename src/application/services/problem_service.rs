use crate::application::interfaces::problem::ProblemService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::options::ListOptions;
use crate::model::query::QueryParams;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

#[async_trait]
impl ProblemService for Client {
    async fn get_problems(
        &self,
        category: &str,
        options: &ListOptions,
    ) -> Result<Value, AppError> {
        info!("Getting {} practice problems", category);

        let mut query = QueryParams::new();
        options.apply(&mut query);

        self.get(&format!("problems/{category}"), Some(&query)).await
    }

    async fn get_problem_tags(
        &self,
        filter: Option<&str>,
        fields: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AppError> {
        let mut query = QueryParams::new();
        query
            .push_opt("filter", filter)
            .push_list("fields", fields)
            .push_opt("offset", offset)
            .push_opt("limit", limit);

        self.get("tags/problems", Some(&query)).await
    }
}
