use crate::application::interfaces::submission::SubmissionService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::options::SubmissionFilter;
use crate::model::query::QueryParams;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

#[async_trait]
impl SubmissionService for Client {
    async fn get_submissions(
        &self,
        filter: &SubmissionFilter,
        fields: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AppError> {
        debug!("Getting submissions with filter {}", filter);

        let mut query = QueryParams::new();
        filter.apply(&mut query);
        query
            .push_list("fields", fields)
            .push_opt("offset", offset)
            .push_opt("limit", limit);

        self.get("submissions", Some(&query)).await
    }

    async fn get_submission(&self, id: u64, fields: &[&str]) -> Result<Value, AppError> {
        let mut query = QueryParams::new();
        query.push_list("fields", fields);

        self.get(&format!("submissions/{id}"), Some(&query)).await
    }
}
