use crate::application::interfaces::ide::IdeService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::query::QueryParams;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

/// Body of an IDE run request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunRequest<'a> {
    source_code: &'a str,
    language: &'a str,
    input: &'a str,
}

#[async_trait]
impl IdeService for Client {
    async fn run_code(
        &self,
        source_code: &str,
        language: &str,
        input: &str,
    ) -> Result<Value, AppError> {
        info!("Submitting {} code to the IDE", language);

        let body = RunRequest {
            source_code,
            language,
            input,
        };

        self.post("ide/run", None, Some(&body)).await
    }

    async fn get_run_status(&self, link: &str) -> Result<Value, AppError> {
        debug!("Polling IDE run {}", link);

        let mut query = QueryParams::new();
        query.push("link", link);

        self.get("ide/status", Some(&query)).await
    }
}
