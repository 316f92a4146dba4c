use crate::application::interfaces::user::UserService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::query::QueryParams;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

#[async_trait]
impl UserService for Client {
    async fn whoami(&self) -> Result<Value, AppError> {
        debug!("Getting authenticated user");
        self.get("users/me", None).await
    }

    async fn get_user(&self, username: &str, fields: &[&str]) -> Result<Value, AppError> {
        debug!("Getting user {}", username);

        let mut query = QueryParams::new();
        query.push_list("fields", fields);

        self.get(&format!("users/{username}"), Some(&query)).await
    }

    async fn search_users(
        &self,
        search: &str,
        fields: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AppError> {
        let mut query = QueryParams::new();
        query
            .push("search", search)
            .push_list("fields", fields)
            .push_opt("offset", offset)
            .push_opt("limit", limit);

        self.get("users", Some(&query)).await
    }
}
