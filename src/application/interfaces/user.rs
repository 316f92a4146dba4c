use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for user endpoints
#[async_trait]
pub trait UserService: Send + Sync {
    /// Gets the profile of the user owning the access token
    async fn whoami(&self) -> Result<Value, AppError>;

    /// Gets the public profile of a user
    async fn get_user(&self, username: &str, fields: &[&str]) -> Result<Value, AppError>;

    /// Searches users by name
    async fn search_users(
        &self,
        search: &str,
        fields: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AppError>;
}
