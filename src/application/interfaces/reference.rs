use crate::error::AppError;
use crate::model::options::SortOrder;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the country, institution and language lookup lists
#[async_trait]
pub trait ReferenceService: Send + Sync {
    /// Lists countries
    async fn get_countries(
        &self,
        search: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
        sort_order: Option<SortOrder>,
    ) -> Result<Value, AppError>;

    /// Lists institutions
    async fn get_institutions(
        &self,
        search: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
        sort_order: Option<SortOrder>,
    ) -> Result<Value, AppError>;

    /// Lists programming languages accepted by the judge
    async fn get_languages(
        &self,
        search: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
        sort_order: Option<SortOrder>,
    ) -> Result<Value, AppError>;
}
