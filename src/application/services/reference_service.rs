use crate::application::interfaces::reference::ReferenceService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::options::SortOrder;
use crate::model::query::QueryParams;
use async_trait::async_trait;
use serde_json::Value;

// The three lookup lists accept the same parameters.
fn lookup_query(
    search: Option<&str>,
    offset: Option<u32>,
    limit: Option<u32>,
    sort_order: Option<SortOrder>,
) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .push_opt("search", search)
        .push_opt("offset", offset)
        .push_opt("limit", limit)
        .push_opt("sortOrder", sort_order);
    query
}

#[async_trait]
impl ReferenceService for Client {
    async fn get_countries(
        &self,
        search: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
        sort_order: Option<SortOrder>,
    ) -> Result<Value, AppError> {
        let query = lookup_query(search, offset, limit, sort_order);
        self.get("country", Some(&query)).await
    }

    async fn get_institutions(
        &self,
        search: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
        sort_order: Option<SortOrder>,
    ) -> Result<Value, AppError> {
        let query = lookup_query(search, offset, limit, sort_order);
        self.get("institution", Some(&query)).await
    }

    async fn get_languages(
        &self,
        search: Option<&str>,
        offset: Option<u32>,
        limit: Option<u32>,
        sort_order: Option<SortOrder>,
    ) -> Result<Value, AppError> {
        let query = lookup_query(search, offset, limit, sort_order);
        self.get("language", Some(&query)).await
    }
}
