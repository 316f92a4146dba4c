use crate::error::AppError;
use crate::model::options::{InstitutionFilter, ListOptions, SortOrder};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for contest, ranking and rating endpoints
#[async_trait]
pub trait ContestService: Send + Sync {
    /// Lists contests
    ///
    /// # Arguments
    /// * `status` - Contest status filter such as "past", "present" or "future"
    /// * `options` - Fields, paging and sorting
    async fn get_contests(
        &self,
        status: Option<&str>,
        options: &ListOptions,
    ) -> Result<Value, AppError>;

    /// Gets the details of one contest
    async fn get_contest(
        &self,
        contest_code: &str,
        fields: &[&str],
        sort_order: Option<SortOrder>,
    ) -> Result<Value, AppError>;

    /// Gets one problem of a contest
    async fn get_contest_problem(
        &self,
        contest_code: &str,
        problem_code: &str,
        fields: &[&str],
    ) -> Result<Value, AppError>;

    /// Gets the ranklist of a contest
    async fn get_contest_rankings(
        &self,
        contest_code: &str,
        filter: &InstitutionFilter,
        options: &ListOptions,
    ) -> Result<Value, AppError>;

    /// Gets user ratings
    ///
    /// # Arguments
    /// * `rating_type` - One of "all", "long", "short" or "ltime"
    /// * `filter` - Country and institution filter
    /// * `options` - Fields, paging and sorting
    async fn get_ratings(
        &self,
        rating_type: &str,
        filter: &InstitutionFilter,
        options: &ListOptions,
    ) -> Result<Value, AppError>;
}
