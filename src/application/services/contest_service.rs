use crate::application::interfaces::contest::ContestService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::options::{InstitutionFilter, ListOptions, SortOrder};
use crate::model::query::QueryParams;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

#[async_trait]
impl ContestService for Client {
    async fn get_contests(
        &self,
        status: Option<&str>,
        options: &ListOptions,
    ) -> Result<Value, AppError> {
        info!("Getting contest list");

        let mut query = QueryParams::new();
        query.push_opt("status", status);
        options.apply(&mut query);

        self.get("contests", Some(&query)).await
    }

    async fn get_contest(
        &self,
        contest_code: &str,
        fields: &[&str],
        sort_order: Option<SortOrder>,
    ) -> Result<Value, AppError> {
        debug!("Getting contest {}", contest_code);

        let mut query = QueryParams::new();
        query
            .push_list("fields", fields)
            .push_opt("sortOrder", sort_order);

        self.get(&format!("contests/{contest_code}"), Some(&query))
            .await
    }

    async fn get_contest_problem(
        &self,
        contest_code: &str,
        problem_code: &str,
        fields: &[&str],
    ) -> Result<Value, AppError> {
        debug!("Getting problem {} of contest {}", problem_code, contest_code);

        let mut query = QueryParams::new();
        query.push_list("fields", fields);

        let path = format!("contests/{contest_code}/problems/{problem_code}");
        self.get(&path, Some(&query)).await
    }

    async fn get_contest_rankings(
        &self,
        contest_code: &str,
        filter: &InstitutionFilter,
        options: &ListOptions,
    ) -> Result<Value, AppError> {
        info!("Getting rankings of contest {}", contest_code);

        let mut query = QueryParams::new();
        filter.apply(&mut query);
        options.apply(&mut query);

        self.get(&format!("rankings/{contest_code}"), Some(&query))
            .await
    }

    async fn get_ratings(
        &self,
        rating_type: &str,
        filter: &InstitutionFilter,
        options: &ListOptions,
    ) -> Result<Value, AppError> {
        info!("Getting {} ratings", rating_type);

        let mut query = QueryParams::new();
        filter.apply(&mut query);
        options.apply(&mut query);

        self.get(&format!("ratings/{rating_type}"), Some(&query))
            .await
    }
}
