use crate::application::interfaces::set::SetService;
use crate::client::Client;
use crate::error::AppError;
use crate::model::query::QueryParams;
use async_trait::async_trait;
use serde_json::Value;
use tracing::info;

fn problems_query(set_name: &str, problem_codes: &[&str], contest_codes: &[&str]) -> QueryParams {
    let mut query = QueryParams::new();
    query
        .push("setName", set_name)
        .push_list("problemCodes", problem_codes)
        .push_list("contestCodes", contest_codes);
    query
}

#[async_trait]
impl SetService for Client {
    async fn get_sets(
        &self,
        fields: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AppError> {
        let mut query = QueryParams::new();
        query
            .push_list("fields", fields)
            .push_opt("offset", offset)
            .push_opt("limit", limit);

        self.get("sets", Some(&query)).await
    }

    async fn create_set(
        &self,
        set_name: &str,
        description: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Creating set {}", set_name);

        let mut query = QueryParams::new();
        query
            .push("setName", set_name)
            .push_opt("description", description);

        self.post("sets/create", Some(&query), None::<&()>).await
    }

    async fn update_set(
        &self,
        set_name: &str,
        new_set_name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Value, AppError> {
        info!("Updating set {}", set_name);

        let mut query = QueryParams::new();
        query
            .push("setName", set_name)
            .push_opt("newSetName", new_set_name)
            .push_opt("description", description);

        self.put("sets/update", Some(&query), None::<&()>).await
    }

    async fn delete_set(&self, set_name: &str) -> Result<Value, AppError> {
        info!("Deleting set {}", set_name);

        let mut query = QueryParams::new();
        query.push("setName", set_name);

        self.delete("sets/delete", Some(&query)).await
    }

    async fn get_set_problems(
        &self,
        set_name: &str,
        fields: &[&str],
        offset: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Value, AppError> {
        let mut query = QueryParams::new();
        query
            .push("setName", set_name)
            .push_list("fields", fields)
            .push_opt("offset", offset)
            .push_opt("limit", limit);

        self.get("sets/problems", Some(&query)).await
    }

    async fn add_problems_to_set(
        &self,
        set_name: &str,
        problem_codes: &[&str],
        contest_codes: &[&str],
    ) -> Result<Value, AppError> {
        info!("Adding {} problems to set {}", problem_codes.len(), set_name);
        let query = problems_query(set_name, problem_codes, contest_codes);
        self.post("sets/problems/add", Some(&query), None::<&()>)
            .await
    }

    async fn remove_problems_from_set(
        &self,
        set_name: &str,
        problem_codes: &[&str],
        contest_codes: &[&str],
    ) -> Result<Value, AppError> {
        info!("Removing {} problems from set {}", problem_codes.len(), set_name);
        let query = problems_query(set_name, problem_codes, contest_codes);
        self.post("sets/problems/remove", Some(&query), None::<&()>)
            .await
    }
}
