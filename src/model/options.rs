use crate::model::query::QueryParams;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction accepted by listing endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Field selection, paging and sorting shared by listing endpoints
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ListOptions {
    /// Fields to include in the response, sent comma separated
    pub fields: Vec<String>,
    /// Number of records to skip
    pub offset: Option<u32>,
    /// Maximum number of records to return
    pub limit: Option<u32>,
    /// Field to sort by
    pub sort_by: Option<String>,
    /// Sort direction
    pub sort_order: Option<SortOrder>,
}

impl ListOptions {
    /// Creates empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fields to return
    pub fn with_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the offset
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the sort field
    pub fn with_sort_by(mut self, sort_by: impl Into<String>) -> Self {
        self.sort_by = Some(sort_by.into());
        self
    }

    /// Set the sort direction
    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = Some(sort_order);
        self
    }

    /// Appends `fields`, `offset`, `limit`, `sortBy` and `sortOrder` in that order
    pub fn apply(&self, query: &mut QueryParams) {
        query
            .push_list("fields", &self.fields)
            .push_opt("offset", self.offset)
            .push_opt("limit", self.limit)
            .push_opt("sortBy", self.sort_by.as_deref())
            .push_opt("sortOrder", self.sort_order);
    }
}

/// Country and institution filter used by rankings and ratings
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize)]
pub struct InstitutionFilter {
    /// Country name
    pub country: Option<String>,
    /// Institution name
    pub institution: Option<String>,
    /// Institution type (e.g. "School", "College", "Organization")
    pub institution_type: Option<String>,
}

impl InstitutionFilter {
    /// Appends `country`, `institution` and `institutionType` in that order
    pub fn apply(&self, query: &mut QueryParams) {
        query
            .push_opt("country", self.country.as_deref())
            .push_opt("institution", self.institution.as_deref())
            .push_opt("institutionType", self.institution_type.as_deref());
    }
}

/// Filter for the submissions listing
#[derive(Debug, Clone, Default, DisplaySimple, Serialize, Deserialize)]
pub struct SubmissionFilter {
    /// Verdict such as "AC" or "WA"
    pub result: Option<String>,
    /// Submission year
    pub year: Option<u16>,
    /// Author of the submission
    pub username: Option<String>,
    /// Language name
    pub language: Option<String>,
    /// Problem code
    pub problem_code: Option<String>,
    /// Contest code
    pub contest_code: Option<String>,
}

impl SubmissionFilter {
    /// Appends `result`, `year`, `username`, `language`, `problemCode` and `contestCode`
    pub fn apply(&self, query: &mut QueryParams) {
        query
            .push_opt("result", self.result.as_deref())
            .push_opt("year", self.year)
            .push_opt("username", self.username.as_deref())
            .push_opt("language", self.language.as_deref())
            .push_opt("problemCode", self.problem_code.as_deref())
            .push_opt("contestCode", self.contest_code.as_deref());
    }
}
