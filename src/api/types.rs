use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::github::GitHubClient;
use crate::validate::ValidationFailure;

pub struct AppState {
    pub github_client: GitHubClient,
}

/// Raw query parameters for the list/search users endpoint. Everything stays
/// a string until the validator has accepted it.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersParams {
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
    pub since: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorBody {
    pub errors: Vec<ValidationFailure>,
}
