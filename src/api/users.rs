use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

use crate::{
    api::{
        error::{ApiError, ApiResult},
        types::{AppState, ErrorBody, ListUsersParams, ValidationErrorBody},
    },
    transform, validate,
};

/// Page size forwarded upstream when `perPage` is absent.
const DEFAULT_PER_PAGE: u32 = 30;

/// List GitHub users, or search them when `search` is given
#[utoipa::path(
    get,
    path = "/api/users",
    params(
        ("perPage" = Option<String>, Query, description = "Results per page, an integer between 1 and 100 (default 30)"),
        ("since" = Option<String>, Query, description = "Only list users with an id greater than this; ignored when search is present"),
        ("search" = Option<String>, Query, description = "Search term, at least 3 characters"),
        ("sort" = Option<String>, Query, description = "Search sort field: followers, repositories or joined; requires search"),
        ("order" = Option<String>, Query, description = "Search sort order: asc or desc; requires search"),
        ("page" = Option<String>, Query, description = "Search result page, 1 or greater; requires search")
    ),
    responses(
        (status = 200, description = "Users fetched from GitHub, keys camel-cased"),
        (status = 400, description = "One or more query parameters failed validation", body = ValidationErrorBody),
        (status = 500, description = "Upstream call failed", body = ErrorBody)
    ),
    tag = "users"
)]
#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListUsersParams>,
) -> ApiResult<Json<Value>> {
    let failures = validate::list_users(&params);
    if !failures.is_empty() {
        return Err(ApiError::Validation(failures));
    }

    let per_page = parse_or(&params.per_page, DEFAULT_PER_PAGE);
    let body = match &params.search {
        Some(term) => {
            let page = params.page.as_deref().and_then(|raw| raw.parse().ok());
            state
                .github_client
                .search_users(
                    term,
                    params.sort.as_deref(),
                    params.order.as_deref(),
                    page,
                    per_page,
                )
                .await?
        }
        None => {
            let since = params.since.as_deref().and_then(|raw| raw.parse().ok());
            state.github_client.list_users(since, per_page).await?
        }
    };

    Ok(Json(transform::camelize(body)))
}

/// Fetch a single GitHub user by login
#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(
        ("username" = String, Path, description = "GitHub login to fetch")
    ),
    responses(
        (status = 200, description = "User fetched from GitHub, keys camel-cased"),
        (status = 400, description = "Username failed validation", body = ValidationErrorBody),
        (status = 404, description = "User does not exist upstream", body = ErrorBody),
        (status = 500, description = "Upstream call failed", body = ErrorBody)
    ),
    tag = "users"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> ApiResult<Json<Value>> {
    let failures = validate::get_user(&username);
    if !failures.is_empty() {
        return Err(ApiError::Validation(failures));
    }

    let body = state
        .github_client
        .get_user(&username)
        .await?
        .ok_or(ApiError::UserNotFound)?;

    Ok(Json(transform::camelize(body)))
}

// Validation already guarantees the value parses; the fallback only covers
// the absent case.
fn parse_or(raw: &Option<String>, default: u32) -> u32 {
    raw.as_deref()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}
