pub mod error;
pub mod openapi;
pub mod types;
pub mod users;

use std::sync::Arc;

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    openapi::ApiDoc,
    types::AppState,
    users::{get_user, list_users},
};

pub fn create_router(state: Arc<AppState>) -> Router {
    let api_doc = ApiDoc::openapi();
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api_doc))
        .route("/api/users", get(list_users))
        .route("/api/users/{username}", get(get_user))
        .fallback(not_found)
        .with_state(state)
}

/// Browsers land on the docs; API clients get a JSON 404.
async fn not_found(headers: HeaderMap) -> Response {
    let accepts_html = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"));

    if accepts_html {
        Redirect::temporary("/docs").into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Resource isn't found" })),
        )
            .into_response()
    }
}
