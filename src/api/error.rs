use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use eyre::Report;
use tracing::error;

use crate::api::types::{ErrorBody, ValidationErrorBody};
use crate::validate::ValidationFailure;

/// Error type for API operations
#[derive(Debug)]
pub enum ApiError {
    /// One or more parameters failed validation; no upstream call was made.
    Validation(Vec<ValidationFailure>),
    /// The requested user does not exist upstream.
    UserNotFound,
    /// Any other upstream failure, surfaced without detail.
    Upstream(Report),
}

impl From<Report> for ApiError {
    fn from(err: Report) -> Self {
        Self::Upstream(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorBody { errors }),
            )
                .into_response(),
            ApiError::UserNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
            ApiError::Upstream(report) => {
                error!("Upstream error: {report:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: "Something went wrong".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
