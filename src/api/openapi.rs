use utoipa::OpenApi;

use crate::api::types::{ErrorBody, ValidationErrorBody};
use crate::validate::{Location, ValidationFailure};

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::users::list_users,
        crate::api::users::get_user
    ),
    components(
        schemas(
            ErrorBody,
            ValidationErrorBody,
            ValidationFailure,
            Location
        )
    ),
    tags(
        (name = "users", description = "Proxy endpoints for GitHub users")
    ),
    info(
        title = "GitHub Users Proxy API",
        version = "1.0.0",
        description = "Thin proxy over GitHub's user endpoints with parameter validation and camelCased responses",
    )
)]
pub struct ApiDoc;
