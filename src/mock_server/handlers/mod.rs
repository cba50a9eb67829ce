//! HTTP request handlers for the mock server.

pub mod project;
pub mod resources;
pub mod translations;

pub use project::*;
pub use resources::*;
pub use translations::*;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// JSON error body in the shape the client extracts messages from.
pub(crate) fn error_response(status: StatusCode, error: &str, message: String) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": error,
            "message": message,
        })),
    )
        .into_response()
}

pub(crate) fn project_not_found(project: &str) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "Project not found",
        format!("No project found with slug: {project}"),
    )
}

pub(crate) fn resource_not_found(slug: &str) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        "Resource not found",
        format!("No resource found with slug: {slug}"),
    )
}
