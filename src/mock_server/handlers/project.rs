//! Project endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::project_not_found;
use crate::mock_server::state::SharedState;

/// GET /api/2/project/{project}/
pub async fn get_project(
    State(state): State<SharedState>,
    Path(project): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    match state.project.as_ref().filter(|p| p.slug == project) {
        Some(p) => (StatusCode::OK, Json(p.clone())).into_response(),
        None => project_not_found(&project),
    }
}

/// GET /api/2/project/{project}/languages/
pub async fn list_languages(
    State(state): State<SharedState>,
    Path(project): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    if !state.is_project(&project) {
        return project_not_found(&project);
    }
    (StatusCode::OK, Json(state.languages.clone())).into_response()
}
