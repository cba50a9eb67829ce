//! Resource endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::{error_response, project_not_found, resource_not_found};
use crate::mock_server::state::SharedState;
use crate::{Resource, ResourceDescriptor};

/// GET /api/2/project/{project}/resources
pub async fn list_resources(
    State(state): State<SharedState>,
    Path(project): Path<String>,
) -> impl IntoResponse {
    let state = state.read().await;

    if !state.is_project(&project) {
        return project_not_found(&project);
    }
    let resources: Vec<Resource> = state.resources.values().cloned().collect();
    (StatusCode::OK, Json(resources)).into_response()
}

/// GET /api/2/project/{project}/resource/{slug}
pub async fn get_resource(
    State(state): State<SharedState>,
    Path((project, slug)): Path<(String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;

    if !state.is_project(&project) {
        return project_not_found(&project);
    }
    match state.get_resource(&slug) {
        Some(resource) => (StatusCode::OK, Json(resource.clone())).into_response(),
        None => resource_not_found(&slug),
    }
}

/// POST /api/2/project/{project}/resources
pub async fn create_resource(
    State(state): State<SharedState>,
    Path(project): Path<String>,
    Json(descriptor): Json<ResourceDescriptor>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if !state.is_project(&project) {
        return project_not_found(&project);
    }
    if state.get_resource(&descriptor.slug).is_some() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Resource exists",
            format!("Resource with slug '{}' already exists", descriptor.slug),
        );
    }

    let resource = Resource {
        slug: descriptor.slug.clone(),
        name: descriptor.name,
        i18n_type: Some(descriptor.i18n_type),
        source_language_code: state
            .project
            .as_ref()
            .and_then(|p| p.source_language_code.clone()),
        categories: descriptor.categories,
        priority: descriptor.priority,
        extra: Default::default(),
    };

    let slug = descriptor.slug;
    let added = match descriptor.content {
        Some(content) => state.replace_source(&slug, content).strings_added,
        None => 0,
    };
    state.resources.insert(slug, resource);

    (StatusCode::CREATED, Json(serde_json::json!([added]))).into_response()
}

/// DELETE /api/2/project/{project}/resource/{slug}
pub async fn delete_resource(
    State(state): State<SharedState>,
    Path((project, slug)): Path<(String, String)>,
) -> impl IntoResponse {
    let mut state = state.write().await;

    if !state.is_project(&project) {
        return project_not_found(&project);
    }
    match state.delete_resource(&slug) {
        Some(_) => StatusCode::NO_CONTENT.into_response(),
        None => resource_not_found(&slug),
    }
}
