//! Content and translation endpoint handlers.

use std::collections::HashMap;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::{error_response, project_not_found, resource_not_found};
use crate::mock_server::state::SharedState;

/// Query parameters for downloading a translation.
#[derive(Debug, Default, Deserialize)]
pub struct TranslationQuery {
    pub mode: Option<String>,
}

/// GET /api/2/project/{project}/resource/{slug}/content
pub async fn get_content(
    State(state): State<SharedState>,
    Path((project, slug)): Path<(String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;

    if !state.is_project(&project) {
        return project_not_found(&project);
    }
    if state.get_resource(&slug).is_none() {
        return resource_not_found(&slug);
    }
    let content = state.sources.get(&slug).cloned().unwrap_or_default();
    (StatusCode::OK, Json(serde_json::json!({ "content": content }))).into_response()
}

/// PUT /api/2/project/{project}/resource/{slug}/content
pub async fn update_content(
    State(state): State<SharedState>,
    Path((project, slug)): Path<(String, String)>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let mut fields: HashMap<String, String> = HashMap::new();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().unwrap_or_default().to_string();
                match field.bytes().await {
                    Ok(data) => {
                        fields.insert(name, String::from_utf8_lossy(&data).into_owned());
                    }
                    Err(e) => {
                        return error_response(
                            StatusCode::BAD_REQUEST,
                            "Invalid form",
                            e.to_string(),
                        )
                    }
                }
            }
            Ok(None) => break,
            Err(e) => {
                return error_response(StatusCode::BAD_REQUEST, "Invalid form", e.to_string())
            }
        }
    }

    let Some(content) = fields.remove("content") else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing content",
            "The 'content' form field is required".to_string(),
        );
    };

    let mut state = state.write().await;

    if !state.is_project(&project) {
        return project_not_found(&project);
    }
    let Some(resource) = state.resources.get_mut(&slug) else {
        return resource_not_found(&slug);
    };
    if let Some(name) = fields.remove("name").filter(|n| !n.is_empty()) {
        resource.name = name;
    }
    if let Some(i18n_type) = fields.remove("type").filter(|t| !t.is_empty()) {
        resource.i18n_type = Some(i18n_type);
    }

    let update = state.replace_source(&slug, content);
    (StatusCode::OK, Json(update)).into_response()
}

/// GET /api/2/project/{project}/resource/{slug}/translation/{lang}/
pub async fn get_translation(
    State(state): State<SharedState>,
    Path((project, slug, lang)): Path<(String, String, String)>,
    Query(query): Query<TranslationQuery>,
) -> impl IntoResponse {
    let state = state.read().await;

    if !state.is_project(&project) {
        return project_not_found(&project);
    }
    if state.get_resource(&slug).is_none() {
        return resource_not_found(&slug);
    }

    let mode = query.mode.as_deref().unwrap_or("default");
    match state.get_translation(&slug, &lang, mode) {
        Some(content) => {
            (StatusCode::OK, Json(serde_json::json!({ "content": content }))).into_response()
        }
        None => error_response(
            StatusCode::NOT_FOUND,
            "Translation not found",
            format!("No '{lang}' translation for resource: {slug}"),
        ),
    }
}

/// GET /api/2/project/{project}/resource/{slug}/translation/{lang}/strings
pub async fn get_strings(
    State(state): State<SharedState>,
    Path((project, slug, lang)): Path<(String, String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;

    if !state.is_project(&project) {
        return project_not_found(&project);
    }
    if state.get_resource(&slug).is_none() {
        return resource_not_found(&slug);
    }

    let strings = state
        .strings
        .get(&(slug, lang))
        .cloned()
        .unwrap_or_default();
    (StatusCode::OK, Json(strings)).into_response()
}
