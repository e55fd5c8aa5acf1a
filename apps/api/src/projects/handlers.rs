use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::project::ProjectRow;
use crate::state::AppState;

use super::filter::ListFilter;
use super::store::{self, NewProject, ProjectPatch};
use super::validation::{normalize_links, validate_new_project};

/// GET /api/projects
pub async fn handle_list_projects(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> Result<Json<Vec<ProjectRow>>, AppError> {
    let projects = store::list_projects(&state.db, &filter).await?;
    Ok(Json(projects))
}

/// GET /api/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProjectRow>, AppError> {
    store::get_project(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}

/// POST /api/projects
pub async fn handle_create_project(
    State(state): State<AppState>,
    Json(body): Json<NewProject>,
) -> Result<(StatusCode, Json<ProjectRow>), AppError> {
    let body = validate_new_project(body).map_err(AppError::Validation)?;
    let project = store::create_project(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/:id
///
/// An unknown identity responds 200 with a JSON `null` body rather than a
/// 404; callers must treat the absent result as not-found.
pub async fn handle_update_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut patch): Json<ProjectPatch>,
) -> Result<Json<Option<ProjectRow>>, AppError> {
    patch.links = patch.links.map(normalize_links);
    let updated = store::update_project(&state.db, id, patch).await?;
    Ok(Json(updated))
}

/// DELETE /api/projects/:id
///
/// Idempotent: the confirmation message is the same whether or not a
/// document matched.
pub async fn handle_delete_project(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let removed = store::delete_project(&state.db, id).await?;
    if removed == 0 {
        tracing::debug!("delete request for unknown project {id}");
    }
    Ok(Json(json!({ "message": "Project deleted" })))
}
