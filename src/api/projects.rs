//! Project API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::Project;
use crate::AppState;

/// GET /api/projects - List all projects.
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Vec<Project>> {
    match state.repo.list_projects() {
        Ok(projects) => success(projects),
        Err(e) => error(e.into()),
    }
}

/// PUT /api/admin/projects - Insert or replace a project. The body carries
/// the id; an existing id is replaced in place, a new id is appended.
pub async fn save_project(
    State(state): State<AppState>,
    Json(project): Json<Project>,
) -> ApiResult<Project> {
    if project.id.trim().is_empty() {
        return error(AppError::Validation("Project id is required".to_string()));
    }
    if project.title.trim().is_empty() {
        return error(AppError::Validation(
            "Project title is required".to_string(),
        ));
    }

    match state.repo.save_project(project.clone()) {
        Ok(()) => success(project),
        Err(e) => error(e.into()),
    }
}

/// DELETE /api/admin/projects/{id} - Delete a project. Deleting an absent
/// id succeeds as a no-op.
pub async fn delete_project(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    match state.repo.delete_project(&id) {
        Ok(()) => success(()),
        Err(e) => error(e.into()),
    }
}
