//! Resource API endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{NewResource, Resource};
use crate::AppState;

/// GET /api/resources - List all resources.
pub async fn list_resources(State(state): State<AppState>) -> ApiResult<Vec<Resource>> {
    match state.repo.list_resources() {
        Ok(resources) => success(resources),
        Err(e) => error(e.into()),
    }
}

/// POST /api/admin/resources - Append a resource to the library.
pub async fn add_resource(
    State(state): State<AppState>,
    Json(body): Json<NewResource>,
) -> ApiResult<Resource> {
    if body.title.trim().is_empty() {
        return error(AppError::Validation(
            "Resource title is required".to_string(),
        ));
    }
    if body.url.trim().is_empty() {
        return error(AppError::Validation("Resource url is required".to_string()));
    }

    let resource = Resource {
        id: uuid::Uuid::new_v4().to_string(),
        title: body.title,
        description: body.description,
        kind: body.kind,
        url: body.url,
    };

    match state.repo.add_resource(resource.clone()) {
        Ok(()) => success(resource),
        Err(e) => error(e.into()),
    }
}
