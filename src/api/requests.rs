//! Community request API endpoints.

use axum::{extract::State, Json};
use chrono::Utc;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{CommunityRequest, NewCommunityRequest};
use crate::AppState;

/// POST /api/requests - Submit a community request from the public contact
/// form. The server assigns the id and timestamp before appending; the
/// collection itself never de-duplicates.
pub async fn submit_request(
    State(state): State<AppState>,
    Json(body): Json<NewCommunityRequest>,
) -> ApiResult<CommunityRequest> {
    if body.requester_name.trim().is_empty() {
        return error(AppError::Validation(
            "Requester name is required".to_string(),
        ));
    }
    if body.contact.trim().is_empty() {
        return error(AppError::Validation("Contact is required".to_string()));
    }
    if body.description.trim().is_empty() {
        return error(AppError::Validation("Description is required".to_string()));
    }

    let request = CommunityRequest {
        id: uuid::Uuid::new_v4().to_string(),
        requester_name: body.requester_name,
        contact: body.contact,
        location: body.location,
        category: body.category,
        description: body.description,
        timestamp: Utc::now().to_rfc3339(),
    };

    match state.repo.add_request(request.clone()) {
        Ok(()) => success(request),
        Err(e) => error(e.into()),
    }
}

/// GET /api/admin/requests - List submitted requests for the staff
/// dashboard.
pub async fn list_requests(State(state): State<AppState>) -> ApiResult<Vec<CommunityRequest>> {
    match state.repo.list_requests() {
        Ok(requests) => success(requests),
        Err(e) => error(e.into()),
    }
}
