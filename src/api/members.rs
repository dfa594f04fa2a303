//! Member API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::Member;
use crate::AppState;

/// GET /api/members - List all members.
pub async fn list_members(State(state): State<AppState>) -> ApiResult<Vec<Member>> {
    match state.repo.list_members() {
        Ok(members) => success(members),
        Err(e) => error(e.into()),
    }
}

/// PUT /api/admin/members - Insert or replace a member by id.
pub async fn save_member(
    State(state): State<AppState>,
    Json(member): Json<Member>,
) -> ApiResult<Member> {
    if member.id.trim().is_empty() {
        return error(AppError::Validation("Member id is required".to_string()));
    }
    if member.name.trim().is_empty() {
        return error(AppError::Validation("Member name is required".to_string()));
    }

    match state.repo.save_member(member.clone()) {
        Ok(()) => success(member),
        Err(e) => error(e.into()),
    }
}

/// DELETE /api/admin/members/{id} - Delete a member. Their attendance
/// records are kept.
pub async fn delete_member(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    match state.repo.delete_member(&id) {
        Ok(()) => success(()),
        Err(e) => error(e.into()),
    }
}
