//! Attendance API endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::models::{AttendanceRecord, RecordAttendanceRequest};
use crate::AppState;

/// GET /api/admin/attendance - List all attendance records.
pub async fn list_attendance(State(state): State<AppState>) -> ApiResult<Vec<AttendanceRecord>> {
    match state.repo.list_attendance() {
        Ok(records) => success(records),
        Err(e) => error(e.into()),
    }
}

/// POST /api/admin/attendance - Record a batch of attendance entries in one
/// store round-trip.
pub async fn record_attendance(
    State(state): State<AppState>,
    Json(body): Json<RecordAttendanceRequest>,
) -> ApiResult<Vec<AttendanceRecord>> {
    match state.repo.record_attendance(body.records.clone()) {
        Ok(()) => success(body.records),
        Err(e) => error(e.into()),
    }
}
