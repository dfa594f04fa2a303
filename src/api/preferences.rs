//! Preference API endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::models::DarkModePreference;
use crate::AppState;

/// GET /api/preferences/dark-mode - Read the theme flag. False until set.
pub async fn get_dark_mode(State(state): State<AppState>) -> ApiResult<DarkModePreference> {
    match state.repo.dark_mode() {
        Ok(dark_mode) => success(DarkModePreference { dark_mode }),
        Err(e) => error(e.into()),
    }
}

/// PUT /api/preferences/dark-mode - Store the theme flag.
pub async fn set_dark_mode(
    State(state): State<AppState>,
    Json(body): Json<DarkModePreference>,
) -> ApiResult<DarkModePreference> {
    match state.repo.set_dark_mode(body.dark_mode) {
        Ok(()) => success(body),
        Err(e) => error(e.into()),
    }
}
