//! Portfolio API endpoint.

use axum::extract::State;

use super::{error, success, ApiResult};
use crate::models::Portfolio;
use crate::AppState;

/// GET /api/admin/portfolio - Full snapshot of every collection for the
/// staff dashboard.
pub async fn get_portfolio(State(state): State<AppState>) -> ApiResult<Portfolio> {
    match state.repo.portfolio() {
        Ok(portfolio) => success(portfolio),
        Err(e) => error(e.into()),
    }
}
