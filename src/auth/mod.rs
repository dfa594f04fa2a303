//! Admin-code authentication module.
//!
//! The staff surface is gated by a single shared code. Comparison is
//! constant-time to mitigate timing attacks.

use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use subtle::ConstantTimeEq;

use crate::errors::{codes, ErrorDetails, ErrorResponse};

/// Header name for the admin code.
pub const ADMIN_CODE_HEADER: &str = "x-admin-code";

/// Admin authentication layer function that takes the expected code as a
/// parameter.
pub async fn admin_auth_layer(
    expected_code: Option<String>,
    request: Request,
    next: Next,
) -> Response {
    // If no admin code is configured, allow all requests (dev mode)
    let Some(expected) = expected_code else {
        return next.run(request).await;
    };

    // Get the admin code from the request header
    let provided = request
        .headers()
        .get(ADMIN_CODE_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());

    match provided {
        Some(provided_code) => {
            if constant_time_compare(&provided_code, &expected) {
                next.run(request).await
            } else {
                unauthorized_response("Invalid admin code")
            }
        }
        None => {
            // Also check Authorization header as bearer token
            let bearer = request
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.strip_prefix("Bearer "))
                .map(|s| s.to_string());

            match bearer {
                Some(bearer_code) if constant_time_compare(&bearer_code, &expected) => {
                    next.run(request).await
                }
                _ => unauthorized_response("Missing or invalid admin code"),
            }
        }
    }
}

/// Perform constant-time string comparison.
fn constant_time_compare(a: &str, b: &str) -> bool {
    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    a_bytes.ct_eq(b_bytes).into()
}

/// Create an unauthorized response.
fn unauthorized_response(message: &str) -> Response {
    let body = ErrorResponse {
        success: false,
        error: ErrorDetails {
            code: codes::UNAUTHORIZED.to_string(),
            message: message.to_string(),
        },
    };

    (StatusCode::UNAUTHORIZED, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_time_compare_equal() {
        assert!(constant_time_compare("staff-code-123", "staff-code-123"));
    }

    #[test]
    fn test_constant_time_compare_not_equal() {
        assert!(!constant_time_compare("staff-code-123", "staff-code-124"));
    }

    #[test]
    fn test_constant_time_compare_different_lengths() {
        assert!(!constant_time_compare("short", "much-longer-code"));
    }

    #[test]
    fn test_constant_time_compare_empty() {
        assert!(constant_time_compare("", ""));
        assert!(!constant_time_compare("", "not-empty"));
    }
}
