//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Resource Errors**: Requested account not found
/// - **Business Logic Errors**: Nominal is an exact multiple of 7500
/// - **Validation Errors**: Invalid request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested account does not exist.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Account not found")]
    AccountNotFound,

    /// Transaction nominal is an exact multiple of 7500, which the ledger
    /// rejects.
    ///
    /// Returns HTTP 422 Unprocessable Entity.
    #[error("Nominal must not be a multiple of 7500")]
    NominalMultipleOf7500,

    /// Request body violates one or more field constraints.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The vector holds one message per violated constraint.
    #[error("Validation failed")]
    Validation(Vec<String>),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return JSON in this format:
/// ```json
/// {
///   "error": {
///     "code": "error_type",
///     "message": "Human-readable error message"
///   }
/// }
/// ```
///
/// # Status Code Mapping
///
/// - `AccountNotFound` → 404 Not Found
/// - `NominalMultipleOf7500` → 422 Unprocessable Entity
/// - `Validation` → 400 Bad Request
/// - `Database` → 500 Internal Server Error (hides details from client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::AccountNotFound => {
                (StatusCode::NOT_FOUND, "account_not_found", self.to_string())
            }
            AppError::NominalMultipleOf7500 => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "nominal_multiple_of_7500",
                self.to_string(),
            ),
            AppError::Validation(ref violations) => (
                StatusCode::BAD_REQUEST,
                "validation_failed",
                violations.join("; "),
            ),
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "An internal error occurred".to_string(),
            ),
        };

        // Build JSON response body
        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        // Return the response with status code and JSON body
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_not_found_maps_to_404() {
        let response = AppError::AccountNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn nominal_rule_maps_to_422() {
        let response = AppError::NominalMultipleOf7500.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn validation_maps_to_400() {
        let response =
            AppError::Validation(vec!["nominal is required".to_string()]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
