//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! Barberbook API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use barberbook_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `BookingError` instances and
/// implements `IntoResponse` to convert them into HTTP responses with
/// appropriate status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub BookingError);

/// Converts application errors to HTTP responses.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Allows using `?` with functions that return `Result<T, BookingError>`
/// in handlers that return `Result<T, AppError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Wraps raw store errors in the `Database` variant so repository calls
/// can use `?` directly.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

/// Maps a BookingError to an HTTP response.
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
