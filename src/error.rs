//! # Error Handling
//!
//! This module defines the application error type and how it becomes an
//! HTTP response.
//!
//! ## Status Mapping
//! Handlers decide which variant a repository error turns into. `/find`
//! reports a missing user as `NotFound`, while `/create`, `/update` and
//! `/delete` report any repository failure as `Internal`. The error type
//! itself carries no knowledge of routes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-wide error type
///
/// Every variant carries the exact text written to the response body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Missing or malformed query parameters (400)
    ///
    /// Raised before the repository is touched.
    #[error("{0}")]
    BadRequest(String),

    /// Requested resource does not exist (404)
    #[error("{0}")]
    NotFound(String),

    /// Any other failure, including repository conflicts on mutation routes (500)
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Wrap any displayable error as a 404, keeping its text.
    pub fn not_found(err: impl std::fmt::Display) -> Self {
        Self::NotFound(err.to_string())
    }

    /// Wrap any displayable error as a 500, keeping its text.
    pub fn internal(err: impl std::fmt::Display) -> Self {
        Self::Internal(err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Convert AppError into a plain-text HTTP response
///
/// The body is the error message alone, with no JSON envelope. A `String`
/// body is sent as `text/plain; charset=utf-8`.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::BadRequest(m) | AppError::NotFound(m) | AppError::Internal(m) => m,
        };

        (status, message).into_response()
    }
}

/// Convenience alias so handlers can write `AppResult<T>`.
pub type AppResult<T> = Result<T, AppError>;
