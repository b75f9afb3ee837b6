//! Contact Error Types
//!
//! This module provides contact-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Contact-specific result type alias
pub type ContactResult<T> = Result<T, ContactError>;

/// Contact-specific error variants
///
/// These are domain-specific errors that map to appropriate HTTP status
/// codes and can be converted to `AppError` for unified error handling.
#[derive(Debug, Error)]
pub enum ContactError {
    /// Submission rejected by the per-client rate limiter
    #[error("Rate limit exceeded")]
    RateLimited {
        /// Moment the oldest recorded request falls out of the window
        reset_at: DateTime<Utc>,
        /// Remaining quota at the time of rejection (always 0 here)
        remaining: u32,
    },

    /// Input failed validation (name/email/message constraints)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Email could not be handed to the SMTP relay
    #[error("Email delivery failed: {0}")]
    EmailDelivery(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ContactError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ContactError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ContactError::EmailDelivery(_)
            | ContactError::Database(_)
            | ContactError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactError::RateLimited { .. } => ErrorKind::TooManyRequests,
            ContactError::Validation(_) => ErrorKind::UnprocessableEntity,
            ContactError::EmailDelivery(_)
            | ContactError::Database(_)
            | ContactError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ContactError::Database(e) => {
                tracing::error!(error = %e, "Contact database error");
            }
            ContactError::EmailDelivery(msg) => {
                tracing::error!(message = %msg, "Contact email delivery error");
            }
            ContactError::Internal(msg) => {
                tracing::error!(message = %msg, "Contact internal error");
            }
            ContactError::RateLimited { reset_at, .. } => {
                tracing::warn!(reset_at = %reset_at, "Contact rate limit exceeded");
            }
            ContactError::Validation(msg) => {
                tracing::debug!(message = %msg, "Contact validation error");
            }
        }
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message)
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();

        // Response bodies keep the shape the frontend already consumes.
        let body = match &self {
            ContactError::RateLimited { reset_at, remaining } => serde_json::json!({
                "success": false,
                "message": format!(
                    "Too many requests. Please try again later. Limit resets at {} UTC",
                    reset_at.format("%H:%M")
                ),
                "remaining_requests": remaining,
            }),
            ContactError::Validation(msg) => serde_json::json!({
                "success": false,
                "message": "Please check your input and try again.",
                "errors": [msg],
            }),
            _ => serde_json::json!({
                "success": false,
                "message": "An unexpected error occurred. Please try again later.",
            }),
        };

        (status, Json(body)).into_response()
    }
}
