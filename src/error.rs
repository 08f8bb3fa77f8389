//! HTTP-facing error type.
//!
//! Every failure leaving a handler is rendered as
//! `{ "error": { "code", "message", "details" } }`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::errors::{ShortenError, StoreError};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        code: &'static str,
        message: String,
        details: Value,
    },
    #[error("{message}")]
    Conflict {
        code: &'static str,
        message: String,
        details: Value,
    },
    #[error("{message}")]
    Internal {
        code: &'static str,
        message: String,
        details: Value,
    },
    #[error("{message}")]
    Unavailable { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            code: "validation_error",
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            code: "conflict",
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            code: "internal_error",
            message: message.into(),
            details,
        }
    }
    pub fn unavailable(message: impl Into<String>, details: Value) -> Self {
        Self::Unavailable {
            message: message.into(),
            details,
        }
    }

    /// Replaces the generic error code with a more specific one.
    pub fn with_code(self, code: &'static str) -> Self {
        match self {
            Self::Validation { message, details, .. } => Self::Validation {
                code,
                message,
                details,
            },
            Self::Conflict { message, details, .. } => Self::Conflict {
                code,
                message,
                details,
            },
            Self::Internal { message, details, .. } => Self::Internal {
                code,
                message,
                details,
            },
            other @ Self::Unavailable { .. } => other,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            Self::Validation {
                code,
                message,
                details,
            }
            | Self::Conflict {
                code,
                message,
                details,
            }
            | Self::Internal {
                code,
                message,
                details,
            } => (*code, message, details),
            Self::Unavailable { message, details } => ("unavailable", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        match e {
            ShortenError::InvalidDestination { reason } => AppError::bad_request(
                "Invalid destination URL",
                json!({ "reason": reason }),
            )
            .with_code("invalid_destination"),
            ShortenError::InvalidToken { reason } => {
                AppError::bad_request("Invalid token", json!({ "reason": reason }))
                    .with_code("invalid_token")
            }
            ShortenError::TokenTaken { token } => {
                AppError::conflict("Token is already taken", json!({ "token": token }))
                    .with_code("token_taken")
            }
            ShortenError::GenerationExhausted { attempts } => AppError::internal(
                "Failed to generate a unique token",
                json!({ "attempts": attempts }),
            )
            .with_code("generation_exhausted"),
            ShortenError::Unavailable(store) => store.into(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        tracing::error!("Link store unavailable: {}", e);
        AppError::unavailable("Link store unavailable", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}
