//! Application error type and its HTTP mapping.
//!
//! Every failure reaching the HTTP boundary is rendered as
//! `{ "error": <message>, "code": <kind> }`.
//!
//! | Variant      | Status | `code`             |
//! |--------------|--------|--------------------|
//! | `Validation` | 400    | `validation_error` |
//! | `Conflict`   | 409    | `conflict`         |
//! | `Resolve`    | 500    | `network_error` / `extraction_error` |
//! | `Store`      | 500    | `store_error`      |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::ValidationErrors;

use crate::domain::resolver::ResolveError;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },

    /// Unique constraint hit on insert. The orchestrator turns this into a
    /// cache hit; it only reaches clients if that re-read fails.
    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Datastore unreachable or operation rejected. `details` is logged, never
    /// sent to the client.
    #[error("{message}")]
    Store { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn store(message: impl Into<String>, details: Value) -> Self {
        Self::Store {
            message: message.into(),
            details,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Resolve(_) | AppError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::Conflict { .. } => "conflict",
            AppError::Resolve(ResolveError::Network(_)) => "network_error",
            AppError::Resolve(ResolveError::Extraction { .. }) => "extraction_error",
            AppError::Store { .. } => "store_error",
        }
    }

    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
            code: self.code(),
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation { message } => {
                tracing::debug!(code = self.code(), "Rejected request: {}", message);
            }
            AppError::Conflict { message, details } => {
                tracing::warn!(code = self.code(), %details, "{}", message);
            }
            AppError::Resolve(ResolveError::Extraction { resolved_url }) => {
                tracing::warn!(code = self.code(), %resolved_url, "{}", self);
            }
            AppError::Resolve(ResolveError::Network(reason)) => {
                tracing::error!(code = self.code(), %reason, "Map URL resolution failed");
            }
            AppError::Store { message, details } => {
                tracing::error!(code = self.code(), %details, "{}", message);
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.log();
        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}

pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::conflict(
            "Unique constraint violation",
            json!({ "constraint": db.constraint() }),
        );
    }

    AppError::store("Database error", json!({ "reason": e.to_string() }))
}
