//! Error taxonomy shared by every handler.
//!
//! All request failures funnel through [`AppError`], and
//! [`AppError::status_code`] is the single place where a failure class is
//! translated into an HTTP status.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::domain::repositories::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Failure of a single request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or unusable client input (body, path identifier).
    #[error("{message}")]
    ClientInput { message: String, details: Value },

    /// Credential missing, malformed, expired, or not issued by us.
    #[error("{message}")]
    Unauthorized { message: String, details: Value },

    /// Credential valid but lacking the scope the route requires.
    #[error("{message}")]
    Forbidden { message: String, details: Value },

    /// Any failure reported by the item store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::ClientInput {
            message: message.into(),
            details: json!({}),
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn forbidden(message: impl Into<String>, details: Value) -> Self {
        Self::Forbidden {
            message: message.into(),
            details,
        }
    }

    /// Maps the failure class to its response status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ClientInput { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code placed in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::ClientInput { .. } => "invalid_request",
            AppError::Unauthorized { .. } => "unauthorized",
            AppError::Forbidden { .. } => "forbidden",
            AppError::Store(_) => "store_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();

        let (message, details) = match self {
            AppError::ClientInput { message, details }
            | AppError::Unauthorized { message, details }
            | AppError::Forbidden { message, details } => (message, details),
            AppError::Store(err) => {
                // Store internals stay in the logs; callers get an opaque message.
                tracing::error!(error = %err, "Item store operation failed");
                ("Store operation failed".to_string(), json!({}))
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}
