//! API error type and status-code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use staffdir_core::{ConstraintViolation, EmployeeId, RepoError};

/// Transport-level error for employee endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Constraint(#[from] ConstraintViolation),

    #[error("employee {0} not found")]
    NotFound(EmployeeId),

    /// Storage or internal failure; details go to the log, not the wire.
    #[error("internal server error")]
    Internal(String),
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(violation) => Self::Constraint(violation),
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Internal(other.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Constraint(ConstraintViolation::DuplicateEmail { .. }) => StatusCode::CONFLICT,
            Self::Constraint(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(detail) => {
                log::error!("event=request_failed module=server status=error error={detail}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
