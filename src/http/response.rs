//! Error responses.
//!
//! # Responsibilities
//! - Map check failures to status codes (not found → 404, otherwise 400)
//! - Render every error as `{"detail": "..."}`
//! - Re-shape axum extractor rejections into the same body
//!
//! # Design Decisions
//! - Checks never see HTTP types; the mapping lives here only
//! - Rejections keep axum's status code (400, 415, 422)

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::bronze::{CheckError, ErrorCategory};

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Everything a handler can fail with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A check or the gate rejected the input.
    #[error(transparent)]
    Check(#[from] CheckError),

    /// A required header was absent.
    #[error("Missing {0} header.")]
    MissingHeader(&'static str),

    /// The transport could not extract the input.
    #[error("{detail}")]
    Rejected { status: StatusCode, detail: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Check(err) => match err.category() {
                ErrorCategory::NotFound => StatusCode::NOT_FOUND,
                ErrorCategory::BadInput => StatusCode::BAD_REQUEST,
            },
            ApiError::MissingHeader(_) => StatusCode::BAD_REQUEST,
            ApiError::Rejected { status, .. } => *status,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
