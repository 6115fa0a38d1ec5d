//! Page error types with IntoResponse
//!
//! - store unreachable: 503, plain text `Connection failed: ...`
//! - statement failed: 500, generic HTML page, details only in the log
//! - unreadable request: 400, plain text

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::DbError;
use crate::render;

#[derive(Debug)]
pub enum ApiError {
    /// Store failure (connection or statement)
    Store(DbError),

    /// Request could not be parsed (400)
    BadRequest { message: String },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Store(e @ DbError::Connection(_)) => {
                tracing::error!(error = %e, "quote store unreachable");
                (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response()
            }
            Self::Store(e @ DbError::Query(_)) => {
                // Log the actual error, return generic page
                tracing::error!(error = %e, "quote store query failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(render::error_page())).into_response()
            }
            Self::BadRequest { message } => {
                tracing::debug!(%message, "rejected request");
                (StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Store(e)
    }
}
