//! Response handling.
//!
//! # Responsibilities
//! - Render relay failures as the JSON error body
//! - Map every relay failure to 500 Internal Server Error
//!
//! Shapes:
//! ```text
//! {"status": "error", "message": "..."}
//! {"status": "error", "message": "Error from R API", "details": "<downstream body>"}
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::relay::RelayError;

/// JSON body sent on any relay failure.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&RelayError> for ErrorBody {
    fn from(err: &RelayError) -> Self {
        Self {
            status: "error",
            message: err.message(),
            details: err.details().map(str::to_owned),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::from(&self))).into_response()
    }
}
