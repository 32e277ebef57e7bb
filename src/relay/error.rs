//! Relay failure modes.

use axum::http::StatusCode;
use thiserror::Error;

/// Message reported when the downstream service answers with a non-200 status.
pub const DOWNSTREAM_FAILURE_MESSAGE: &str = "Error from R API";

/// Every way an upload can fail.
///
/// All variants surface to the caller as HTTP 500; only the JSON body differs.
#[derive(Error, Debug)]
pub enum RelayError {
    /// The inbound body could not be read (client hung up, size cap hit).
    #[error("failed to read request body: {0}")]
    ReadBody(#[source] axum::Error),

    /// The inbound body is not valid UTF-8.
    #[error("request body is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// The downstream request could not be built.
    #[error("invalid downstream request: {0}")]
    Request(#[from] axum::http::Error),

    /// Connecting to or talking with the downstream service failed.
    #[error("downstream request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    /// The downstream response body could not be read.
    #[error("failed to read downstream response: {0}")]
    ResponseBody(#[source] axum::Error),

    /// The downstream service answered 200 with a body that is not JSON.
    #[error("downstream returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The downstream service answered with a non-200 status.
    #[error("Error from R API (status {status})")]
    Downstream { status: StatusCode, body: String },
}

impl RelayError {
    /// Short label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            RelayError::ReadBody(_) | RelayError::Decode(_) | RelayError::Request(_) => "local_error",
            RelayError::InvalidJson(_) => "invalid_json",
            RelayError::Transport(_) | RelayError::ResponseBody(_) => "transport_error",
            RelayError::Downstream { .. } => "downstream_error",
        }
    }

    /// Text placed in the `message` field of the error body.
    ///
    /// Sources are appended so transport failures name the underlying cause
    /// (e.g. "connection refused") instead of hyper's terse summary.
    pub fn message(&self) -> String {
        if let RelayError::Downstream { .. } = self {
            return DOWNSTREAM_FAILURE_MESSAGE.to_string();
        }

        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !message.contains(&cause_text) {
                message.push_str(": ");
                message.push_str(&cause_text);
            }
            source = cause.source();
        }
        message
    }

    /// Raw downstream body, present only for non-success answers.
    pub fn details(&self) -> Option<&str> {
        match self {
            RelayError::Downstream { body, .. } => Some(body),
            _ => None,
        }
    }
}
