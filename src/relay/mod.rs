//! Relay endpoint.
//!
//! # Data Flow
//! ```text
//! POST /upload (raw bytes)
//!     → normalize.rs (UTF-8 decode, drop '\r', trim)
//!     → client.rs (POST text/plain to the downstream service)
//!     → 200: downstream JSON returned verbatim
//!     → otherwise: RelayError, rendered as a JSON error body with status 500
//! ```
//!
//! # Design Decisions
//! - Exactly one downstream attempt per upload
//! - No shared mutable state; requests are fully independent
//! - Failure modes are explicit `RelayError` variants, all recovered in the handler

pub mod client;
pub mod error;
pub mod normalize;

use axum::{
    body::Bytes,
    http::{HeaderValue, StatusCode},
};
use serde_json::Value;

pub use client::{DownstreamClient, DownstreamResponse};
pub use error::{RelayError, DOWNSTREAM_FAILURE_MESSAGE};
pub use normalize::{decode, normalize};

/// The relay service: turns an uploaded body into the downstream's JSON answer.
#[derive(Clone)]
pub struct Relay {
    downstream: DownstreamClient,
}

impl Relay {
    pub fn new(downstream: DownstreamClient) -> Self {
        Self { downstream }
    }

    pub fn downstream(&self) -> &DownstreamClient {
        &self.downstream
    }

    /// Decode, normalize and forward one upload.
    pub async fn forward(
        &self,
        body: &Bytes,
        request_id: Option<&HeaderValue>,
    ) -> Result<Value, RelayError> {
        let text = decode(body)?;
        let payload = normalize(text);

        tracing::debug!(
            downstream = %self.downstream.url(),
            bytes = payload.len(),
            "Normalized payload to send downstream:\n{}",
            payload
        );

        let response = self.downstream.post_text(payload, request_id).await?;
        interpret(response)
    }
}

/// Map a downstream answer onto the relay's result.
pub fn interpret(response: DownstreamResponse) -> Result<Value, RelayError> {
    if response.status == StatusCode::OK {
        Ok(serde_json::from_slice(&response.body)?)
    } else {
        Err(RelayError::Downstream {
            status: response.status,
            body: response.text(),
        })
    }
}
