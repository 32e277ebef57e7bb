//! Request identification.
//!
//! # Responsibilities
//! - Generate a UUID v4 `x-request-id` when the client sent none
//! - Echo the id back on the response
//! - Expose the id to handlers so it can travel downstream and into logs

use axum::http::{HeaderName, HeaderValue, Request};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use uuid::Uuid;

/// Header carrying the request id.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Generates request ids from random UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// The pair of layers that set and propagate `x-request-id`.
///
/// `set` must sit outside `propagate` for the generated id to be echoed.
pub fn request_id_layers() -> (SetRequestIdLayer<UuidRequestId>, PropagateRequestIdLayer) {
    (
        SetRequestIdLayer::new(X_REQUEST_ID, UuidRequestId),
        PropagateRequestIdLayer::new(X_REQUEST_ID),
    )
}

/// Convenience accessor for the id on a request.
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&HeaderValue>;

    /// Id as text, "unknown" when missing or not printable.
    fn request_id_str(&self) -> &str {
        self.request_id()
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
    }
}

impl<B> RequestIdExt for Request<B> {
    fn request_id(&self) -> Option<&HeaderValue> {
        self.headers().get(X_REQUEST_ID)
    }
}
