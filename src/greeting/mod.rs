//! Greeting endpoints: two fixed strings, no input.

use axum::{routing::get, Router};

use crate::observability::metrics;

pub const INDEX_GREETING: &str = "Hello IIS from Flask";
pub const HELLO_GREETING: &str = "Hello World!";

/// Routes served by the greeting process.
pub fn routes() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/Hello", get(hello))
}

async fn index() -> &'static str {
    tracing::debug!(route = "/", "Serving greeting");
    metrics::record_greeting("/");
    INDEX_GREETING
}

async fn hello() -> &'static str {
    tracing::debug!(route = "/Hello", "Serving greeting");
    metrics::record_greeting("/Hello");
    HELLO_GREETING
}
