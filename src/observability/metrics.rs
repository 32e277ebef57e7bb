//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): uploads by outcome
//! - `relay_request_duration_seconds` (histogram): upload latency by outcome
//! - `greeting_requests_total` (counter): greetings by route

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Uploads counter metric name.
pub const METRIC_RELAY_REQUESTS: &str = "relay_requests_total";
/// Upload latency metric name.
pub const METRIC_RELAY_DURATION: &str = "relay_request_duration_seconds";
/// Greetings counter metric name.
pub const METRIC_GREETING_REQUESTS: &str = "greeting_requests_total";

/// Install the Prometheus recorder and its scrape listener.
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;

    describe_counter!(METRIC_RELAY_REQUESTS, "Uploads handled, by outcome");
    describe_histogram!(
        METRIC_RELAY_DURATION,
        "Time from upload received to response, in seconds"
    );
    describe_counter!(METRIC_GREETING_REQUESTS, "Greetings served, by route");

    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record one finished upload.
pub fn record_upload(outcome: &'static str, start: Instant) {
    counter!(METRIC_RELAY_REQUESTS, "outcome" => outcome).increment(1);
    histogram!(METRIC_RELAY_DURATION, "outcome" => outcome)
        .record(start.elapsed().as_secs_f64());
}

pub fn record_greeting(route: &'static str) {
    counter!(METRIC_GREETING_REQUESTS, "route" => route).increment(1);
}
