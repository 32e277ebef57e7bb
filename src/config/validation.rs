//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses and the downstream URL are usable
//! - Check value ranges (body cap > 0, log filter parses)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::Uri;
use tracing_subscriber::EnvFilter;

use crate::config::schema::AppConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `relay.bind_address`.
    pub field: &'static str,
    /// Human readable description.
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Characters the router treats as capture or wildcard syntax.
const ROUTE_SYNTAX: [char; 4] = [':', '*', '{', '}'];

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_socket_addr(&mut errors, "relay.bind_address", &config.relay.bind_address);
    check_socket_addr(&mut errors, "greeting.bind_address", &config.greeting.bind_address);
    if config.observability.metrics_enabled {
        check_socket_addr(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if let Err(message) = check_downstream_url(&config.relay.downstream_url) {
        errors.push(ValidationError::new("relay.downstream_url", message));
    }

    let path = &config.relay.upload_path;
    if !path.starts_with('/') {
        errors.push(ValidationError::new(
            "relay.upload_path",
            format!("'{}' must start with '/'", path),
        ));
    } else if let Some(c) = path.chars().find(|c| ROUTE_SYNTAX.contains(c)) {
        errors.push(ValidationError::new(
            "relay.upload_path",
            format!("'{}' contains '{}', which the router reads as a capture", path, c),
        ));
    }

    if config.relay.max_body_bytes == Some(0) {
        errors.push(ValidationError::new(
            "relay.max_body_bytes",
            "must be greater than zero when set",
        ));
    }

    if let Err(e) = EnvFilter::try_new(&config.observability.log_level) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("invalid filter '{}': {}", config.observability.log_level, e),
        ));
    }

    if config.greeting.log_file.as_os_str().is_empty() {
        errors.push(ValidationError::new("greeting.log_file", "must not be empty"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_socket_addr(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if let Err(e) = value.parse::<SocketAddr>() {
        errors.push(ValidationError::new(
            field,
            format!("'{}' is not a socket address: {}", value, e),
        ));
    }
}

/// The downstream client speaks plain HTTP only.
fn check_downstream_url(value: &str) -> Result<(), String> {
    let uri: Uri = value
        .parse()
        .map_err(|e| format!("'{}' is not a valid URI: {}", value, e))?;

    match uri.scheme_str() {
        Some("http") => {}
        Some(other) => return Err(format!("unsupported scheme '{}', expected http", other)),
        None => return Err(format!("'{}' must be absolute", value)),
    }

    if uri.host().is_none() {
        return Err(format!("'{}' has no host", value));
    }

    Ok(())
}
