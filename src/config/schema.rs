//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Each binary reads the section it owns plus `[observability]`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration shared by the relay and greeting binaries.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Relay endpoint settings.
    pub relay: RelayConfig,

    /// Greeting endpoints settings.
    pub greeting: GreetingConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Relay endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Bind address (e.g., "127.0.0.1:5000").
    pub bind_address: String,

    /// Path accepting uploads.
    pub upload_path: String,

    /// Downstream execution service the normalized text is posted to.
    pub downstream_url: String,

    /// Optional cap on the inbound body size. Unset means unlimited.
    pub max_body_bytes: Option<usize>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5000".to_string(),
            upload_path: "/upload".to_string(),
            downstream_url: "http://localhost:8000/execute".to_string(),
            max_body_bytes: None,
        }
    }
}

/// Greeting endpoints configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GreetingConfig {
    /// Bind address. Defaults next to the relay so both can run together.
    pub bind_address: String,

    /// File receiving debug-and-above log records.
    pub log_file: PathBuf,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:5001".to_string(),
            log_file: PathBuf::from("error.log"),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Console log filter, `RUST_LOG` syntax. `RUST_LOG` itself wins when set.
    pub log_level: String,

    /// Extra file sink for the relay process.
    pub log_file: Option<PathBuf>,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "upload_relay=debug,tower_http=debug,info".to_string(),
            log_file: None,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
