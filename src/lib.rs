//! Upload relay library.
//!
//! Two independent HTTP servers:
//! - the relay, which normalizes uploaded text and forwards it to a
//!   downstream execution service, returning that service's JSON
//! - the greeting server, which answers two fixed strings and keeps a
//!   file log

pub mod config;
pub mod greeting;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod relay;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use relay::{Relay, RelayError};
