//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and servers produce:
//!     → logging.rs (structured log events: stderr console, optional file sink)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Operator console / error.log
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every request span
//! - The file sink is opened by the binary and handed to `logging::init`
//! - Metrics are cheap; without an installed recorder they are no-ops

pub mod logging;
pub mod metrics;
