//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (binary main):
//!     Load config → Validate → Open log sink → Init logging → Bind → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Trigger graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
