//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → request.rs (assign x-request-id)
//!     → relay / greeting handlers
//!     → response.rs (error bodies)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id_layers, RequestIdExt, UuidRequestId, X_REQUEST_ID};
pub use response::ErrorBody;
pub use server::HttpServer;
