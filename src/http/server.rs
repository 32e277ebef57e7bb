//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Routers for the relay and greeting servers
//! - Wire up middleware (request ID, tracing)
//! - Bind server to listener and drain on shutdown
//! - Run the upload handler and map its outcome to a response

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{uri::InvalidUri, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::greeting;
use crate::http::request::{request_id_layers, RequestIdExt};
use crate::observability::metrics;
use crate::relay::{DownstreamClient, Relay, RelayError};

/// State injected into the upload handler.
#[derive(Clone)]
pub struct RelayState {
    pub relay: Relay,
    /// Inbound body cap; `usize::MAX` when unlimited.
    pub max_body_bytes: usize,
}

/// An HTTP server hosting either the relay or the greeting routes.
pub struct HttpServer {
    name: &'static str,
    router: Router,
}

impl HttpServer {
    /// Build the relay server from its configuration.
    pub fn relay(config: &RelayConfig) -> Result<Self, InvalidUri> {
        let url: Uri = config.downstream_url.parse()?;
        let state = RelayState {
            relay: Relay::new(DownstreamClient::new(url)),
            max_body_bytes: config.max_body_bytes.unwrap_or(usize::MAX),
        };

        let router = Router::new()
            .route(&config.upload_path, post(upload_handler))
            .with_state(state);

        Ok(Self {
            name: "relay",
            router: Self::with_middleware(router),
        })
    }

    /// Build the greeting server.
    pub fn greeting() -> Self {
        Self {
            name: "greeting",
            router: Self::with_middleware(greeting::routes()),
        }
    }

    fn with_middleware(router: Router) -> Router {
        let (set_request_id, propagate_request_id) = request_id_layers();

        router.layer(
            ServiceBuilder::new()
                .layer(set_request_id)
                .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::debug_span!(
                        "http",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request.request_id_str(),
                    )
                }))
                .layer(propagate_request_id),
        )
    }

    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The fully layered router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        let name = self.name;
        tracing::info!(
            server = name,
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!(server = name, "Shutdown signal received, draining");
            })
            .await?;

        tracing::info!(server = name, "HTTP server stopped");
        Ok(())
    }
}

/// Upload handler.
/// Buffers the body, relays it, and renders either the downstream JSON or an error body.
async fn upload_handler(State(state): State<RelayState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request.request_id().cloned();
    let request_id_str = request.request_id_str().to_string();

    let result = async {
        let body = axum::body::to_bytes(request.into_body(), state.max_body_bytes)
            .await
            .map_err(RelayError::ReadBody)?;
        state.relay.forward(&body, request_id.as_ref()).await
    }
    .await;

    match result {
        Ok(value) => {
            metrics::record_upload("ok", start_time);
            (StatusCode::OK, Json(value)).into_response()
        }
        Err(err) => {
            match &err {
                RelayError::Downstream { status, .. } => tracing::warn!(
                    request_id = %request_id_str,
                    status = %status,
                    "Downstream answered with an error"
                ),
                RelayError::Transport(_) | RelayError::ResponseBody(_) => tracing::error!(
                    request_id = %request_id_str,
                    error = %err.message(),
                    "Downstream unreachable"
                ),
                _ => tracing::warn!(
                    request_id = %request_id_str,
                    error = %err.message(),
                    "Upload rejected"
                ),
            }
            metrics::record_upload(err.outcome(), start_time);
            err.into_response()
        }
    }
}
