//! Upload relay entry point.
//!
//! ```text
//!   client ── POST /upload ──▶ relay (:5000) ── POST text/plain ──▶ downstream (:8000/execute)
//!          ◀── JSON / 500 ────                ◀── JSON / error ────
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use upload_relay::config::load_or_default;
use upload_relay::lifecycle::{signals, Shutdown};
use upload_relay::observability::{logging, logging::LogSink, metrics};
use upload_relay::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "upload-relay")]
#[command(about = "Relays uploaded text to the downstream execution service", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `relay.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.relay.bind_address = bind;
    }

    let sink = config
        .observability
        .log_file
        .as_ref()
        .map(|path| LogSink::open(path))
        .transpose()?;
    logging::init(&config.observability, sink.as_ref())?;

    tracing::info!("upload-relay v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.relay.bind_address,
        upload_path = %config.relay.upload_path,
        downstream_url = %config.relay.downstream_url,
        max_body_bytes = ?config.relay.max_body_bytes,
        log_file = ?sink.as_ref().map(LogSink::path),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let server = HttpServer::relay(&config.relay)?;
    let listener = TcpListener::bind(&config.relay.bind_address).await?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    server.run(listener, shutdown.subscribe()).await?;

    if let Some(sink) = &sink {
        sink.sync()?;
    }
    tracing::info!("Shutdown complete");
    Ok(())
}
