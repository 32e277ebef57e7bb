//! Greeting server entry point.
//!
//! Serves `GET /` and `GET /Hello` and records debug-and-above logs to the
//! configured file (`error.log` by default).

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use upload_relay::config::load_or_default;
use upload_relay::lifecycle::{signals, Shutdown};
use upload_relay::observability::{logging, logging::LogSink, metrics};
use upload_relay::HttpServer;

#[derive(Parser, Debug)]
#[command(name = "greeting-server")]
#[command(about = "Serves the two greeting routes", long_about = None)]
struct Args {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `greeting.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,

    /// Override `greeting.log_file`.
    #[arg(short, long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.greeting.bind_address = bind;
    }
    if let Some(log_file) = args.log_file {
        config.greeting.log_file = log_file;
    }

    let sink = LogSink::open(&config.greeting.log_file)?;
    logging::init(&config.observability, Some(&sink))?;

    tracing::info!(
        bind_address = %config.greeting.bind_address,
        log_file = %sink.path().display(),
        "greeting-server starting"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.greeting.bind_address).await?;

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    HttpServer::greeting()
        .run(listener, shutdown.subscribe())
        .await?;

    tracing::info!("Shutdown complete");
    sink.sync()?;
    Ok(())
}
