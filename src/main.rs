//! StreetPass backend entry point.
//!
//! Parses the command line, loads configuration from a TOML file (or uses the
//! built-in defaults), initializes tracing, sets up the Axum router and starts
//! the HTTP server.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use streetpass_backend::config::{AppConfig, LogFormat, DEFAULT_BIND_ADDR, DEFAULT_CONFIG_PATH};
use streetpass_backend::{create_router, start_server};

/// StreetPass backend: liveness API
#[derive(Parser, Debug)]
#[command(name = "streetpass-backend", version, about)]
struct Args {
    /// Path to configuration file [default: config/default.toml if present,
    /// otherwise built-in defaults]
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "streetpass_backend=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Enable debug mode (verbose default log filter)
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(|| {
        Path::new(DEFAULT_CONFIG_PATH)
            .exists()
            .then(|| DEFAULT_CONFIG_PATH.to_string())
    });

    let mut config = match &config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if args.debug {
        config.logging.debug = true;
    }

    // Priority: CLI > env > config default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| config.logging.default_filter().to_string());
    init_tracing(&log_filter, config.logging.format);

    match &config_path {
        Some(path) => tracing::info!(path = %path, "Loaded configuration"),
        None => tracing::info!(default_addr = DEFAULT_BIND_ADDR, "Using built-in configuration"),
    }
    tracing::debug!(?config, "Effective configuration");

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}

fn init_tracing(filter: &str, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(EnvFilter::new(filter));
    match format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}
