//! SEO Inspector server (seoi-server) - Main entry point
//!
//! Serves the meta tag analysis API over HTTP.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use seoi_common::config::{load_toml_config, ConfigOverrides, ServiceConfig};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use seoi_server::analyzer::Analyzer;
use seoi_server::{build_router, AppState};

/// Command-line arguments for seoi-server
#[derive(Parser, Debug)]
#[command(name = "seoi-server")]
#[command(about = "SEO meta tag inspection service")]
#[command(version)]
struct Args {
    /// Address to bind
    #[arg(long, env = "SEOI_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SEOI_PORT")]
    port: Option<u16>,

    /// Timeout for fetching target pages, in seconds
    #[arg(long, env = "SEOI_FETCH_TIMEOUT_SECS")]
    fetch_timeout_secs: Option<u64>,

    /// User-Agent header sent to target sites
    #[arg(long, env = "SEOI_USER_AGENT")]
    user_agent: Option<String>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, env = "SEOI_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path to a TOML config file
    #[arg(short, long, env = "SEOI_CONFIG")]
    config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            fetch_timeout_secs: self.fetch_timeout_secs,
            user_agent: self.user_agent.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let file = load_toml_config(args.config.as_deref()).context("Failed to load config file")?;
    let config =
        ServiceConfig::resolve(args.overrides(), file).context("Invalid configuration")?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "seoi_server={level},seoi_common={level},tower_http={level}",
                    level = config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting SEO Inspector (seoi-server) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    match &args.config {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("Config file: default locations"),
    }
    info!(
        "Fetch timeout: {}s, user agent: {}",
        config.fetch_timeout.as_secs(),
        config.user_agent
    );

    let analyzer = Analyzer::new(&config).context("Failed to initialize analyzer")?;
    let app = build_router(AppState::new(analyzer));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("seoi-server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
