//! salesplay-rp (Roleplay) - scripted sales persona service
//!
//! Serves the roleplay endpoints for the trainer UI:
//! - POST /chat: streamed persona reply (SSE)
//! - POST /feedback: end-of-session report
//! - GET /audio: placeholder WebSocket
//! - GET /health

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use salesplay_common::config::{resolve_config_path, ConfigOverrides, ServerConfig};
use salesplay_common::Engine;
use salesplay_rp::{build_router, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for salesplay-rp
#[derive(Parser, Debug)]
#[command(name = "salesplay-rp")]
#[command(about = "Scripted sales roleplay persona service")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Interface to bind
    #[arg(long, env = "SALESPLAY_HOST")]
    host: Option<String>,

    /// Browser origin allowed by CORS
    #[arg(long, env = "CLIENT_ORIGIN")]
    client_origin: Option<String>,

    /// Delay between streamed reply characters, in milliseconds
    #[arg(long, env = "SALESPLAY_TOKEN_DELAY_MS")]
    token_delay_ms: Option<u64>,

    /// Log level when RUST_LOG is not set
    #[arg(long, env = "SALESPLAY_LOG_LEVEL")]
    log_level: Option<String>,

    /// TOML config file (defaults to $SALESPLAY_CONFIG, then the platform config dir)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env values feed clap's env lookups; a missing file is fine
    let dotenv_path = dotenvy::dotenv().ok();

    let args = Args::parse();

    let config_path = resolve_config_path(args.config.as_deref());
    let config = ServerConfig::load(config_path.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(ConfigOverrides {
            host: args.host,
            port: args.port,
            client_origin: args.client_origin,
            token_delay_ms: args.token_delay_ms,
            log_level: args.log_level,
        });

    let level = config.logging.level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("salesplay_rp={level},salesplay_common={level},tower_http={level}").into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting salesplay roleplay service (salesplay-rp) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    if let Some(path) = &dotenv_path {
        info!("Loaded environment from {}", path.display());
    }
    match &config_path {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("No config file, using defaults and overrides"),
    }

    config.validate().context("Invalid configuration")?;

    let engine = Engine::default();
    info!("Persona: {}", engine.persona().name);

    let addr = config.bind_address();
    info!("Allowed client origin: {}", config.client_origin);

    let state = AppState::new(engine, config);
    let app = build_router(state).context("Failed to build router")?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("salesplay-rp listening on http://{}", addr);
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
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn env_name(id: &str) -> Option<String> {
        Args::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_env())
            .map(|env| env.to_string_lossy().into_owned())
    }

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_env_names() {
        assert_eq!(env_name("host").as_deref(), Some("SALESPLAY_HOST"));
        assert_eq!(env_name("port").as_deref(), Some("PORT"));
        assert_eq!(env_name("client_origin").as_deref(), Some("CLIENT_ORIGIN"));
        assert_eq!(env_name("token_delay_ms").as_deref(), Some("SALESPLAY_TOKEN_DELAY_MS"));
    }

    #[test]
    fn test_flags_parse_into_overrides() {
        let args = Args::try_parse_from([
            "salesplay-rp",
            "--host",
            "127.0.0.1",
            "--port",
            "9001",
            "--token-delay-ms",
            "0",
        ])
        .unwrap();
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9001));
        assert_eq!(args.token_delay_ms, Some(0));
    }
}
