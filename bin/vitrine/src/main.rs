//! Vitrine - minimal GraphQL gateway.
//!
//! Serves a three-field schema: a built-in book catalog plus two listings
//! proxied from remote HTTP APIs.
//!
//! # Usage
//!
//! ```bash
//! # Start with defaults (port 4000)
//! vitrine
//!
//! # Start with environment overrides
//! PORT=8080 PEOPLE_API_URL=http://people.internal/api/ vitrine
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::signal;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use vitrine_core::models::BookCatalog;
use vitrine_core::ports::{CharacterSource, PersonSource};
use vitrine_graphql::{build_schema, serve_with_shutdown, ServerConfig};
use vitrine_upstream::{CharacterApi, CharacterApiConfig, PeopleApi, PeopleApiConfig};

/// Vitrine CLI - GraphQL gateway.
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Vitrine - GraphQL gateway over a book catalog and two remote APIs")]
#[command(version)]
struct Cli {
    /// GraphQL server port.
    #[arg(long, env = "PORT", default_value = "4000")]
    port: u16,

    /// Bind address.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Character API endpoint URL.
    #[arg(
        long,
        env = "CHARACTER_API_URL",
        default_value = "https://rickandmortyapi.com/api/character"
    )]
    character_url: String,

    /// People API endpoint URL.
    #[arg(long, env = "PEOPLE_API_URL", default_value = "http://localhost:9090/api/")]
    people_url: String,

    /// Timeout for upstream requests, in seconds.
    #[arg(long, env = "UPSTREAM_TIMEOUT_SECS", default_value = "10")]
    upstream_timeout_secs: u64,

    /// Disable the GraphiQL playground.
    #[arg(long)]
    no_playground: bool,

    /// Enable JSON log output.
    #[arg(long, env = "JSON_LOGS")]
    json_logs: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(&cli.log_level, cli.json_logs);

    // ─────────────────────────────────────────────────────────────────────────
    // 🚀 STARTUP
    // ─────────────────────────────────────────────────────────────────────────
    info!("🚀 Starting Vitrine gateway");
    debug!(characters = %cli.character_url, people = %cli.people_url, "Upstream endpoints");

    // One shared HTTP client; the per-request timeout is the only outbound
    // robustness policy - no retries, no caching.
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.upstream_timeout_secs))
        .build()
        .context("Failed to build upstream HTTP client")?;

    let characters: Arc<dyn CharacterSource> = Arc::new(CharacterApi::new(
        client.clone(),
        CharacterApiConfig {
            endpoint: cli.character_url,
        },
    ));
    let people: Arc<dyn PersonSource> = Arc::new(PeopleApi::new(
        client,
        PeopleApiConfig {
            endpoint: cli.people_url,
        },
    ));

    let schema = build_schema(BookCatalog::builtin(), characters, people);

    let server_config = ServerConfig {
        host: cli.host,
        port: cli.port,
        enable_playground: !cli.no_playground,
    };

    // ─────────────────────────────────────────────────────────────────────────
    // ⚡ SERVE
    // ─────────────────────────────────────────────────────────────────────────
    info!("   ⚡ GraphQL:  http://localhost:{}/graphql", cli.port);
    info!("   Press Ctrl+C to stop");

    serve_with_shutdown(schema, server_config, shutdown_signal())
        .await
        .context("GraphQL server failed")?;

    info!("🛑 Shutdown complete");
    Ok(())
}

/// Initialize tracing subscriber.
fn init_tracing(level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if json {
        fmt().with_env_filter(filter).json().init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .init();
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
