//! Creature lookup proxy.
//!
//! ```text
//!   POST /_v/find-pokemon {id}
//!   ───────────────────────────▶ ┌──────────────┐   GET <base>/<id>   ┌──────────┐
//!                                │ lookup       │ ──────────────────▶ │ PokeAPI  │
//!   200 record | {message}       │ + height rule│ ◀────────────────── │          │
//!   ◀─────────────────────────── └──────────────┘                     └──────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use creature_proxy::config::validation::validate_config;
use creature_proxy::config::{load_config, ConfigError, ProxyConfig};
use creature_proxy::lifecycle::{signals, startup, Shutdown};
use creature_proxy::observability::logging;

#[derive(Parser)]
#[command(name = "creature-proxy")]
#[command(about = "Proxy that looks creatures up on PokeAPI", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long, env = "CREATURE_PROXY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(long)]
    bind: Option<String>,

    /// Override the upstream base URL.
    #[arg(long)]
    upstream: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ProxyConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    if let Some(upstream) = cli.upstream {
        config.upstream.base_url = upstream;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    logging::init_logging(&config.observability);

    tracing::info!("creature-proxy v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        max_height = config.rules.max_height,
        "Configuration loaded"
    );

    let shutdown = Shutdown::new();
    let stop_on_signal = async {
        signals::wait_for_signal().await;
        shutdown.trigger();
        // Keep waiting so the server can drain before main returns.
        std::future::pending::<()>().await
    };

    tokio::select! {
        result = startup::serve(config, &shutdown) => result?,
        _ = stop_on_signal => {}
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
