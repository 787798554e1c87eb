//! LinguAPI challenge server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (request id, trace, timeout, body limit)
//!                         │
//!                         ▼
//!                     routing::table ──▶ http::handlers ──▶ bronze checks
//!                         │                                     │
//!                         ▼                                     ▼
//!                     docs::openapi                      Ok(flag) / CheckError
//!                     (listed routes only)                      │
//!     Client Response                                           ▼
//!     ◀────────────── http::response ({"detail"} + 400/404) ◀───┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use linguapi::config::{load_config, ChallengeConfig};
use linguapi::lifecycle;
use linguapi::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "linguapi")]
#[command(about = "Stateless API-basics challenge server", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long, env = "LINGUAPI_CONFIG")]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ChallengeConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        linguapi::config::validate_config(&config)
            .map_err(linguapi::config::ConfigError::Validation)?;
    }

    init_logging(&config.observability);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = ?cli.config,
        "linguapi starting"
    );

    lifecycle::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
