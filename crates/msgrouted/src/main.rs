//! msgrouted — the message routing daemon.
//!
//! Loads the tier schedule and recipient limits once, then serves
//! `POST /message/route` until interrupted.
//!
//! # Usage
//!
//! ```text
//! msgrouted serve --config /etc/msgroute/msgroute.toml
//! msgrouted check --config /etc/msgroute/msgroute.toml
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use msgroute_alloc::RouteEngine;
use msgroute_core::RouteConfig;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,msgrouted=debug,msgroute=debug";

#[derive(Parser)]
#[command(name = "msgrouted", about = "Tiered message routing daemon", version)]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the routing API.
    Serve {
        /// Path to msgroute.toml. Built-in defaults are used when omitted.
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Listen address, overriding `[server].listen`.
        #[arg(long)]
        listen: Option<SocketAddr>,
    },
    /// Validate a config file, print the effective config, and exit.
    Check {
        #[arg(short, long, value_name = "FILE")]
        config: PathBuf,
    },
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<RouteConfig> {
    let config = match path {
        Some(path) => RouteConfig::from_file(path)?,
        None => RouteConfig::default(),
    };
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    match cli.command {
        Command::Serve { config, listen } => serve(config, listen).await,
        Command::Check { config } => check(&config),
    }
}

fn check(path: &Path) -> anyhow::Result<()> {
    let config = RouteConfig::from_file(path)?;
    let engine = RouteEngine::from_config(&config)?;
    info!(
        config = %path.display(),
        tiers = engine.schedule().len(),
        max_recipients = engine.policy().max_recipients(),
        "configuration is valid"
    );
    print!("{}", config.to_toml_string()?);
    Ok(())
}

async fn serve(config_path: Option<PathBuf>, listen: Option<SocketAddr>) -> anyhow::Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "msgrouted starting");

    let config = load_config(config_path.as_deref())?;
    let engine = RouteEngine::from_config(&config)?;
    info!(
        tiers = ?engine.schedule().capacities().collect::<Vec<_>>(),
        max_recipients = engine.policy().max_recipients(),
        "route engine initialized"
    );

    let addr = listen.unwrap_or(config.server.listen);
    let router = msgroute_api::build_router(engine);

    info!(%addr, "API server starting");
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "failed to install CTRL+C handler");
                std::future::pending::<()>().await;
            }
            info!("shutdown signal received");
        })
        .await?;

    info!("msgrouted stopped");
    Ok(())
}
