//! PepMix web service entry point
//!
//! Loads configuration, initializes logging, and serves the calculator.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use websrv::config::Config;
use websrv::error::{Result, WebSrvError};
use websrv::{create_router, logging, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about = "websrv - PepMix calculator web service")]
struct Args {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        Config::load_from(path)?
    } else if let Ok(path) = std::env::var("CONFIG_FILE") {
        Config::load_from(path)?
    } else {
        Config::load()?
    };
    config.validate()?;

    logging::init(&config.logging.level);

    let bind_addr = config.bind_address();
    let state = AppState::new(config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| WebSrvError::address(format!("Failed to bind {bind_addr}: {e}")))?;
    info!("Listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
