//! Catalog Proxy Server

use std::{process, time::Duration};

use salvo::prelude::*;
use tracing::{error, info};

use crate::{
    config::ServerConfig,
    observability::{RequestLogging, init_subscriber},
    state::State,
};

mod config;
mod extensions;
mod healthcheck;
mod observability;
mod products;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Catalog proxy server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(source) = init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{source}");
        }

        process::exit(1);
    }

    let addr = config.socket_addr();
    let fallback = config.catalog.fallback_mode();

    info!(
        catalog = %config.catalog.catalog_api_url,
        ?fallback,
        "Starting server on {addr}"
    );

    let listener = TcpListener::new(addr).bind().await;

    let router = router::app_router(
        State::from_config(&config.catalog),
        RequestLogging::new(Duration::from_millis(
            config.logging.slow_request_threshold_ms,
        )),
    );

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
