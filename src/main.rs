//! regex-test-server
//!
//! HTTP front door for a regex-testing service.
//!
//! # Architecture Overview
//!
//! ```text
//!                  ┌────────────────────────────────────────────────┐
//!                  │                REGEX TEST SERVER                │
//!                  │                                                 │
//!  Client Request  │  ┌─────────┐   ┌───────────┐   ┌────────────┐  │
//!  ────────────────┼─▶│  http   │──▶│  routing  │──▶│  handlers  │  │
//!                  │  │ server  │   │   table   │   │            │  │
//!                  │  └─────────┘   └───────────┘   └─────┬──────┘  │
//!                  │                                       │         │
//!                  │       ┌──────────┐   ┌──────────┐     │         │
//!                  │       │  assets  │   │ normalize│◀────┤         │
//!                  │       │  cache   │   │ → runner │     │         │
//!                  │       └──────────┘   └────┬─────┘     │         │
//!                  │                           ▼           ▼         │
//!  Client Response │                      ┌─────────────────────┐    │
//!  ◀───────────────┼──────────────────────│  respond (JSON/P)   │    │
//!                  │                      └─────────────────────┘    │
//!                  │                                                 │
//!                  │  config ─ lifecycle/signals ─ observability     │
//!                  └────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use regex_test_server::config::ServerConfig;
use regex_test_server::http::HttpServer;
use regex_test_server::runner::RustRunner;
use regex_test_server::{lifecycle, observability};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "regex_test_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "regex-test-server v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    // One environment read; handlers never touch the environment themselves.
    let config = ServerConfig::from_env()?;

    tracing::info!(
        hostname = %config.listener.hostname,
        port = config.listener.port,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    // Static assets load here; a missing file must abort before we listen.
    let server = HttpServer::new(config.clone(), Arc::new(RustRunner))?;

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    lifecycle::signals::install();

    let listener = TcpListener::bind(config.listener.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    server.run(listener).await?;

    Ok(())
}
