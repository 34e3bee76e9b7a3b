mod config;
mod db;
mod errors;
mod models;
mod notify;
mod routes;
mod seed;
mod slug;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tera::Tera;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars or an
    // unreadable smtp secret)
    let config = Config::from_env()?;

    init_logging(&config)?;

    info!("Starting aboutme v{}", env!("CARGO_PKG_VERSION"));

    let db = db::connect(&config.mongo_uri).await?;

    // Reseeding is destructive: recent changes to the database are lost and
    // overridden with the seed data compiled into the binary.
    if config.seed {
        warn!("Seed flag set, flushing the store; data will be replaced with seed records");
        seed::seed_database(&db).await;
    }

    let templates = Tera::new(&format!("{}/templates/**/*", config.static_dir))
        .context("failed to load templates from the static directory")?;
    info!(static_dir = %config.static_dir, "Templates loaded");

    let state = AppState {
        db,
        templates: Arc::new(templates),
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initializes structured logging. `RUST_LOG` wins when set; otherwise the
/// verbosity flag picks debug or info. The file toggle appends to the
/// configured log file instead of stdout.
fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if config.verbose { "debug" } else { "info" }));

    if config.log_to_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)
            .with_context(|| format!("failed to open log file '{}'", config.log_file))?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(Arc::new(file))
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    Ok(())
}
