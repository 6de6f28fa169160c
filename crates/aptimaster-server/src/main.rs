//! AptiMaster Server binary
//!
//! Starts the HTTP API backed by MySQL. The pool is lazy, so the server
//! comes up in safe mode while the database is down and switches over as
//! soon as a connection succeeds.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use aptimaster_server::config::Config;
use aptimaster_server::storage::{seed_questions, Database, MemoryStore};
use aptimaster_server::{router, AppState};

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!(
        "Starting AptiMaster Server v{}",
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = run_server().await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Config loaded: bind={}, db={}@{}:{}/{}",
        config.bind_address,
        config.store.user,
        config.store.host,
        config.store.port,
        config.store.database
    );

    let db = Arc::new(Database::connect_lazy(&config.store));
    let fallback = Arc::new(MemoryStore::new(seed_questions()));

    let app = router(AppState { db, fallback });

    let addr: SocketAddr = config
        .bind_address
        .parse()
        .context("Failed to parse bind address")?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!("Server listening on {}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
