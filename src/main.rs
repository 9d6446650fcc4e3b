mod config;
mod cors;
mod error;
mod models;
mod routes;
mod store;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{config::Config, store::MovieStore};

pub struct AppState {
    pub config: Arc<Config>,
    pub store: RwLock<MovieStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movies_api=debug,tower_http=debug".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let store = match &config.seed_path {
        Some(path) => MovieStore::load(path)?,
        None => MovieStore::from_json(store::BUNDLED_SEED)?,
    };
    tracing::info!(
        movies = store.len(),
        seed = ?config.seed_path.as_deref().map(|p| p.display().to_string()),
        "seed dataset loaded"
    );

    let state = Arc::new(AppState { config: config.clone(), store: RwLock::new(store) });
    let app = routes::router(state)?;

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl+c");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
