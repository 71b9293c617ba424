use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use memos::shared::infrastructure::memo_store::json_file::JsonFileMemoStore;
use memos::shell::config::Config;
use memos::shell::http::router;
use memos::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;
    let addr = config.addr()?;

    let store = Arc::new(JsonFileMemoStore::new(config.file_path.clone()));
    tracing::info!(path = %store.path().display(), "memo store ready");

    let app = router(AppState::new(store));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Memo API listening on http://{}/memo", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
