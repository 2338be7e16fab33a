//! Startup: open the board and serve it

use crate::routes::router;
use crate::state::AppState;
use projectboard_config::BoardConfig;
use projectboard_kanban::board::InitBoard;
use projectboard_kanban::{BoardContext, Execute, KanbanError};
use std::future::Future;
use tokio::net::TcpListener;

/// Open the configured store and seed it when asked to
pub async fn build_state(config: &BoardConfig) -> Result<AppState, KanbanError> {
    if config.database.is_in_memory() {
        tracing::warn!("Board database is in memory; nothing is kept after shutdown");
    }
    let ctx = BoardContext::open(&config.database.path)?;

    if config.api.seed_on_startup {
        InitBoard::new().execute(&ctx).await?;
    }

    Ok(AppState::new(ctx, config.api.status_policy))
}

/// Serve the Board API on `listener` until `shutdown` resolves
pub async fn serve<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("ProjectBoard API listening on http://{}", addr);
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("ProjectBoard API stopped");
    Ok(())
}

/// Resolves on Ctrl-C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use projectboard_kanban::store::IN_MEMORY_PATH;
    use std::path::PathBuf;

    fn memory_config() -> BoardConfig {
        let mut config = BoardConfig::default();
        config.database.path = PathBuf::from(IN_MEMORY_PATH);
        config
    }

    #[tokio::test]
    async fn test_build_state_seeds_defaults() {
        let state = build_state(&memory_config()).await.unwrap();
        assert_eq!(state.ctx.column_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_build_state_without_seeding() {
        let mut config = memory_config();
        config.api.seed_on_startup = false;

        let state = build_state(&config).await.unwrap();
        assert_eq!(state.ctx.column_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let state = build_state(&memory_config()).await.unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();

        serve(listener, state, async {}).await.unwrap();
    }
}
