use pet_adoption::api::{create_boards_router, shutdown_signal, BoardsState};
use pet_adoption::application::BoardService;
use pet_adoption::infrastructure::{PostgresBoardStore, PostgresConfig, ServerConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boards_api=debug,pet_adoption=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let server = ServerConfig::from_env()?;
    let postgres = PostgresConfig::from_env();

    let store = Arc::new(PostgresBoardStore::connect(&postgres).await?);
    let state = BoardsState::new(BoardService::new(store.clone()), server.clone());
    let app = create_boards_router(state);

    let addr = server.addr()?;
    info!("Boards API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    info!("Boards API stopped");

    Ok(())
}
