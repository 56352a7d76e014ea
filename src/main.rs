use pet_adoption::api::{create_pets_router, shutdown_signal, PetsState};
use pet_adoption::application::PetSearchService;
use pet_adoption::infrastructure::{MongoConfig, MongoPetStore, ServerConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pets_api=debug,pet_adoption=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let server = ServerConfig::from_env()?;
    let mongo = MongoConfig::from_env();

    let store = Arc::new(MongoPetStore::connect(&mongo).await?);
    let state = PetsState::new(PetSearchService::new(store.clone()), server.clone());
    let app = create_pets_router(state);

    let addr = server.addr()?;
    info!("Pets API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.shutdown().await;
    info!("Pets API stopped");

    Ok(())
}
