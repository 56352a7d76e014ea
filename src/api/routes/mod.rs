pub mod boards;
pub mod health;
pub mod pets;

use axum::{middleware, routing::get, Router};
use serde::Deserialize;
use std::path::Path;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::middleware::request_logger;
use crate::api::state::{BoardsState, PetsState, ReadinessCheck};

/// `?search=` as sent by the client. The value is opaque and goes to the
/// store as-is, including when it is missing. A repeated `search` key is
/// rejected by the extractor with 400 before any store is queried.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

pub fn create_pets_router(state: PetsState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/pets", get(pets::list_pets))
        .route("/get", get(pets::search_pets))
        .merge(health_routes::<PetsState>())
        .fallback_service(static_files(&static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn create_boards_router(state: BoardsState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/get", get(boards::get_board_thread))
        .merge(health_routes::<BoardsState>())
        .fallback_service(static_files(&static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn health_routes<S: ReadinessCheck>() -> Router<S> {
    Router::new()
        .route("/health", get(health::health_check::<S>))
        .route("/ready", get(health::readiness_check::<S>))
}

fn static_files(dir: &Path) -> ServeDir {
    ServeDir::new(dir).append_index_html_on_directories(true)
}
