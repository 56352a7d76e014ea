use async_trait::async_trait;
use std::sync::Arc;

use crate::application::{BoardService, PetSearchService};
use crate::domain::DomainError;
use crate::infrastructure::ServerConfig;

/// State that can tell whether its backing database answers.
#[async_trait]
pub trait ReadinessCheck: Clone + Send + Sync + 'static {
    const SERVICE: &'static str;
    const DATABASE: &'static str;

    async fn check_database(&self) -> Result<(), DomainError>;
}

#[derive(Clone)]
pub struct PetsState {
    pub pet_service: Arc<PetSearchService>,
    pub config: Arc<ServerConfig>,
}

impl PetsState {
    pub fn new(pet_service: PetSearchService, config: ServerConfig) -> Self {
        Self {
            pet_service: Arc::new(pet_service),
            config: Arc::new(config),
        }
    }
}

#[async_trait]
impl ReadinessCheck for PetsState {
    const SERVICE: &'static str = "pets-api";
    const DATABASE: &'static str = "mongodb";

    async fn check_database(&self) -> Result<(), DomainError> {
        self.pet_service.ping().await
    }
}

#[derive(Clone)]
pub struct BoardsState {
    pub board_service: Arc<BoardService>,
    pub config: Arc<ServerConfig>,
}

impl BoardsState {
    pub fn new(board_service: BoardService, config: ServerConfig) -> Self {
        Self {
            board_service: Arc::new(board_service),
            config: Arc::new(config),
        }
    }
}

#[async_trait]
impl ReadinessCheck for BoardsState {
    const SERVICE: &'static str = "boards-api";
    const DATABASE: &'static str = "postgres";

    async fn check_database(&self) -> Result<(), DomainError> {
        self.board_service.ping().await
    }
}
