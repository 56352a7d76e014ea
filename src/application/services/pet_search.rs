use std::sync::Arc;
use tracing::instrument;

use crate::domain::{ports::PetStore, DomainError, Pet, SEARCH_LIMIT};

pub struct PetSearchService {
    store: Arc<dyn PetStore>,
    limit: usize,
}

impl PetSearchService {
    pub fn new(store: Arc<dyn PetStore>) -> Self {
        Self {
            store,
            limit: SEARCH_LIMIT,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Pet>, DomainError> {
        self.store.all_pets().await
    }

    /// Ranks pets by text relevance. Ranking, ties and the handling of an
    /// absent or empty term all belong to the store.
    #[instrument(skip(self))]
    pub async fn search(&self, term: Option<&str>) -> Result<Vec<Pet>, DomainError> {
        let pets = self.store.search_pets(term, self.limit).await?;
        tracing::debug!(matches = pets.len(), "pet search finished");
        Ok(pets)
    }

    pub async fn ping(&self) -> Result<(), DomainError> {
        self.store.ping().await
    }
}
