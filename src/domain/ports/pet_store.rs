use async_trait::async_trait;

use crate::domain::{errors::DomainError, Pet};

#[async_trait]
pub trait PetStore: Send + Sync {
    /// Every document in the collection, identifiers included.
    async fn all_pets(&self) -> Result<Vec<Pet>, DomainError>;

    /// Full-text search ordered by descending relevance, identifiers
    /// excluded. The term is handed to the store untouched, absent or not.
    async fn search_pets(&self, term: Option<&str>, limit: usize)
        -> Result<Vec<Pet>, DomainError>;

    async fn ping(&self) -> Result<(), DomainError>;
}
