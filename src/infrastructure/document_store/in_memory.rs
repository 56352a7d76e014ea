use async_trait::async_trait;
use serde_json::Value;
use std::sync::RwLock;

use crate::domain::{ports::PetStore, DomainError, Pet, PET_ID_FIELD};

/// Pet store backed by a vector, ranking by how often the search words
/// appear in a pet's string fields.
pub struct InMemoryPetStore {
    pets: RwLock<Vec<Pet>>,
}

impl InMemoryPetStore {
    pub fn new(pets: Vec<Pet>) -> Self {
        Self {
            pets: RwLock::new(pets),
        }
    }

    /// Builds the store from JSON objects; anything else is skipped.
    pub fn from_values(values: Vec<Value>) -> Self {
        Self::new(
            values
                .into_iter()
                .filter_map(|v| match v {
                    Value::Object(fields) => Some(Pet::new(fields)),
                    _ => None,
                })
                .collect(),
        )
    }
}

impl Default for InMemoryPetStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
}

fn count_matches(value: &Value, terms: &[String]) -> usize {
    match value {
        Value::String(s) => words(s).filter(|w| terms.contains(w)).count(),
        Value::Array(items) => items.iter().map(|v| count_matches(v, terms)).sum(),
        Value::Object(fields) => fields.values().map(|v| count_matches(v, terms)).sum(),
        _ => 0,
    }
}

fn score(pet: &Pet, terms: &[String]) -> usize {
    pet.0
        .iter()
        .filter(|(field, _)| field.as_str() != PET_ID_FIELD)
        .map(|(_, v)| count_matches(v, terms))
        .sum()
}

#[async_trait]
impl PetStore for InMemoryPetStore {
    async fn all_pets(&self) -> Result<Vec<Pet>, DomainError> {
        let pets = self
            .pets
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        Ok(pets.clone())
    }

    async fn search_pets(
        &self,
        term: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Pet>, DomainError> {
        // Same outcome as a text query whose $search is null.
        let term = term.ok_or_else(|| DomainError::query("$search needs a String"))?;
        let terms: Vec<String> = words(term).collect();

        let pets = self
            .pets
            .read()
            .map_err(|e| DomainError::internal(e.to_string()))?;

        let mut results: Vec<(usize, &Pet)> = pets
            .iter()
            .map(|pet| (score(pet, &terms), pet))
            .filter(|(score, _)| *score > 0)
            .collect();

        results.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(results
            .into_iter()
            .take(limit)
            .map(|(_, pet)| pet.clone().without_id())
            .collect())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
