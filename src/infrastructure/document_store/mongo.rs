use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::options::FindOptions;
use mongodb::{Client, Collection};
use serde_json::Value;

use crate::domain::{ports::PetStore, DomainError, Pet};
use crate::infrastructure::config::MongoConfig;

pub struct MongoPetStore {
    client: Client,
    collection: Collection<Document>,
}

impl MongoPetStore {
    /// Connects and pings the deployment, so a store that comes back is
    /// known to be reachable.
    pub async fn connect(config: &MongoConfig) -> Result<Self, DomainError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| DomainError::unavailable(e.to_string()))?;

        let collection = client
            .database(&config.database)
            .collection::<Document>(&config.collection);

        let store = Self { client, collection };
        store.ping().await?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "MongoDB connected"
        );
        Ok(store)
    }

    /// Closes every pooled connection once in-flight operations finish.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }

    async fn collect_pets(cursor: mongodb::Cursor<Document>) -> Result<Vec<Pet>, DomainError> {
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| DomainError::query(e.to_string()))?;

        documents.into_iter().map(to_pet).collect()
    }
}

/// `$text` query for the term. A missing term is sent as `null` and left
/// for the server to judge.
fn search_filter(term: Option<&str>) -> Document {
    doc! { "$text": { "$search": term } }
}

/// Drops the identifier, ranks by text score and caps the result count.
fn search_options(limit: usize) -> FindOptions {
    FindOptions::builder()
        .projection(doc! { "_id": 0 })
        .sort(doc! { "score": { "$meta": "textScore" } })
        .limit(limit as i64)
        .build()
}

/// Renders a BSON document as relaxed extended JSON.
fn to_pet(document: Document) -> Result<Pet, DomainError> {
    match Bson::Document(document).into_relaxed_extjson() {
        Value::Object(fields) => Ok(Pet::new(fields)),
        other => Err(DomainError::internal(format!(
            "document rendered as non-object: {other}"
        ))),
    }
}

#[async_trait]
impl PetStore for MongoPetStore {
    async fn all_pets(&self) -> Result<Vec<Pet>, DomainError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| DomainError::query(e.to_string()))?;

        Self::collect_pets(cursor).await
    }

    async fn search_pets(
        &self,
        term: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Pet>, DomainError> {
        let cursor = self
            .collection
            .find(search_filter(term))
            .with_options(search_options(limit))
            .await
            .map_err(|e| DomainError::query(e.to_string()))?;

        Self::collect_pets(cursor).await
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| DomainError::unavailable(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SEARCH_LIMIT;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn test_search_filter_passes_term_through() {
        assert_eq!(
            search_filter(Some("Rex")),
            doc! { "$text": { "$search": "Rex" } }
        );
        assert_eq!(
            search_filter(Some("")),
            doc! { "$text": { "$search": "" } }
        );
        assert_eq!(
            search_filter(None),
            doc! { "$text": { "$search": Bson::Null } }
        );
    }

    #[test]
    fn test_search_options_hide_id_and_rank_by_text_score() {
        let options = search_options(SEARCH_LIMIT);

        assert_eq!(options.projection, Some(doc! { "_id": 0 }));
        assert_eq!(
            options.sort,
            Some(doc! { "score": { "$meta": "textScore" } })
        );
        assert_eq!(options.limit, Some(10));
    }

    #[test]
    fn test_to_pet_renders_object_id_as_extended_json() {
        let id = ObjectId::new();
        let pet = to_pet(doc! { "_id": id, "name": "Rex", "age": 4 }).unwrap();

        assert_eq!(pet.get("_id"), Some(&json!({ "$oid": id.to_hex() })));
        assert_eq!(pet.get("name"), Some(&json!("Rex")));
        assert_eq!(pet.get("age"), Some(&json!(4)));
    }

    #[test]
    fn test_to_pet_keeps_nested_documents() {
        let pet = to_pet(doc! { "name": "Luna", "tags": ["cat", "calm"] }).unwrap();

        assert_eq!(pet.get("tags"), Some(&json!(["cat", "calm"])));
        assert!(!pet.has_id());
    }
}
