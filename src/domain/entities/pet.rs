use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field the document store uses for its internal identifier.
pub const PET_ID_FIELD: &str = "_id";

/// Maximum number of pets returned by a text search.
pub const SEARCH_LIMIT: usize = 10;

/// An adoptable animal as stored in the document collection.
///
/// The collection enforces no schema, so a pet is just the document's
/// fields rendered as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pet(pub Map<String, Value>);

impl Pet {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn has_id(&self) -> bool {
        self.0.contains_key(PET_ID_FIELD)
    }

    pub fn without_id(mut self) -> Self {
        self.0.remove(PET_ID_FIELD);
        self
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Pet {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}
