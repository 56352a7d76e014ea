pub mod config;
pub mod document_store;
pub mod relational_store;

pub use config::{MongoConfig, PostgresConfig, ServerConfig};
pub use document_store::{InMemoryPetStore, MongoPetStore};
pub use relational_store::{InMemoryBoardStore, PostgresBoardStore};
