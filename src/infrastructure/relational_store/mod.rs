mod in_memory;
mod postgres;

pub use in_memory::InMemoryBoardStore;
pub use postgres::{validate_identifier, PostgresBoardStore};
