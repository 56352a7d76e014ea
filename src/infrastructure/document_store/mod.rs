mod in_memory;
mod mongo;

pub use in_memory::InMemoryPetStore;
pub use mongo::MongoPetStore;
