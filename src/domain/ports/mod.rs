mod board_store;
mod pet_store;

pub use board_store::BoardStore;
pub use pet_store::PetStore;
