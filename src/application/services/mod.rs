mod board;
mod pet_search;

pub use board::BoardService;
pub use pet_search::PetSearchService;
