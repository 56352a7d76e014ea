mod board;
mod pet;

pub use board::{id_text, Board, BoardThread, Comment, BOARD_ID_FIELD};
pub use pet::{Pet, PET_ID_FIELD, SEARCH_LIMIT};
