pub mod error;
pub mod middleware;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use error::ApiError;
pub use routes::{create_boards_router, create_pets_router};
pub use shutdown::shutdown_signal;
pub use state::{BoardsState, PetsState, ReadinessCheck};
