//! Application layer - Use cases and orchestration.
//!
//! Services depend on domain ports (traits) rather than concrete database
//! adapters, so the HTTP layer never touches a driver directly.

pub mod services;

pub use services::{BoardService, PetSearchService};
