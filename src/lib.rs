//! Read-only search services for a pet adoption site.
//!
//! `pets-api` answers full-text searches over a MongoDB collection and
//! `boards-api` loads a discussion board with its comments from PostgreSQL.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
