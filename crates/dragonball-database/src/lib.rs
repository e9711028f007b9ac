//! # dragonball-database
//!
//! Store abstractions for identities and the character catalog, with a
//! PostgreSQL implementation (sqlx) and an in-memory one (dashmap).

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{CharacterStore, UserStore};
