//! In-memory store implementations.
//!
//! Used when no database URL is configured, and by the test suites.
//! Ids come from per-store atomic sequences starting at 1.

pub mod character;
pub mod user;

pub use character::MemoryCharacterRepository;
pub use user::MemoryUserRepository;
