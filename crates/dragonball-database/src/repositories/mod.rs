//! PostgreSQL repository implementations.

pub mod character;
pub mod user;

pub use character::CharacterRepository;
pub use user::UserRepository;
