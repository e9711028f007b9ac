//! # dragonball-service
//!
//! Business logic service layer. Each service orchestrates the stores and
//! the auth core to implement one group of use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod character;
pub mod seed;
pub mod user;

pub use auth::{AuthService, LoginResult};
pub use character::{CharacterService, CharacterUpdate};
pub use seed::DataSeeder;
pub use user::{FavouriteService, UserService};
