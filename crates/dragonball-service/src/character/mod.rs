//! Character catalog use cases.

pub mod service;

pub use service::{CharacterService, CharacterUpdate};
