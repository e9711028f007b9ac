//! Character catalog entities.

pub mod model;

pub use model::{Character, CharacterDraft, DEFAULT_IMAGE_URL};
