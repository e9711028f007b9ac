//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use dragonball_entity::character::CharacterDraft;
use dragonball_service::CharacterUpdate;

/// Login request body.
///
/// Not validated: blank or missing credentials go through the
/// authenticator and fail like any other bad login.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Registration request body. `role` is accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Character create/update body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Race is required"))]
    pub race: String,
    pub ki: Option<String>,
    pub max_ki: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Power level must be positive"))]
    pub power_level: i64,
    #[serde(default)]
    pub universe: i32,
    #[serde(default)]
    pub villain: bool,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub affiliation: Option<String>,
    #[serde(default)]
    pub transformations: Vec<String>,
    pub image_url: Option<String>,
}

impl From<CharacterRequest> for CharacterDraft {
    fn from(req: CharacterRequest) -> Self {
        Self {
            name: req.name,
            race: req.race,
            ki: req.ki,
            max_ki: req.max_ki,
            power_level: req.power_level,
            universe: req.universe,
            villain: req.villain,
            gender: req.gender,
            description: req.description,
            image: req.image,
            affiliation: req.affiliation,
            transformations: req.transformations,
            image_url: req.image_url,
        }
    }
}

impl From<CharacterRequest> for CharacterUpdate {
    fn from(req: CharacterRequest) -> Self {
        Self {
            name: req.name,
            race: req.race,
            description: req.description,
            gender: req.gender,
            power_level: req.power_level,
            affiliation: req.affiliation,
            villain: req.villain,
            ki: req.ki,
            max_ki: req.max_ki,
            image: req.image,
            image_url: req.image_url,
        }
    }
}
