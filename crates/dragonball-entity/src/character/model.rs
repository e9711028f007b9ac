//! Character entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Image used when a character is stored without an `imageUrl`.
pub const DEFAULT_IMAGE_URL: &str =
    "https://static.wikia.nocookie.net/dragonball/images/f/f8/Jiren_DBZ_Episode_127.png";

/// A character in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique character identifier.
    pub id: i64,
    pub name: String,
    pub race: String,
    /// Formatted ki value, e.g. `"60,000,000"`.
    pub ki: Option<String>,
    pub max_ki: Option<String>,
    pub power_level: i64,
    pub universe: i32,
    pub villain: bool,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub affiliation: Option<String>,
    pub transformations: Vec<String>,
    pub image_url: String,
}

/// Field values for creating or replacing a character.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterDraft {
    pub name: String,
    pub race: String,
    pub ki: Option<String>,
    pub max_ki: Option<String>,
    pub power_level: i64,
    pub universe: i32,
    pub villain: bool,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub affiliation: Option<String>,
    #[serde(default)]
    pub transformations: Vec<String>,
    pub image_url: Option<String>,
}

impl CharacterDraft {
    /// The image URL to store, falling back to [`DEFAULT_IMAGE_URL`] when blank.
    pub fn resolved_image_url(&self) -> String {
        match self.image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url.to_string(),
            _ => DEFAULT_IMAGE_URL.to_string(),
        }
    }

    /// Build the stored record for this draft under the given id.
    pub fn into_character(self, id: i64) -> Character {
        let image_url = self.resolved_image_url();
        Character {
            id,
            name: self.name,
            race: self.race,
            ki: self.ki,
            max_ki: self.max_ki,
            power_level: self.power_level,
            universe: self.universe,
            villain: self.villain,
            gender: self.gender,
            description: self.description,
            image: self.image,
            affiliation: self.affiliation,
            transformations: self.transformations,
            image_url,
        }
    }
}

impl From<Character> for CharacterDraft {
    fn from(c: Character) -> Self {
        Self {
            name: c.name,
            race: c.race,
            ki: c.ki,
            max_ki: c.max_ki,
            power_level: c.power_level,
            universe: c.universe,
            villain: c.villain,
            gender: c.gender,
            description: c.description,
            image: c.image,
            affiliation: c.affiliation,
            transformations: c.transformations,
            image_url: Some(c.image_url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_image_url_falls_back_to_default() {
        let draft = CharacterDraft {
            name: "Jiren".into(),
            race: "Pride Trooper".into(),
            image_url: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(draft.into_character(1).image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_explicit_image_url_is_kept() {
        let draft = CharacterDraft {
            image_url: Some("/img/goku.webp".into()),
            ..Default::default()
        };
        assert_eq!(draft.resolved_image_url(), "/img/goku.webp");
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(CharacterDraft::default().into_character(7)).unwrap();
        assert!(json.get("maxKi").is_some());
        assert!(json.get("powerLevel").is_some());
        assert!(json.get("imageUrl").is_some());
    }
}
