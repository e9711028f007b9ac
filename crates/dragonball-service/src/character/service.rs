//! Catalog CRUD with input validation.

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use dragonball_core::error::AppError;
use dragonball_core::result::AppResult;
use dragonball_database::store::{CharacterStore, UserStore};
use dragonball_entity::character::{Character, CharacterDraft};

/// Fields accepted when updating a character.
///
/// `name`, `race`, `description`, `gender`, `power_level`, `affiliation` and
/// `villain` are always overwritten. `ki`, `max_ki` and `image` only when
/// present; `image_url` only when non-blank. `universe` and
/// `transformations` keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterUpdate {
    pub name: String,
    pub race: String,
    pub description: Option<String>,
    pub gender: Option<String>,
    pub power_level: i64,
    pub affiliation: Option<String>,
    pub villain: bool,
    pub ki: Option<String>,
    pub max_ki: Option<String>,
    pub image: Option<String>,
    pub image_url: Option<String>,
}

impl CharacterUpdate {
    fn apply_to(self, existing: Character) -> CharacterDraft {
        let mut draft = CharacterDraft::from(existing);
        draft.name = self.name;
        draft.race = self.race;
        draft.description = self.description;
        draft.gender = self.gender;
        draft.power_level = self.power_level;
        draft.affiliation = self.affiliation;
        draft.villain = self.villain;

        if self.ki.is_some() {
            draft.ki = self.ki;
        }
        if self.max_ki.is_some() {
            draft.max_ki = self.max_ki;
        }
        if self.image.is_some() {
            draft.image = self.image;
        }
        if let Some(url) = self.image_url.filter(|u| !u.trim().is_empty()) {
            draft.image_url = Some(url);
        }
        draft
    }
}

/// Character catalog operations.
#[derive(Clone)]
pub struct CharacterService {
    characters: Arc<dyn CharacterStore>,
    users: Arc<dyn UserStore>,
}

impl std::fmt::Debug for CharacterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterService").finish_non_exhaustive()
    }
}

impl CharacterService {
    /// Creates a new character service.
    pub fn new(characters: Arc<dyn CharacterStore>, users: Arc<dyn UserStore>) -> Self {
        Self { characters, users }
    }

    /// All characters, ordered by id.
    pub async fn list(&self) -> AppResult<Vec<Character>> {
        self.characters.find_all().await
    }

    /// One character by id.
    pub async fn get(&self, id: i64) -> AppResult<Character> {
        self.characters
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validates and stores a new character.
    pub async fn create(&self, draft: CharacterDraft) -> AppResult<Character> {
        validate(&draft.name, &draft.race, draft.power_level)?;
        let created = self.characters.create(draft).await?;
        info!(character_id = created.id, name = %created.name, "Character created");
        Ok(created)
    }

    /// Applies `update` to an existing character.
    pub async fn update(&self, id: i64, update: CharacterUpdate) -> AppResult<Character> {
        let existing = self.get(id).await?;
        validate(&update.name, &update.race, update.power_level)?;

        let updated = self
            .characters
            .update(id, update.apply_to(existing))
            .await?
            .ok_or_else(|| not_found(id))?;
        info!(character_id = id, "Character updated");
        Ok(updated)
    }

    /// Deletes a character after removing it from every favourites list.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.get(id).await?;
        let cleared = self.users.remove_favourite_everywhere(id).await?;
        if !self.characters.delete(id).await? {
            return Err(not_found(id));
        }
        info!(character_id = id, favourites_cleared = cleared, "Character deleted");
        Ok(())
    }

    /// Number of characters in the catalog.
    pub async fn count(&self) -> AppResult<u64> {
        self.characters.count().await
    }
}

fn validate(name: &str, race: &str, power_level: i64) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("Name is required"));
    }
    if race.trim().is_empty() {
        return Err(AppError::validation("Race is required"));
    }
    if power_level < 0 {
        return Err(AppError::validation("Power level must be positive"));
    }
    Ok(())
}

fn not_found(id: i64) -> AppError {
    AppError::not_found(format!("Character with ID: {id} not found"))
}
