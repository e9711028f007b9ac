//! Per-caller favourite character lists.

use std::sync::Arc;

use tracing::debug;

use dragonball_auth::AuthContext;
use dragonball_core::error::AppError;
use dragonball_core::result::AppResult;
use dragonball_database::store::{CharacterStore, UserStore};
use dragonball_entity::character::Character;

/// Manages the authenticated caller's favourites.
#[derive(Clone)]
pub struct FavouriteService {
    users: Arc<dyn UserStore>,
    characters: Arc<dyn CharacterStore>,
}

impl std::fmt::Debug for FavouriteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavouriteService").finish_non_exhaustive()
    }
}

impl FavouriteService {
    pub fn new(users: Arc<dyn UserStore>, characters: Arc<dyn CharacterStore>) -> Self {
        Self { users, characters }
    }

    /// The caller's favourite characters, ordered by id.
    pub async fn list(&self, ctx: &AuthContext) -> AppResult<Vec<Character>> {
        let ids = self.users.favourite_ids(ctx.user_id).await?;
        self.characters.find_by_ids(&ids).await
    }

    /// Adds a character to the caller's favourites. Adding twice is a no-op.
    pub async fn add(&self, ctx: &AuthContext, character_id: i64) -> AppResult<Vec<Character>> {
        self.require_character(character_id).await?;
        self.users.add_favourite(ctx.user_id, character_id).await?;
        debug!(user_id = ctx.user_id, character_id, "Favourite added");
        self.list(ctx).await
    }

    /// Removes a character from the caller's favourites.
    pub async fn remove(&self, ctx: &AuthContext, character_id: i64) -> AppResult<Vec<Character>> {
        self.require_character(character_id).await?;
        self.users.remove_favourite(ctx.user_id, character_id).await?;
        debug!(user_id = ctx.user_id, character_id, "Favourite removed");
        self.list(ctx).await
    }

    async fn require_character(&self, character_id: i64) -> AppResult<()> {
        match self.characters.find_by_id(character_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::not_found(format!(
                "Character with ID: {character_id} not found"
            ))),
        }
    }
}
