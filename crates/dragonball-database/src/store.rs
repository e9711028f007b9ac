//! Store traits consumed by the auth core and the services.
//!
//! Both the PostgreSQL repositories and the in-memory repositories
//! implement these, so callers hold `Arc<dyn UserStore>` /
//! `Arc<dyn CharacterStore>` and never see the backend.

use async_trait::async_trait;

use dragonball_core::result::AppResult;
use dragonball_entity::character::{Character, CharacterDraft};
use dragonball_entity::user::{CreateUser, Role, User};

/// Credential store: identities and their favourite lists.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Find an identity by its exact username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Find an identity by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// All identities ordered by id.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Insert a new identity. Fails with `Conflict` if the username is taken.
    async fn create(&self, data: CreateUser) -> AppResult<User>;

    /// Replace the password hash and role of an existing identity.
    async fn update_credentials(&self, id: i64, password_hash: &str, role: Role)
    -> AppResult<User>;

    /// Delete an identity. Returns `true` if it existed.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Ids of the characters in a user's favourites, ascending.
    async fn favourite_ids(&self, user_id: i64) -> AppResult<Vec<i64>>;

    /// Add a character to a user's favourites. Adding twice is a no-op.
    async fn add_favourite(&self, user_id: i64, character_id: i64) -> AppResult<()>;

    /// Remove a character from a user's favourites. Returns `true` if it was present.
    async fn remove_favourite(&self, user_id: i64, character_id: i64) -> AppResult<bool>;

    /// Remove a character from every user's favourites.
    async fn remove_favourite_everywhere(&self, character_id: i64) -> AppResult<u64>;
}

/// Catalog store: the character records.
#[async_trait]
pub trait CharacterStore: Send + Sync + 'static {
    /// All characters ordered by id.
    async fn find_all(&self) -> AppResult<Vec<Character>>;

    /// Find a character by primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Character>>;

    /// Characters whose id is in `ids`, ordered by id. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Character>>;

    /// Insert a new character.
    async fn create(&self, draft: CharacterDraft) -> AppResult<Character>;

    /// Overwrite every field of an existing character. `None` if it does not exist.
    async fn update(&self, id: i64, draft: CharacterDraft) -> AppResult<Option<Character>>;

    /// Delete a character. Returns `true` if it existed.
    async fn delete(&self, id: i64) -> AppResult<bool>;

    /// Number of stored characters.
    async fn count(&self) -> AppResult<u64>;
}
