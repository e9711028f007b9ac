//! Character repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use dragonball_core::error::{AppError, ErrorKind};
use dragonball_core::result::AppResult;
use dragonball_entity::character::{Character, CharacterDraft};

use crate::store::CharacterStore;

const CHARACTER_COLUMNS: &str = "id, name, race, ki, max_ki, power_level, universe, villain, \
     gender, description, image, affiliation, transformations, image_url";

/// Repository for the character catalog.
#[derive(Debug, Clone)]
pub struct CharacterRepository {
    pool: PgPool,
}

impl CharacterRepository {
    /// Create a new character repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterStore for CharacterRepository {
    async fn find_all(&self) -> AppResult<Vec<Character>> {
        sqlx::query_as::<_, Character>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list characters", e))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Character>> {
        sqlx::query_as::<_, Character>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find character", e))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Character>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, Character>(&format!(
            "SELECT {CHARACTER_COLUMNS} FROM characters WHERE id = ANY($1) ORDER BY id"
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load characters", e))
    }

    async fn create(&self, draft: CharacterDraft) -> AppResult<Character> {
        let image_url = draft.resolved_image_url();
        sqlx::query_as::<_, Character>(&format!(
            "INSERT INTO characters (name, race, ki, max_ki, power_level, universe, villain, \
             gender, description, image, affiliation, transformations, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) \
             RETURNING {CHARACTER_COLUMNS}"
        ))
        .bind(&draft.name)
        .bind(&draft.race)
        .bind(&draft.ki)
        .bind(&draft.max_ki)
        .bind(draft.power_level)
        .bind(draft.universe)
        .bind(draft.villain)
        .bind(&draft.gender)
        .bind(&draft.description)
        .bind(&draft.image)
        .bind(&draft.affiliation)
        .bind(&draft.transformations)
        .bind(image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create character", e))
    }

    async fn update(&self, id: i64, draft: CharacterDraft) -> AppResult<Option<Character>> {
        let image_url = draft.resolved_image_url();
        sqlx::query_as::<_, Character>(&format!(
            "UPDATE characters SET name = $2, race = $3, ki = $4, max_ki = $5, \
             power_level = $6, universe = $7, villain = $8, gender = $9, description = $10, \
             image = $11, affiliation = $12, transformations = $13, image_url = $14 \
             WHERE id = $1 RETURNING {CHARACTER_COLUMNS}"
        ))
        .bind(id)
        .bind(&draft.name)
        .bind(&draft.race)
        .bind(&draft.ki)
        .bind(&draft.max_ki)
        .bind(draft.power_level)
        .bind(draft.universe)
        .bind(draft.villain)
        .bind(&draft.gender)
        .bind(&draft.description)
        .bind(&draft.image)
        .bind(&draft.affiliation)
        .bind(&draft.transformations)
        .bind(image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update character", e))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete character", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM characters")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count characters", e)
            })?;
        Ok(total as u64)
    }
}
