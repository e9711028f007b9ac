//! In-memory character catalog.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use dragonball_core::result::AppResult;
use dragonball_entity::character::{Character, CharacterDraft};

use crate::store::CharacterStore;

/// Catalog store backed by a concurrent hash map.
#[derive(Debug)]
pub struct MemoryCharacterRepository {
    characters: DashMap<i64, Character>,
    next_id: AtomicI64,
}

impl MemoryCharacterRepository {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            characters: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryCharacterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CharacterStore for MemoryCharacterRepository {
    async fn find_all(&self) -> AppResult<Vec<Character>> {
        let mut all: Vec<Character> = self.characters.iter().map(|c| c.value().clone()).collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Character>> {
        Ok(self.characters.get(&id).map(|c| c.value().clone()))
    }

    async fn find_by_ids(&self, ids: &[i64]) -> AppResult<Vec<Character>> {
        let mut found: Vec<Character> = ids
            .iter()
            .filter_map(|id| self.characters.get(id).map(|c| c.value().clone()))
            .collect();
        found.sort_by_key(|c| c.id);
        found.dedup_by_key(|c| c.id);
        Ok(found)
    }

    async fn create(&self, draft: CharacterDraft) -> AppResult<Character> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let character = draft.into_character(id);
        self.characters.insert(id, character.clone());
        Ok(character)
    }

    async fn update(&self, id: i64, draft: CharacterDraft) -> AppResult<Option<Character>> {
        Ok(self.characters.get_mut(&id).map(|mut slot| {
            *slot = draft.into_character(id);
            slot.clone()
        }))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.characters.remove(&id).is_some())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.characters.len() as u64)
    }
}
