//! In-memory identity store.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use dragonball_core::error::AppError;
use dragonball_core::result::AppResult;
use dragonball_entity::user::{CreateUser, Role, User};

use crate::store::UserStore;

/// Identity store backed by concurrent hash maps.
#[derive(Debug)]
pub struct MemoryUserRepository {
    users: DashMap<i64, User>,
    /// Username to id; the entry lock makes the uniqueness check atomic.
    usernames: DashMap<String, i64>,
    favourites: DashMap<i64, BTreeSet<i64>>,
    next_id: AtomicI64,
}

impl MemoryUserRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            usernames: DashMap::new(),
            favourites: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let Some(id) = self.usernames.get(username).map(|e| *e.value()) else {
            return Ok(None);
        };
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|u| u.value().clone()).collect();
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn create(&self, data: CreateUser) -> AppResult<User> {
        match self.usernames.entry(data.username.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("username already exists")),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let user = User {
                    id,
                    username: data.username,
                    password_hash: data.password_hash,
                    role: data.role,
                    created_at: Utc::now(),
                };
                self.users.insert(id, user.clone());
                slot.insert(id);
                Ok(user)
            }
        }
    }

    async fn update_credentials(
        &self,
        id: i64,
        password_hash: &str,
        role: Role,
    ) -> AppResult<User> {
        let mut entry = self
            .users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;
        entry.password_hash = password_hash.to_string();
        entry.role = role;
        Ok(entry.clone())
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let Some((_, user)) = self.users.remove(&id) else {
            return Ok(false);
        };
        self.usernames.remove(&user.username);
        self.favourites.remove(&id);
        Ok(true)
    }

    async fn favourite_ids(&self, user_id: i64) -> AppResult<Vec<i64>> {
        Ok(self
            .favourites
            .get(&user_id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default())
    }

    async fn add_favourite(&self, user_id: i64, character_id: i64) -> AppResult<()> {
        if !self.users.contains_key(&user_id) {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        self.favourites
            .entry(user_id)
            .or_default()
            .insert(character_id);
        Ok(())
    }

    async fn remove_favourite(&self, user_id: i64, character_id: i64) -> AppResult<bool> {
        Ok(self
            .favourites
            .get_mut(&user_id)
            .map(|mut set| set.remove(&character_id))
            .unwrap_or(false))
    }

    async fn remove_favourite_everywhere(&self, character_id: i64) -> AppResult<u64> {
        let mut removed = 0;
        for mut set in self.favourites.iter_mut() {
            if set.remove(&character_id) {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
