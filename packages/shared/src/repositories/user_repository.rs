use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::user::User;
use crate::repositories::errors::user_repository_errors::UserRepositoryError;

#[cfg(test)]
use mockall::automock;

#[async_trait]
#[cfg_attr(test, automock)]
pub trait UserRepository: Send + Sync {
    /// Inserts a new user with the next sequential id. Usernames are not
    /// required to be unique, so this always succeeds.
    async fn add_user(&self, username: &str, rating: i32) -> User;
    /// Overwrites the rating of an existing user. The rating is NOT
    /// re-validated here; callers must pre-clamp it into the supported range.
    async fn update_rating(&self, user_id: u64, new_rating: i32)
        -> Result<(), UserRepositoryError>;
    /// Returns an independent snapshot of all users in insertion order.
    async fn get_all_users(&self) -> Vec<User>;
    /// Case-insensitive substring match on username, in insertion order,
    /// unranked.
    async fn search_by_username(&self, term: &str) -> Vec<User>;
    async fn count(&self) -> usize;
}

struct StoreInner {
    users: Vec<User>,
    index: HashMap<u64, usize>,
    next_id: u64,
}

/// In-memory user store guarded by a single reader-writer lock. Readers
/// (`get_all_users`, `search_by_username`, `count`) take shared access and
/// may run concurrently; writers (`add_user`, `update_rating`) are exclusive.
pub struct InMemoryUserRepository {
    inner: RwLock<StoreInner>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        InMemoryUserRepository {
            inner: RwLock::new(StoreInner {
                users: Vec::new(),
                index: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add_user(&self, username: &str, rating: i32) -> User {
        let mut inner = self.inner.write().await;
        let user = User::new(inner.next_id, username.to_string(), rating);
        let slot = inner.users.len();
        inner.index.insert(user.id, slot);
        inner.users.push(user.clone());
        inner.next_id += 1;
        user
    }

    async fn update_rating(
        &self,
        user_id: u64,
        new_rating: i32,
    ) -> Result<(), UserRepositoryError> {
        let mut inner = self.inner.write().await;
        let slot = *inner
            .index
            .get(&user_id)
            .ok_or(UserRepositoryError::NotFound)?;
        inner.users[slot].rating = new_rating;
        Ok(())
    }

    async fn get_all_users(&self) -> Vec<User> {
        let inner = self.inner.read().await;
        inner.users.clone()
    }

    async fn search_by_username(&self, term: &str) -> Vec<User> {
        let needle = term.to_lowercase();
        let inner = self.inner.read().await;
        inner
            .users
            .iter()
            .filter(|user| user.username.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    async fn count(&self) -> usize {
        let inner = self.inner.read().await;
        inner.users.len()
    }
}
