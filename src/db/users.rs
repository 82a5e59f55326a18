use crate::db::models::User;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors raised by a user repository.
///
/// The display text is what clients see in error response bodies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    #[error("user already exists")]
    AlreadyExists,

    #[error("user not found")]
    NotFound,
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage contract for user records.
///
/// Handlers only see this trait, so a persistent backend can replace
/// [`InMemoryUserRepository`] without touching the HTTP layer.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user. Fails with `AlreadyExists` if the id is taken.
    async fn create(&self, user: User) -> RepoResult<()>;

    /// All stored users, in no particular order.
    async fn list(&self) -> RepoResult<Vec<User>>;

    async fn find(&self, id: &str) -> RepoResult<User>;

    /// Replace the stored record with the same id. No field merging.
    async fn update(&self, user: User) -> RepoResult<()>;

    async fn delete(&self, id: &str) -> RepoResult<()>;
}

/// Map-backed repository guarded by a single mutex.
///
/// Each method holds the lock for its entire body, so operations are fully
/// serialized rather than merely atomic per key.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> RepoResult<()> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.id) {
            return Err(RepoError::AlreadyExists);
        }
        users.insert(user.id.clone(), user);
        Ok(())
    }

    async fn list(&self) -> RepoResult<Vec<User>> {
        let users = self.users.lock().await;
        Ok(users.values().cloned().collect())
    }

    async fn find(&self, id: &str) -> RepoResult<User> {
        let users = self.users.lock().await;
        users.get(id).cloned().ok_or(RepoError::NotFound)
    }

    async fn update(&self, user: User) -> RepoResult<()> {
        let mut users = self.users.lock().await;
        match users.get_mut(&user.id) {
            Some(stored) => {
                *stored = user;
                Ok(())
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: &str) -> RepoResult<()> {
        let mut users = self.users.lock().await;
        users.remove(id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}
