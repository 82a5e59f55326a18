//! # Application State
//!
//! Shared state handed to every request handler through axum's `State`
//! extractor. Axum clones it per request, which only bumps an `Arc`.

use crate::db::users::{InMemoryUserRepository, UserRepository};
use std::sync::Arc;

/// Shared application state
///
/// The repository is held as a trait object so the storage backend can be
/// swapped without changing any handler signature. Handlers only need a
/// shared reference; the repository owns its own interior mutability.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// State backed by a fresh, empty in-memory repository.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserRepository::new()))
    }
}
