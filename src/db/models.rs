//! # Data Models
//!
//! This module defines the records held by the repository layer.
//! They derive serde traits so handlers can return them directly as JSON.
//!
//! ## JSON Shape
//! ```json
//! { "id": "1", "name": "Alice", "age": 30 }
//! ```
//! Field order in the serialized output follows declaration order.

use serde::{Deserialize, Serialize};

/// User record
///
/// Identity is `id`. It never changes after creation; an update replaces
/// `name` and `age` wholesale under the same key.
///
/// ## Derive Macros
/// - `Clone`: the repository hands out copies, never references into its map
/// - `PartialEq, Eq`: lets tests compare whole records
/// - `Serialize, Deserialize`: JSON for the `/list` and `/find` responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-supplied unique identifier
    pub id: String,

    /// Display name, any non-empty string
    pub name: String,

    /// Age in years; any value that fits a signed 64-bit integer is accepted
    pub age: i64,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }
}
