//! Query-string access with first-value-wins semantics.
//!
//! Deserializing straight into a struct would reject repeated keys, so the
//! raw pairs are kept and looked up on demand.

use crate::db::models::User;
use crate::error::{AppError, AppResult};
use serde::Deserialize;

pub const MISSING_PARAMETERS: &str = "Missing parameters";
pub const MISSING_ID: &str = "Missing id parameter";
pub const INVALID_AGE: &str = "Invalid age parameter";

/// Decoded `key=value` pairs in request order.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct QueryParams(Vec<(String, String)>);

impl From<Vec<(String, String)>> for QueryParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl QueryParams {
    /// First value for `key`, or `""` when the key is absent.
    pub fn get(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    /// The `id` parameter, required to be non-empty.
    pub fn require_id(&self) -> AppResult<&str> {
        match self.get("id") {
            "" => Err(AppError::bad_request(MISSING_ID)),
            id => Ok(id),
        }
    }

    /// Build a full `User` from `id`, `name` and `age`.
    ///
    /// Presence is checked for all three before `age` is parsed, so a
    /// request missing `name` reports missing parameters even if `age` is
    /// also garbage.
    pub fn require_user(&self) -> AppResult<User> {
        let id = self.get("id");
        let name = self.get("name");
        let age = self.get("age");

        if id.is_empty() || name.is_empty() || age.is_empty() {
            return Err(AppError::bad_request(MISSING_PARAMETERS));
        }

        Ok(User::new(id, name, parse_age(age)?))
    }
}

/// Signed decimal integer with optional `+`/`-` sign.
pub fn parse_age(raw: &str) -> AppResult<i64> {
    raw.parse().map_err(|_| AppError::bad_request(INVALID_AGE))
}
