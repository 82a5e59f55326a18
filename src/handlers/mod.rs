//! # HTTP Request Handlers
//!
//! - `params`: query-string lookup and validation shared by the handlers
//! - `users`: the five CRUD endpoints
//!
//! ## Handler Pattern
//! Each handler:
//! 1. Pulls its parameters from the query string
//! 2. Rejects missing or malformed input with `400` before touching storage
//! 3. Calls exactly one repository method
//! 4. Maps the outcome to a status code and optional JSON body

pub mod params;
pub mod users;
