//! # Storage Module
//!
//! - `models`: the `User` record
//! - `users`: the `UserRepository` contract and its in-memory implementation
//!
//! Nothing here outlives the process; a restart starts from an empty store.

pub mod models;
pub mod users;
