//! # User CRUD Server
//!
//! A small HTTP service that stores user records in memory and exposes
//! create/list/find/update/delete over query-string routes.
//!
//! The router is built as an explicit value and handed to the server, so
//! tests can spin up as many independent instances as they like.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod state;

use crate::handlers::users::{create_user, delete_user, find_user, list_users, update_user};
use crate::state::AppState;
use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// Every route accepts any HTTP method; parameters are only ever read
/// from the query string.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/create", any(create_user))
        .route("/list", any(list_users))
        .route("/find", any(find_user))
        .route("/update", any(update_user))
        .route("/delete", any(delete_user))
        // HTTP request/response logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the application on an already-bound listener until the process exits.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}
