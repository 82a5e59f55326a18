//! # User Handlers
//!
//! One handler per CRUD route. All input arrives in the query string and
//! every handler validates it before calling the repository.
//!
//! ## Status Codes
//! | Route     | Success | Repository error |
//! |-----------|---------|------------------|
//! | `/create` | 201     | 500              |
//! | `/list`   | 200     | 500              |
//! | `/find`   | 200     | 404              |
//! | `/update` | 200     | 500              |
//! | `/delete` | 200     | 500              |

use crate::db::models::User;
use crate::error::{AppError, AppResult};
use crate::handlers::params::QueryParams;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

/// Create a user
///
/// ## Route
/// ANY /create?id=..&name=..&age=..
///
/// ## Response
/// `201 Created` with an empty body. A duplicate id comes back as
/// `500` with body `user already exists`.
pub async fn create_user(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> AppResult<StatusCode> {
    let user = params.require_user()?;
    let id = user.id.clone();

    state.users.create(user).await.map_err(AppError::internal)?;

    tracing::debug!(%id, "user created");
    Ok(StatusCode::CREATED)
}

/// List all users
///
/// ## Route
/// ANY /list
///
/// ## Response
/// JSON array in no particular order; `[]` when the store is empty.
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.users.list().await.map_err(AppError::internal)?;
    Ok(Json(users))
}

/// Look up one user
///
/// ## Route
/// ANY /find?id=..
///
/// ## Response
/// ```json
/// { "id": "1", "name": "Alice", "age": 30 }
/// ```
/// An unknown id is `404` with body `user not found`.
pub async fn find_user(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> AppResult<Json<User>> {
    let id = params.require_id()?;
    let user = state.users.find(id).await.map_err(AppError::not_found)?;
    Ok(Json(user))
}

/// Replace an existing user
///
/// ## Route
/// ANY /update?id=..&name=..&age=..
///
/// The stored record is overwritten in full. An unknown id is `500`,
/// not `404`.
pub async fn update_user(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> AppResult<StatusCode> {
    let user = params.require_user()?;
    let id = user.id.clone();

    state.users.update(user).await.map_err(AppError::internal)?;

    tracing::debug!(%id, "user updated");
    Ok(StatusCode::OK)
}

/// Remove a user
///
/// ## Route
/// ANY /delete?id=..
pub async fn delete_user(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> AppResult<StatusCode> {
    let id = params.require_id()?;

    state.users.delete(id).await.map_err(AppError::internal)?;

    tracing::debug!(%id, "user deleted");
    Ok(StatusCode::OK)
}
