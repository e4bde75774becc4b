/// Users API routes
use crate::{api::response::ApiResponse, error::Result, extract::Payload, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use roster_core::{operations, validation, User, UserId};

/// GET /api/users
/// List all users in insertion order
pub async fn list_users(State(app_state): State<AppState>) -> Json<ApiResponse<Vec<User>>> {
    let store = app_state.users.read().await;
    Json(ApiResponse::ok(operations::list_users(&store).to_vec()))
}

/// GET /api/users/:id
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<User>>> {
    let user_id = UserId::new(id);
    let store = app_state.users.read().await;
    let user = operations::get_user(&store, &user_id)?.clone();

    Ok(Json(ApiResponse::ok(user)))
}

/// POST /api/users
/// Create a new user
#[tracing::instrument(skip(app_state, body))]
pub async fn create_user(
    State(app_state): State<AppState>,
    Payload(body): Payload,
) -> Result<(StatusCode, Json<ApiResponse<User>>)> {
    let input = validation::validate_create(&body)?;

    // Uniqueness check and append happen under one write guard
    let mut store = app_state.users.write().await;
    let user = operations::create_user(&mut store, input, Utc::now())?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user))))
}

/// PUT/PATCH /api/users/:id
/// Partially update a user; both methods behave the same
#[tracing::instrument(skip(app_state, body))]
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Payload(body): Payload,
) -> Result<Json<ApiResponse<User>>> {
    let input = validation::validate_update(&body)?;
    let user_id = UserId::new(id);

    let mut store = app_state.users.write().await;
    let user = operations::update_user(&mut store, &user_id, input, Utc::now())?;

    Ok(Json(ApiResponse::ok(user)))
}

/// DELETE /api/users/:id
#[tracing::instrument(skip(app_state))]
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<ApiResponse<()>>> {
    let user_id = UserId::new(id);

    let mut store = app_state.users.write().await;
    operations::delete_user(&mut store, &user_id)?;

    Ok(Json(ApiResponse::message("User deleted successfully")))
}
