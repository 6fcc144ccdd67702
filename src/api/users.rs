//! User CRUD endpoints

use axum::{extract::State, http::StatusCode};
use serde::Serialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Envelope, Json, Path};
use crate::domain::user::{Address, FullName, User};
use crate::infrastructure::user::{CreateUserRequest, UpdateUserRequest};

/// Public user shape returned by create, get, and update: the full
/// document minus `password` and `orders`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: i64,
    pub username: String,
    pub full_name: FullName,
    pub age: i64,
    pub email: String,
    pub is_active: bool,
    pub hobbies: Vec<String>,
    pub address: Address,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id(),
            username: user.username().to_string(),
            full_name: user.full_name().clone(),
            age: user.age(),
            email: user.email().to_string(),
            is_active: user.is_active(),
            hobbies: user.hobbies().to_vec(),
            address: user.address().clone(),
        }
    }
}

/// Narrower projection used by the list endpoint: no `isActive`,
/// `hobbies`, or `orders`. The asymmetry with [`UserResponse`] is a
/// per-endpoint contract, not an accident.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub user_id: i64,
    pub username: String,
    pub full_name: FullName,
    pub age: i64,
    pub email: String,
    pub address: Address,
}

impl From<&User> for UserSummaryResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id(),
            username: user.username().to_string(),
            full_name: user.full_name().clone(),
            age: user.age(),
            email: user.email().to_string(),
            address: user.address().clone(),
        }
    }
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<Envelope<UserResponse>>), ApiError> {
    debug!(user_id = request.user_id, username = %request.username, "Creating user");

    let user = state
        .user_service
        .create(request)
        .await
        .map_err(ApiError::from)?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok(
            "User created successfully!",
            UserResponse::from(&user),
        )),
    ))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<UserSummaryResponse>>>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await.map_err(ApiError::from)?;

    let summaries: Vec<UserSummaryResponse> =
        users.iter().map(UserSummaryResponse::from).collect();

    Ok(Json(Envelope::ok("Users fetched successfully!", summaries)))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Envelope<UserResponse>>, ApiError> {
    debug!(user_id, "Fetching user");

    let user = state
        .user_service
        .get(user_id)
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::not_found("User not found!"))?;

    Ok(Json(Envelope::ok(
        "User fetched successfully!",
        UserResponse::from(&user),
    )))
}

/// PUT /api/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<Envelope<UserResponse>>, ApiError> {
    debug!(user_id, "Updating user");

    let user = state
        .user_service
        .update(user_id, request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(Envelope::ok(
        "User updated successfully!",
        UserResponse::from(&user),
    )))
}

/// DELETE /api/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Envelope<()>>, ApiError> {
    debug!(user_id, "Deleting user");

    let deleted = state
        .user_service
        .delete(user_id)
        .await
        .map_err(ApiError::from)?;

    if !deleted {
        return Err(ApiError::not_found("User not found!"));
    }

    Ok(Json(Envelope::ok_empty("User deleted successfully!")))
}
