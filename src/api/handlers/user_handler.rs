//! User handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{EntityId, User, UserResponse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::{Created, NoContent};

/// User creation request with presence validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Juan")]
    pub name: String,
    /// Contact email address
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    #[schema(example = "juan@example.com")]
    pub email: String,
}

/// User update request; replaces both mutable fields
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    /// New display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Juan Updated")]
    pub name: String,
    /// New contact email address
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    #[schema(example = "juan.updated@example.com")]
    pub email: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_all().await?;
    let body = users
        .into_iter()
        .map(UserResponse::try_from)
        .collect::<AppResult<Vec<_>>>()?;
    Ok(Json(body))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get(id).await?.ok_or_not_found()?;
    Ok(Json(UserResponse::try_from(user)?))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<UserResponse>> {
    let created = state
        .user_service
        .create(User::new(payload.name, payload.email))
        .await?;

    Ok(Created(UserResponse::try_from(created)?))
}

/// Update an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let updated = state
        .user_service
        .update(id, User::new(payload.name, payload.email))
        .await?;

    Ok(Json(UserResponse::try_from(updated)?))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<NoContent> {
    // The port reports "no match" by value; the HTTP surface maps it
    // to a status code
    if state.user_service.delete(id).await? {
        Ok(NoContent)
    } else {
        Err(AppError::NotFound)
    }
}
