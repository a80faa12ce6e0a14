//! Integration tests for the HTTP adapter.
//!
//! Handlers are called directly with state built over the in-memory
//! adapter, so no database is required.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use rust_crud_starter::api::extractors::ValidatedJson;
use rust_crud_starter::api::handlers::user_handler::{
    create_user, delete_user, get_user, list_users, update_user, CreateUserRequest,
    UpdateUserRequest,
};
use rust_crud_starter::api::AppState;
use rust_crud_starter::domain::{Entity, User, UserResponse};
use rust_crud_starter::errors::AppError;
use rust_crud_starter::types::{Created, NoContent};

fn create_request(name: &str, email: &str) -> CreateUserRequest {
    CreateUserRequest {
        name: name.to_string(),
        email: email.to_string(),
    }
}

// =============================================================================
// Handler Tests (in-memory state)
// =============================================================================

#[tokio::test]
async fn create_then_get_user() {
    let state = AppState::in_memory();

    let Created(created) = create_user(
        State(state.clone()),
        ValidatedJson(create_request("Juan", "juan@example.com")),
    )
    .await
    .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Juan");

    let fetched = get_user(State(state), Path(created.id)).await.unwrap();
    assert_eq!(fetched.0.email, "juan@example.com");
}

#[tokio::test]
async fn get_missing_user_is_not_found() {
    let state = AppState::in_memory();

    let result = get_user(State(state), Path(99)).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn list_users_returns_all() {
    let state = AppState::in_memory();
    for i in 0..3 {
        create_user(
            State(state.clone()),
            ValidatedJson(create_request(&format!("User {i}"), "user@example.com")),
        )
        .await
        .unwrap();
    }

    let users = list_users(State(state)).await.unwrap();
    assert_eq!(users.0.len(), 3);
}

#[tokio::test]
async fn update_user_replaces_fields() {
    let state = AppState::in_memory();
    let Created(created) = create_user(
        State(state.clone()),
        ValidatedJson(create_request("Juan", "juan@example.com")),
    )
    .await
    .unwrap();

    let payload = UpdateUserRequest {
        name: "Juan Updated".to_string(),
        email: "juan.updated@example.com".to_string(),
    };
    let updated = update_user(State(state.clone()), Path(created.id), ValidatedJson(payload))
        .await
        .unwrap();

    assert_eq!(updated.0.id, created.id);
    assert_eq!(updated.0.name, "Juan Updated");

    let fetched = get_user(State(state), Path(created.id)).await.unwrap();
    assert_eq!(fetched.0.name, "Juan Updated");
}

#[tokio::test]
async fn update_missing_user_is_not_found() {
    let state = AppState::in_memory();

    let payload = UpdateUserRequest {
        name: "Ghost".to_string(),
        email: "ghost@example.com".to_string(),
    };
    let result = update_user(State(state), Path(7), ValidatedJson(payload)).await;
    assert!(matches!(result.unwrap_err(), AppError::NotFound));
}

#[tokio::test]
async fn delete_user_then_not_found() {
    let state = AppState::in_memory();
    let Created(created) = create_user(
        State(state.clone()),
        ValidatedJson(create_request("Juan", "juan@example.com")),
    )
    .await
    .unwrap();

    let deleted = delete_user(State(state.clone()), Path(created.id)).await;
    assert!(deleted.is_ok());

    let again = delete_user(State(state.clone()), Path(created.id)).await;
    assert!(matches!(again.unwrap_err(), AppError::NotFound));

    let fetched = get_user(State(state), Path(created.id)).await;
    assert!(matches!(fetched.unwrap_err(), AppError::NotFound));
}

// =============================================================================
// Response Helper Tests
// =============================================================================

#[tokio::test]
async fn created_response_uses_201() {
    let response = Created("payload").into_response();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn no_content_response_uses_204() {
    let response = NoContent.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// =============================================================================
// Error Type Tests
// =============================================================================

#[tokio::test]
async fn app_error_status_codes() {
    let response = AppError::NotFound.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = AppError::validation("invalid field").into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = AppError::internal("boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn app_error_body_shape() {
    let response = AppError::NotFound.into_response();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert!(json["error"]["message"].is_string());
}

// =============================================================================
// Domain Model Tests
// =============================================================================

#[tokio::test]
async fn user_response_mapping() {
    let user = User::new("Juan", "juan@example.com").with_id(5);
    let response = UserResponse::try_from(user).unwrap();

    assert_eq!(response.id, 5);
    assert_eq!(response.name, "Juan");
    assert_eq!(response.email, "juan@example.com");
    assert!(response.created_at.is_none());
}
