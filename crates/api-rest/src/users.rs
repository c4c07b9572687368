//! User CRUD handlers.
//!
//! ```text
//! POST   /api/users       {"first_name":"Ada","last_name":"Lovelace","biography":"Mathematician"}
//! GET    /api/users
//! GET    /api/users/{id}
//! PUT    /api/users/{id}  {"first_name":"Ada","last_name":"Lovelace","biography":"Mathematician"}
//! DELETE /api/users/{id}
//! ```
//!
//! Each handler is a single pass from request to response. Failures are returned as
//! [`ApiError`] and rendered as `{"error": "..."}` with the matching status code.

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Response,
};

use api_shared::{ErrorRes, UserReq, UserRes};
use users_core::{validate_user_fields, UserFields};
use users_uuid::UserId;

use crate::response::json_response;
use crate::{ApiError, AppState};

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserReq,
    responses(
        (status = 201, description = "User created", body = UserRes),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Create a new user
///
/// Trims every field, rejects the request if any of them ends up empty, and stores the user
/// under a freshly generated id. Any `id` in the body is ignored.
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let fields = parse_user_body(body)?;
    let user = state.store.insert(fields)?;
    tracing::info!("Created user {}", user.id);
    Ok(json_response(StatusCode::CREATED, &UserRes::from(user)))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users, in no particular order", body = [UserRes]),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List every user
///
/// An empty store answers with `[]`.
#[axum::debug_handler]
pub async fn list_users(State(state): State<AppState>) -> Result<Response, ApiError> {
    let users: Vec<UserRes> = state
        .store
        .find_all()?
        .into_iter()
        .map(UserRes::from)
        .collect();
    Ok(json_response(StatusCode::OK, &users))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User found", body = UserRes),
        (status = 404, description = "Malformed or unknown id", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Fetch one user by id
#[axum::debug_handler]
pub async fn get_user(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = parse_user_id(path)?;
    match state.store.find_by_id(&id)? {
        Some(user) => Ok(json_response(StatusCode::OK, &UserRes::from(user))),
        None => {
            tracing::debug!("User {} not found", id);
            Err(ApiError::NotFound)
        }
    }
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    request_body = UserReq,
    responses(
        (status = 200, description = "User replaced", body = UserRes),
        (status = 400, description = "Invalid JSON or missing required fields", body = ErrorRes),
        (status = 404, description = "Malformed or unknown id", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Replace a user
///
/// Full replacement: all three fields are required, exactly as for create. The stored record
/// keeps the id from the path; any `id` in the body is ignored.
#[axum::debug_handler]
pub async fn update_user(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let id = parse_user_id(path)?;
    let fields = parse_user_body(body)?;
    match state.store.update(&id, fields)? {
        Some(user) => {
            tracing::info!("Updated user {}", id);
            Ok(json_response(StatusCode::OK, &UserRes::from(user)))
        }
        None => {
            tracing::debug!("User {} not found for update", id);
            Err(ApiError::NotFound)
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "User identifier (UUID)")),
    responses(
        (status = 200, description = "User deleted; body is the removed user", body = UserRes),
        (status = 404, description = "Malformed or unknown id", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Delete a user
#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = parse_user_id(path)?;
    match state.store.delete(&id)? {
        Some(user) => {
            tracing::info!("Deleted user {}", id);
            Ok(json_response(StatusCode::OK, &UserRes::from(user)))
        }
        None => {
            tracing::debug!("User {} not found for delete", id);
            Err(ApiError::NotFound)
        }
    }
}

/// A malformed id is indistinguishable from an unknown one: both are 404.
fn parse_user_id(path: Result<Path<String>, PathRejection>) -> Result<UserId, ApiError> {
    let Path(raw) = path.map_err(|e| {
        tracing::debug!("Rejected user id path: {}", e);
        ApiError::NotFound
    })?;
    UserId::parse(&raw).map_err(|e| {
        tracing::debug!("Invalid user id: {}", e);
        ApiError::NotFound
    })
}

/// Content type is not checked; the body has to be a JSON object of the right shape, or `null`.
fn parse_user_body(body: Result<Bytes, BytesRejection>) -> Result<UserFields, ApiError> {
    let bytes = body.map_err(|e| {
        tracing::debug!("Unreadable request body: {}", e);
        ApiError::InvalidBody
    })?;
    let req = UserReq::from_json_slice(&bytes).map_err(|e| {
        tracing::debug!("Invalid user JSON: {}", e);
        ApiError::InvalidBody
    })?;
    Ok(validate_user_fields(
        &req.first_name,
        &req.last_name,
        &req.biography,
    )?)
}
