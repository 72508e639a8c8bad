use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{
    CreateUserDto, Message, UpdateUserDto, UserListResponse, UserPublic,
};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationParams;
use crate::validator::ValidatedJson;

/// Register a new account
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Account created", body = UserPublic),
        (status = 409, description = "Username or email already taken", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<UserPublic>), AppError> {
    let user = UserService::create_user(&state.db, dto).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// List accounts
#[utoipa::path(
    get,
    path = "/users",
    params(
        ("limit" = Option<i64>, Query, description = "Page size, clamped to 1-100"),
        ("offset" = Option<i64>, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "Accounts in insertion order", body = UserListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, _current_user))]
pub async fn get_users(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Query(pagination): Query<PaginationParams>,
) -> Result<Json<UserListResponse>, AppError> {
    let users =
        UserService::get_users(&state.db, pagination.limit(), pagination.offset()).await?;
    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserPublic::from).collect(),
    }))
}

/// Fetch one account by id
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "The account", body = UserPublic),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such account", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, _current_user))]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    _current_user: CurrentUser,
    Path(user_id): Path<i64>,
) -> Result<Json<UserPublic>, AppError> {
    let user = UserService::get_user(&state.db, user_id).await?;
    Ok(Json(user.into()))
}

/// Replace the caller's own account
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "Account id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated account", body = UserPublic),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the caller's account", body = ErrorResponse),
        (status = 409, description = "Username or email already taken", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, current_user, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<UserPublic>, AppError> {
    if current_user.0.id != user_id {
        return Err(AppError::forbidden(anyhow!("Not enough permissions")));
    }

    let user = UserService::update_user(&state.db, user_id, dto).await?;
    Ok(Json(user.into()))
}

/// Delete the caller's own account
#[utoipa::path(
    delete,
    path = "/users/{user_id}",
    params(("user_id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account deleted", body = Message),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not the caller's account", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state, current_user))]
pub async fn delete_user(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(user_id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    if current_user.0.id != user_id {
        return Err(AppError::forbidden(anyhow!("Not enough permissions")));
    }

    UserService::delete_user(&state.db, user_id).await?;
    Ok(Json(Message {
        message: "User deleted".to_string(),
    }))
}
