use axum::{Form, Json, extract::State};
use tracing::instrument;
use utoipa::ToSchema;

use super::model::{LoginRequest, TokenResponse};
use super::service::AuthService;
use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Error body shape shared by every endpoint.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/auth/token",
    request_body(content = LoginRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Incorrect email or password", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, dto))]
pub async fn login_user(
    State(state): State<AppState>,
    Form(dto): Form<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = AuthService::login_user(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(token))
}

/// Trade a valid token for a fresh one
#[utoipa::path(
    post,
    path = "/auth/refresh_token",
    responses(
        (status = 200, description = "New token issued", body = TokenResponse),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Authentication"
)]
#[instrument(skip(state, current_user))]
pub async fn refresh_access_token(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> Result<Json<TokenResponse>, AppError> {
    let token = AuthService::refresh_token(&current_user.0, &state.jwt_config)?;
    Ok(Json(token))
}
