use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

fn credentials_error() -> AppError {
    AppError::unauthorized(anyhow::anyhow!("Could not validate credentials"))
}

/// Extractor that validates the bearer token and loads the account it
/// belongs to. A token whose subject no longer matches a stored account
/// is rejected the same way as a bad token.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(credentials_error)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(credentials_error)?;

        let claims = verify_token(token, &state.jwt_config)?;
        if claims.sub.is_empty() {
            return Err(credentials_error());
        }

        let user = UserService::find_by_email(&state.db, &claims.sub)
            .await?
            .ok_or_else(credentials_error)?;

        Ok(CurrentUser(user))
    }
}
