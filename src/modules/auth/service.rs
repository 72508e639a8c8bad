use anyhow::anyhow;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::User;
use crate::modules::users::service::UserService;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_access_token;
use crate::utils::password::verify_password;

use super::model::{LoginRequest, TokenResponse};

pub struct AuthService;

impl AuthService {
    /// Password login. Unknown email and wrong password share one 401
    /// message so the endpoint does not reveal which accounts exist.
    #[instrument(skip(db, dto, jwt_config))]
    pub async fn login_user(
        db: &SqlitePool,
        dto: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let user = UserService::find_by_email(db, &dto.username)
            .await?
            .ok_or_else(|| AppError::unauthorized(anyhow!("Incorrect email or password")))?;

        if !verify_password(&dto.password, &user.password)? {
            return Err(AppError::unauthorized(anyhow!(
                "Incorrect email or password"
            )));
        }

        let access_token = create_access_token(&user.email, jwt_config)?;

        Ok(TokenResponse::bearer(access_token))
    }

    /// Issue a fresh token for an already-authenticated account.
    pub fn refresh_token(user: &User, jwt_config: &JwtConfig) -> Result<TokenResponse, AppError> {
        let access_token = create_access_token(&user.email, jwt_config)?;

        Ok(TokenResponse::bearer(access_token))
    }
}
