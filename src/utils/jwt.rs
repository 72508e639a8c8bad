use anyhow::anyhow;
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::Claims;
use crate::utils::errors::AppError;

/// Mint a bearer token whose subject is the account's email.
pub fn create_access_token(email: &str, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let expire = Utc::now() + Duration::minutes(jwt_config.access_token_expire_minutes);

    let claims = Claims {
        sub: email.to_string(),
        exp: expire.timestamp() as usize,
    };

    encode(
        &Header::new(jwt_config.algorithm),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Decode and validate a bearer token. Expiry gets its own message so
/// clients can distinguish a stale session from a bad token.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::new(jwt_config.algorithm),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::unauthorized(anyhow!("Token has expired")),
        _ => AppError::unauthorized(anyhow!("Could not validate credentials")),
    })
}
