use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims. `sub` carries the account email.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// Credential body for the token endpoint. Field names follow the
/// OAuth2 password grant, so the email travels in `username`.
#[derive(Debug, Deserialize, Clone, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Bearer token envelope returned by login and refresh.
#[derive(Debug, Serialize, Clone, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
        }
    }
}
