//! User data models and DTOs.
//!
//! # Core Types
//!
//! - [`User`] - Account row as stored, bcrypt hash included
//! - [`UserPublic`] - Response projection without the password
//!
//! # Request DTOs
//!
//! - [`CreateUserDto`] - Register a new account
//! - [`UpdateUserDto`] - Full replacement of an account's fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A user account.
///
/// The password column holds a bcrypt hash and never leaves the service
/// layer; every response goes through [`UserPublic`] instead.
#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a [`User`].
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct UserPublic {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserPublic {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// DTO for registering a new account.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateUserDto {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Full replacement payload for `PUT /users/{user_id}`. All fields are
/// required; the password is re-hashed on every update.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

/// Envelope for `GET /users`.
#[derive(Serialize, Debug, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserPublic>,
}

/// Generic acknowledgement body.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Message {
    pub message: String,
}
