use anyhow::{Context, anyhow};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::users::model::{CreateUserDto, UpdateUserDto, User};
use crate::utils::errors::AppError;
use crate::utils::password::hash_password;

pub struct UserService;

impl UserService {
    /// Register an account. Duplicates are pre-checked so username and
    /// email collisions get distinct messages; the unique constraints
    /// still back this up when two registrations race past the check.
    #[instrument(skip(db, dto))]
    pub async fn create_user(db: &SqlitePool, dto: CreateUserDto) -> Result<User, AppError> {
        if let Some(existing) =
            Self::find_by_username_or_email(db, &dto.username, &dto.email).await?
        {
            if existing.username == dto.username {
                return Err(AppError::conflict(anyhow!("Username already exists")));
            }
            return Err(AppError::conflict(anyhow!("Email already exists")));
        }

        let hashed_password = hash_password(&dto.password)?;
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, email, password, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, username, email, password, created_at, updated_at",
        )
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
        .map_err(|err| {
            if err
                .as_database_error()
                .is_some_and(|e| e.is_unique_violation())
            {
                AppError::conflict(anyhow!("Username or Email already exists"))
            } else {
                AppError::database(err)
            }
        })?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn get_users(
        db: &SqlitePool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, created_at, updated_at
             FROM users
             ORDER BY id
             LIMIT ? OFFSET ?",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await
        .context("Failed to fetch users")
        .map_err(AppError::database)?;

        Ok(users)
    }

    #[instrument(skip(db))]
    pub async fn get_user(db: &SqlitePool, id: i64) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, created_at, updated_at
             FROM users
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch user by id")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

        Ok(user)
    }

    pub async fn find_by_email(db: &SqlitePool, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, created_at, updated_at
             FROM users
             WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to look up user by email")
        .map_err(AppError::database)?;

        Ok(user)
    }

    async fn find_by_username_or_email(
        db: &SqlitePool,
        username: &str,
        email: &str,
    ) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, email, password, created_at, updated_at
             FROM users
             WHERE username = ? OR email = ?
             LIMIT 1",
        )
        .bind(username)
        .bind(email)
        .fetch_optional(db)
        .await
        .context("Failed to look up user by username or email")
        .map_err(AppError::database)?;

        Ok(user)
    }

    /// Replace every mutable field of the account. A collision with
    /// another account's username or email surfaces as 409.
    #[instrument(skip(db, dto))]
    pub async fn update_user(
        db: &SqlitePool,
        id: i64,
        dto: UpdateUserDto,
    ) -> Result<User, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let user = sqlx::query_as::<_, User>(
            "UPDATE users
             SET username = ?, email = ?, password = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, username, email, password, created_at, updated_at",
        )
        .bind(&dto.username)
        .bind(&dto.email)
        .bind(&hashed_password)
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(db)
        .await
        .map_err(|err| {
            if err
                .as_database_error()
                .is_some_and(|e| e.is_unique_violation())
            {
                AppError::conflict(anyhow!("Username or Email already exists"))
            } else {
                AppError::database(err)
            }
        })?
        .ok_or_else(|| AppError::not_found(anyhow!("User not found")))?;

        Ok(user)
    }

    #[instrument(skip(db))]
    pub async fn delete_user(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(db)
            .await
            .context("Failed to delete user")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("User not found")));
        }

        Ok(())
    }
}
