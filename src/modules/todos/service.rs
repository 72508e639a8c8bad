use anyhow::{Context, anyhow};
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::todos::model::{CreateTodoDto, FilterTodoParams, Todo, UpdateTodoDto};
use crate::utils::errors::AppError;

pub struct TodoService;

impl TodoService {
    #[instrument(skip(db, dto))]
    pub async fn create_todo(
        db: &SqlitePool,
        user_id: i64,
        dto: CreateTodoDto,
    ) -> Result<Todo, AppError> {
        let now = Utc::now();

        let todo = sqlx::query_as::<_, Todo>(
            "INSERT INTO todos (title, description, state, user_id, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING id, title, description, state, user_id, created_at, updated_at",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.state)
        .bind(user_id)
        .bind(now)
        .bind(now)
        .fetch_one(db)
        .await
        .context("Failed to insert task")
        .map_err(AppError::database)?;

        Ok(todo)
    }

    /// List the user's tasks, stacking whichever filters were supplied
    /// onto the ownership predicate.
    #[instrument(skip(db))]
    pub async fn get_todos(
        db: &SqlitePool,
        user_id: i64,
        filter: &FilterTodoParams,
    ) -> Result<Vec<Todo>, AppError> {
        let mut query = sqlx::QueryBuilder::new(
            "SELECT id, title, description, state, user_id, created_at, updated_at
             FROM todos
             WHERE user_id = ",
        );
        query.push_bind(user_id);

        if let Some(title) = &filter.title {
            query.push(" AND title LIKE ");
            query.push_bind(format!("%{}%", title));
        }

        if let Some(description) = &filter.description {
            query.push(" AND description LIKE ");
            query.push_bind(format!("%{}%", description));
        }

        if let Some(state) = filter.state {
            query.push(" AND state = ");
            query.push_bind(state);
        }

        query.push(" ORDER BY id LIMIT ");
        query.push_bind(filter.pagination.limit());
        query.push(" OFFSET ");
        query.push_bind(filter.pagination.offset());

        let todos = query
            .build_query_as::<Todo>()
            .fetch_all(db)
            .await
            .context("Failed to fetch tasks")
            .map_err(AppError::database)?;

        Ok(todos)
    }

    /// Apply a partial update to one of the user's tasks. An empty
    /// patch body returns the row unchanged, `updated_at` included.
    #[instrument(skip(db, dto))]
    pub async fn patch_todo(
        db: &SqlitePool,
        user_id: i64,
        todo_id: i64,
        dto: UpdateTodoDto,
    ) -> Result<Todo, AppError> {
        let existing = sqlx::query_as::<_, Todo>(
            "SELECT id, title, description, state, user_id, created_at, updated_at
             FROM todos
             WHERE id = ? AND user_id = ?",
        )
        .bind(todo_id)
        .bind(user_id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch task")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow!("Task not found")))?;

        if dto.is_empty() {
            return Ok(existing);
        }

        let todo = sqlx::query_as::<_, Todo>(
            "UPDATE todos
             SET title = ?, description = ?, state = ?, updated_at = ?
             WHERE id = ? AND user_id = ?
             RETURNING id, title, description, state, user_id, created_at, updated_at",
        )
        .bind(dto.title.unwrap_or(existing.title))
        .bind(dto.description.unwrap_or(existing.description))
        .bind(dto.state.unwrap_or(existing.state))
        .bind(Utc::now())
        .bind(todo_id)
        .bind(user_id)
        .fetch_one(db)
        .await
        .context("Failed to update task")
        .map_err(AppError::database)?;

        Ok(todo)
    }

    #[instrument(skip(db))]
    pub async fn delete_todo(db: &SqlitePool, user_id: i64, todo_id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ? AND user_id = ?")
            .bind(todo_id)
            .bind(user_id)
            .execute(db)
            .await
            .context("Failed to delete task")
            .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow!("Task not found")));
        }

        Ok(())
    }
}
