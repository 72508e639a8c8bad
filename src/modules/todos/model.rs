//! Task data models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::utils::pagination::PaginationParams;

/// Lifecycle of a task. Stored as lowercase text.
#[derive(Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum TodoState {
    Draft,
    Todo,
    Doing,
    Done,
}

/// A task row as stored.
#[derive(FromRow, Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub state: TodoState,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response projection of a [`Todo`]. The owner id stays server-side;
/// ownership is implied by the token used to fetch it.
#[derive(Serialize, Debug, Clone, PartialEq, ToSchema)]
pub struct TodoPublic {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub state: TodoState,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoPublic {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title,
            description: todo.description,
            state: todo.state,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

/// DTO for creating a task.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateTodoDto {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
    pub state: TodoState,
}

/// Partial update for `PATCH /todos/{todo_id}`; absent fields keep
/// their stored values.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateTodoDto {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub state: Option<TodoState>,
}

impl UpdateTodoDto {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.state.is_none()
    }
}

/// Envelope for `GET /todos`.
#[derive(Serialize, Debug, ToSchema)]
pub struct TodoListResponse {
    pub todos: Vec<TodoPublic>,
}

/// Query filters for the task list. All are optional and combinable;
/// text filters match substrings, `state` matches exactly.
#[derive(Deserialize, Debug, Clone)]
pub struct FilterTodoParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub state: Option<TodoState>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}
