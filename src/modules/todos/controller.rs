use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::CurrentUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::todos::model::{
    CreateTodoDto, FilterTodoParams, TodoListResponse, TodoPublic, TodoState, UpdateTodoDto,
};
use crate::modules::todos::service::TodoService;
use crate::modules::users::model::Message;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Create a task for the caller
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoDto,
    responses(
        (status = 201, description = "Task created", body = TodoPublic),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state, current_user, dto))]
pub async fn create_todo(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ValidatedJson(dto): ValidatedJson<CreateTodoDto>,
) -> Result<(StatusCode, Json<TodoPublic>), AppError> {
    let todo = TodoService::create_todo(&state.db, current_user.0.id, dto).await?;
    Ok((StatusCode::CREATED, Json(todo.into())))
}

/// List the caller's tasks
#[utoipa::path(
    get,
    path = "/todos",
    params(
        ("title" = Option<String>, Query, description = "Substring match on title"),
        ("description" = Option<String>, Query, description = "Substring match on description"),
        ("state" = Option<TodoState>, Query, description = "Exact state match"),
        ("limit" = Option<i64>, Query, description = "Page size, clamped to 1-100"),
        ("offset" = Option<i64>, Query, description = "Rows to skip")
    ),
    responses(
        (status = 200, description = "Matching tasks in insertion order", body = TodoListResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state, current_user))]
pub async fn get_todos(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Query(filter): Query<FilterTodoParams>,
) -> Result<Json<TodoListResponse>, AppError> {
    let todos = TodoService::get_todos(&state.db, current_user.0.id, &filter).await?;
    Ok(Json(TodoListResponse {
        todos: todos.into_iter().map(TodoPublic::from).collect(),
    }))
}

/// Partially update one of the caller's tasks
#[utoipa::path(
    patch,
    path = "/todos/{todo_id}",
    params(("todo_id" = i64, Path, description = "Task id")),
    request_body = UpdateTodoDto,
    responses(
        (status = 200, description = "Updated task", body = TodoPublic),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such task for this user", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state, current_user, dto))]
pub async fn patch_todo(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(todo_id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<UpdateTodoDto>,
) -> Result<Json<TodoPublic>, AppError> {
    let todo = TodoService::patch_todo(&state.db, current_user.0.id, todo_id, dto).await?;
    Ok(Json(todo.into()))
}

/// Delete one of the caller's tasks
#[utoipa::path(
    delete,
    path = "/todos/{todo_id}",
    params(("todo_id" = i64, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task deleted", body = Message),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No such task for this user", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Todos"
)]
#[instrument(skip(state, current_user))]
pub async fn delete_todo(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(todo_id): Path<i64>,
) -> Result<Json<Message>, AppError> {
    TodoService::delete_todo(&state.db, current_user.0.id, todo_id).await?;
    Ok(Json(Message {
        message: "Task has been deleted successfully".to_string(),
    }))
}
