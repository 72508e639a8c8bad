use crate::modules::todos::controller::{create_todo, delete_todo, get_todos, patch_todo};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, patch},
};

pub fn init_todos_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_todos).post(create_todo))
        .route("/{todo_id}", patch(patch_todo).delete(delete_todo))
}
