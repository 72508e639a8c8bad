use crate::modules::users::controller::{
    create_user, delete_user, get_user_by_id, get_users, update_user,
};
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route(
            "/{user_id}",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
}
