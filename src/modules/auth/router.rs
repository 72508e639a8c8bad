use crate::state::AppState;
use axum::{Router, routing::post};

use super::controller::{login_user, refresh_access_token};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/token", post(login_user))
        .route("/refresh_token", post(refresh_access_token))
}
