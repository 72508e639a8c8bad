use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{LoginRequest, TokenResponse};
use crate::modules::todos::model::{
    CreateTodoDto, TodoListResponse, TodoPublic, TodoState, UpdateTodoDto,
};
use crate::modules::users::model::{
    CreateUserDto, Message, UpdateUserDto, UserListResponse, UserPublic,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::router::read_root,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::refresh_access_token,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_user_by_id,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::todos::controller::create_todo,
        crate::modules::todos::controller::get_todos,
        crate::modules::todos::controller::patch_todo,
        crate::modules::todos::controller::delete_todo,
    ),
    components(
        schemas(
            Message,
            UserPublic,
            CreateUserDto,
            UpdateUserDto,
            UserListResponse,
            LoginRequest,
            TokenResponse,
            ErrorResponse,
            TodoState,
            TodoPublic,
            CreateTodoDto,
            UpdateTodoDto,
            TodoListResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Root", description = "Service greeting"),
        (name = "Authentication", description = "Password login and token refresh"),
        (name = "Users", description = "Account management endpoints"),
        (name = "Todos", description = "Per-user task endpoints")
    ),
    info(
        title = "Taskbox API",
        version = "0.1.0",
        description = "A task-list REST API built with Rust, Axum, and SQLite featuring JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
