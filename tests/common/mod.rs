use axum::body::Body;
use axum::http::Request;
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence};
use http_body_util::BodyExt;
use jsonwebtoken::Algorithm;
use sqlx::SqlitePool;
use taskbox::config::cors::CorsConfig;
use taskbox::config::jwt::JwtConfig;
use taskbox::modules::todos::model::TodoState;
use taskbox::router::init_router;
use taskbox::state::AppState;
use taskbox::utils::password::hash_password;
use tower::ServiceExt;
use uuid::Uuid;

/// Deterministic JWT settings so tests can mint and verify tokens
/// without touching the environment.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "test-secret-key".to_string(),
        algorithm: Algorithm::HS256,
        access_token_expire_minutes: 30,
    }
}

pub fn setup_test_app(pool: SqlitePool) -> axum::Router {
    let state = AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
}

#[allow(dead_code)]
pub async fn create_test_user(
    pool: &SqlitePool,
    username: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let hashed = hash_password(password).unwrap();

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (username, email, password) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(username)
    .bind(email)
    .bind(&hashed)
    .fetch_one(pool)
    .await
    .unwrap();

    TestUser {
        id,
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Log in through the form endpoint and return the bearer token.
#[allow(dead_code)]
pub async fn get_auth_token(app: &axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/auth/token")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(format!(
            "username={}&password={}",
            email, password
        )))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert!(
        response.status().is_success(),
        "login failed for {}: {}",
        email,
        response.status()
    );

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn generate_unique_username() -> String {
    format!("user-{}", Uuid::new_v4())
}

#[allow(dead_code)]
pub fn random_title() -> String {
    Sentence(3..6).fake()
}

#[allow(dead_code)]
pub fn random_description() -> String {
    Paragraph(1..2).fake()
}

#[allow(dead_code)]
pub async fn create_test_todo(
    pool: &SqlitePool,
    user_id: i64,
    title: &str,
    description: &str,
    state: TodoState,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO todos (title, description, state, user_id) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(title)
    .bind(description)
    .bind(state)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .unwrap()
}
