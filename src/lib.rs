//! # Taskbox API
//!
//! A REST API built with Rust, Axum, and SQLite that lets each registered
//! user keep a private task list behind JWT authentication.
//!
//! ## Overview
//!
//! Taskbox provides a small but complete backend:
//!
//! - **Authentication**: OAuth2 password-style login issuing short-lived JWT access tokens
//! - **User Management**: Register, list, fetch, update, and delete accounts
//! - **Tasks**: Per-user to-do items with filtering and pagination
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture inspired by NestJS:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (JWT, database, CORS)
//! ├── middleware/       # Auth middleware and extractors
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Login and token refresh
//! │   ├── todos/       # Task management
//! │   └── users/       # Account management
//! └── utils/           # Shared utilities
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs, database structs
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! Logging in with a registered email and password at `POST /auth/token`
//! returns a bearer access token (default lifetime: 30 minutes). Every
//! endpoint except registration and the greeting requires it, and
//! `POST /auth/refresh_token` swaps a still-valid token for a fresh one.
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! DATABASE_URL=sqlite://taskbox.db
//! SECRET_KEY=your-secure-secret-key
//! ALGORITHM=HS256
//! ACCESS_TOKEN_EXPIRE_MINUTES=30
//! ```
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Scalar: `http://localhost:8000/scalar`
//! - OpenAPI JSON: `http://localhost:8000/api-docs/openapi.json`
//!
//! ## Modules
//!
//! - [`config`]: Application configuration
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Request logging middleware
//! - [`middleware`]: Authentication extractor
//! - [`modules`]: Feature modules (auth, todos, users)
//! - [`router`]: Main application router
//! - [`state`]: Shared application state
//! - [`utils`]: Shared utilities (errors, JWT, password hashing)
//! - [`validator`]: Request validation utilities

pub mod config;
pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
