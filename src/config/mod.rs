//! Configuration modules for the Taskbox API.
//!
//! Each submodule handles one aspect of configuration, loaded from
//! environment variables with development-friendly defaults.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: SQLite database connection pool initialization
//! - [`jwt`]: JWT authentication configuration
//!
//! # Example
//!
//! ```ignore
//! use crate::config::jwt::JwtConfig;
//! use crate::config::database::init_db_pool;
//!
//! let jwt_config = JwtConfig::from_env();
//! let db = init_db_pool().await;
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
