//! Database configuration and connection pool initialization.
//!
//! The connection string is read from the `DATABASE_URL` environment
//! variable, e.g.:
//!
//! ```text
//! sqlite://taskbox.db
//! ```
//!
//! The database file is created on first run if it does not exist.
//! Foreign key enforcement is switched on for every connection so that
//! deleting an account also deletes its tasks.
//!
//! # Panics
//!
//! [`init_db_pool`] panics if `DATABASE_URL` is unset or the database
//! cannot be opened. Both are startup-time misconfigurations with no
//! sensible recovery.

use std::env;
use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub async fn init_db_pool() -> SqlitePool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let options = SqliteConnectOptions::from_str(&database_url)
        .expect("DATABASE_URL is not a valid SQLite connection string")
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .expect("Failed to connect to database")
}
