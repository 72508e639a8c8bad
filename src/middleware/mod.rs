//! Middleware modules for request processing.
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. The [`auth::CurrentUser`] extractor validates the JWT and loads
//!    the matching account from the database
//! 3. Handler executes with the authenticated user, or the request is
//!    rejected with 401 before the handler runs

pub mod auth;
