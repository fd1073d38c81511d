//! Publisher web API: CRUD over authors and their books, backed by SQLite
//! through a small repository layer and served with Axum.

/// HTTP surface: handlers, routes, server setup and error mapping
pub mod api;
/// Command line argument parsing
pub mod cli;
/// Connection pool, models and the author repository
pub mod db;
/// Storage error taxonomy
pub mod errors;
/// Diesel table definitions
pub mod schema;
/// Logging setup
pub mod utils;
