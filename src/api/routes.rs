//! API routes configuration module

use crate::api::handlers::{
    create_author, delete_author, get_author, list_authors, update_author,
};
use crate::db::Database;
use axum::{routing::get, Extension, Router};

/// Creates and configures the API router with all routes
///
/// Both spellings of the collection path are registered; axum does not
/// fall back across a trailing slash.
///
/// # Arguments
/// * `database` - Database connection pool to be shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints and middleware
pub fn app(database: Database) -> Router {
    Router::new()
        .route("/api/Author", get(list_authors).post(create_author))
        .route("/api/Author/", get(list_authors).post(create_author))
        .route(
            "/api/Author/:id",
            get(get_author).put(update_author).delete(delete_author),
        )
        .layer(Extension(database))
}
