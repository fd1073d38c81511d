mod author_repository;
mod models;

use crate::errors::Error;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

pub use author_repository::*;
pub use models::*;

/// Idempotent schema setup. The foreign key reference on books is
/// documentation only: PRAGMA foreign_keys stays off, so deleting an
/// author orphans its book rows rather than cascading or failing.
const SCHEMA_SQL: &str = "\
CREATE TABLE IF NOT EXISTS authors (
    author_id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS books (
    book_id INTEGER PRIMARY KEY,
    author_id INTEGER NOT NULL REFERENCES authors (author_id),
    title TEXT NOT NULL,
    publish_date TEXT
);
";

#[derive(Clone, Debug)]
pub struct Database {
    pool: Arc<Pool<ConnectionManager<SqliteConnection>>>,
}

impl Database {
    pub fn new(database_url: &str) -> Self {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool = Pool::builder()
            .build(manager)
            .expect("Failed to create pool.");

        pool.get()
            .expect("Failed to get connection")
            .batch_execute(SCHEMA_SQL)
            .expect("Failed to create tables");

        Database {
            pool: Arc::new(pool),
        }
    }

    /// Checks out a connection for the duration of one request. A store
    /// that has become unreachable surfaces here as a pool error.
    pub fn get_conn(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>, Error> {
        Ok(self.pool.get()?)
    }
}
