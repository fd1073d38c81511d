use crate::api::errors::ApiError;
use crate::db::{Author, AuthorRepository, Book, Database, NewAuthor};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{
    extract::{Extension, Path},
    Json,
};
use serde::Serialize;

/// Single-author response with the author's books loaded
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDetail {
    pub author_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub books: Vec<Book>,
}

/// Lists every author, books not populated
///
/// # Returns
/// * `Result<Json<Vec<Author>>, ApiError>` - All author records or error
#[axum::debug_handler]
pub async fn list_authors(
    Extension(database): Extension<Database>,
) -> Result<Json<Vec<Author>>, ApiError> {
    let mut conn = database.get_conn()?;
    let mut repo = AuthorRepository::new(&mut conn);

    let all_authors = repo.list_all()?;
    Ok(Json(all_authors))
}

/// Retrieves one author with their books, or 404 with an empty body
///
/// # Arguments
/// * `id` - Author identifier from the path
/// * `database` - Database connection pool
#[axum::debug_handler]
pub async fn get_author(
    Path(id): Path<i32>,
    Extension(database): Extension<Database>,
) -> Result<Response, ApiError> {
    let mut conn = database.get_conn()?;
    let mut repo = AuthorRepository::new(&mut conn);

    match repo.find_with_books(id)? {
        Some((author, books)) => Ok(Json(AuthorDetail {
            author_id: author.author_id,
            first_name: author.first_name,
            last_name: author.last_name,
            books,
        })
        .into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Overwrites the author matching the path identifier with the payload's
/// field values; 404 with an empty body when the identifier is absent
///
/// # Arguments
/// * `id` - Author identifier from the path
/// * `database` - Database connection pool
/// * `payload` - Replacement author record (all fields required)
#[axum::debug_handler]
pub async fn update_author(
    Path(id): Path<i32>,
    Extension(database): Extension<Database>,
    Json(payload): Json<Author>,
) -> Result<StatusCode, ApiError> {
    let mut conn = database.get_conn()?;
    let mut repo = AuthorRepository::new(&mut conn);

    if repo.update(id, &payload)? {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Creates a new author and answers 201 with the persisted record and a
/// Location header pointing at it
///
/// # Arguments
/// * `database` - Database connection pool
/// * `payload` - Insert payload; `authorId` may be omitted
#[axum::debug_handler]
pub async fn create_author(
    Extension(database): Extension<Database>,
    Json(payload): Json<NewAuthor>,
) -> Result<Response, ApiError> {
    let mut conn = database.get_conn()?;
    let mut repo = AuthorRepository::new(&mut conn);

    let created = repo.create(&payload)?;
    let location = format!("/api/Author/{}", created.author_id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    )
        .into_response())
}

/// Deletes the author matching the path identifier; 404 with an empty
/// body when the identifier is absent
///
/// # Arguments
/// * `id` - Author identifier from the path
/// * `database` - Database connection pool
#[axum::debug_handler]
pub async fn delete_author(
    Path(id): Path<i32>,
    Extension(database): Extension<Database>,
) -> Result<StatusCode, ApiError> {
    let mut conn = database.get_conn()?;
    let mut repo = AuthorRepository::new(&mut conn);

    if repo.delete(id)? {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
