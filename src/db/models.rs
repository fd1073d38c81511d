use crate::schema::{authors, books};
use diesel::{Associations, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};

/// An author row. This is both the list/detail wire shape (camelCase JSON)
/// and the full-overwrite update payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = authors)]
#[diesel(primary_key(author_id))]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Unique identifier for the author
    pub author_id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Insert payload for a new author. A supplied `authorId` is persisted
/// verbatim; when omitted the store assigns one.
#[derive(Debug, Clone, Deserialize, Insertable)]
#[diesel(table_name = authors)]
#[serde(rename_all = "camelCase")]
pub struct NewAuthor {
    #[serde(default)]
    pub author_id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
}

/// A book row, reachable only through its author's detail view. Serialized
/// with `authorId` as a scalar foreign key and no back-reference to the
/// author, so the author/book cycle never reaches the serializer.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable, Identifiable, Associations,
)]
#[diesel(belongs_to(Author, foreign_key = author_id))]
#[diesel(table_name = books)]
#[diesel(primary_key(book_id))]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier for the book
    pub book_id: i32,
    /// Identifier of the owning author
    pub author_id: i32,
    pub title: String,
    pub publish_date: Option<String>,
}
