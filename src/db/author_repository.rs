use crate::db::models::{Author, Book, NewAuthor};
use crate::errors::Error;
use diesel::prelude::*;
use diesel::sql_types::Integer;
use diesel::sqlite::SqliteConnection;

diesel::define_sql_function! {
    fn last_insert_rowid() -> Integer;
}

/// Repository for managing author records in the SQLite database
pub struct AuthorRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> AuthorRepository<'a> {
    /// Creates a new AuthorRepository instance
    ///
    /// # Arguments
    ///
    /// * `conn` - Mutable reference to SQLite database connection
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        AuthorRepository { conn }
    }

    /// Retrieves every author, ordered by identifier, without books
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn list_all(&mut self) -> Result<Vec<Author>, Error> {
        use crate::schema::authors::dsl::*;

        let all_authors = authors.order_by(author_id.asc()).load::<Author>(self.conn)?;
        Ok(all_authors)
    }

    /// Retrieves a single author by identifier together with all books
    /// whose foreign key matches, freshly queried
    ///
    /// # Arguments
    ///
    /// * `id` - The author identifier to look up
    ///
    /// # Returns
    ///
    /// `None` when no author row matches
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn find_with_books(&mut self, id: i32) -> Result<Option<(Author, Vec<Book>)>, Error> {
        use crate::schema::authors;
        use crate::schema::books;

        let found = authors::table
            .filter(authors::author_id.eq(id))
            .first::<Author>(self.conn)
            .optional()?;

        match found {
            Some(author) => {
                let their_books = Book::belonging_to(&author)
                    .order_by(books::book_id.asc())
                    .load::<Book>(self.conn)?;
                Ok(Some((author, their_books)))
            }
            None => Ok(None),
        }
    }

    /// Inserts a new author and returns the persisted row
    ///
    /// A supplied identifier is inserted verbatim (a duplicate fails the
    /// primary key constraint); an omitted one is resolved through
    /// `last_insert_rowid()` after the insert.
    ///
    /// # Arguments
    ///
    /// * `new_author` - The insert payload
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn create(&mut self, new_author: &NewAuthor) -> Result<Author, Error> {
        use crate::schema::authors;

        diesel::insert_into(authors::table)
            .values(new_author)
            .execute(self.conn)?;

        let assigned_id = match new_author.author_id {
            Some(id) => id,
            None => diesel::select(last_insert_rowid()).get_result::<i32>(self.conn)?,
        };

        let created = authors::table
            .filter(authors::author_id.eq(assigned_id))
            .first::<Author>(self.conn)?;
        Ok(created)
    }

    /// Overwrites the identifier and both name fields of the author row
    /// matching `id` in one statement
    ///
    /// # Arguments
    ///
    /// * `id` - The author identifier keying the update
    /// * `author` - The replacement field values
    ///
    /// # Returns
    ///
    /// Whether exactly one row was affected; false means the identifier
    /// does not exist
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn update(&mut self, id: i32, author: &Author) -> Result<bool, Error> {
        use crate::schema::authors;

        let affected = diesel::update(authors::table.filter(authors::author_id.eq(id)))
            .set((
                authors::author_id.eq(author.author_id),
                authors::first_name.eq(&author.first_name),
                authors::last_name.eq(&author.last_name),
            ))
            .execute(self.conn)?;
        Ok(affected == 1)
    }

    /// Removes the author row matching `id`. Book rows are left in place
    ///
    /// # Arguments
    ///
    /// * `id` - The author identifier keying the delete
    ///
    /// # Returns
    ///
    /// Whether exactly one row was removed; false means the identifier
    /// does not exist
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn delete(&mut self, id: i32) -> Result<bool, Error> {
        use crate::schema::authors::dsl::*;

        let affected = diesel::delete(authors.filter(author_id.eq(id))).execute(self.conn)?;
        Ok(affected == 1)
    }
}
