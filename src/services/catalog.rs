//! Catalog management

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Book, CreateBook, Identity, UpdateBook},
    repository::Persistence,
};

use super::Library;

const NO_SUCH_BOOK: &str = "No book found with the provided ISBN.";

/// True when `candidate` belongs to a book other than the one currently
/// identified by `current`.
///
/// Every book sharing `current` counts as "this book", so duplicates of the
/// book being edited never block keeping its ISBN.
pub fn isbn_conflicts(books: &[Book], current: u64, candidate: u64) -> bool {
    books
        .iter()
        .filter(|b| b.isbn != current)
        .any(|b| b.isbn == candidate)
}

impl<P: Persistence> Library<P> {
    /// Only the admin identity may change the catalog
    pub fn authorize_admin(&self, identity: &Identity) -> AppResult<()> {
        if identity.login == self.admin_login {
            Ok(())
        } else {
            tracing::warn!("Access denied for user {}", identity);
            Err(AppError::Authorization(
                "Only admin can perform this operation.".to_string(),
            ))
        }
    }

    /// First book with this ISBN
    pub fn find_book(&self, isbn: u64) -> AppResult<&Book> {
        self.data
            .books
            .iter()
            .find(|b| b.isbn == isbn)
            .ok_or_else(|| AppError::NotFound(NO_SUCH_BOOK.to_string()))
    }

    /// Append a new book. Duplicate ISBNs are accepted.
    pub fn add_book(&mut self, identity: &Identity, request: CreateBook) -> AppResult<&Book> {
        self.authorize_admin(identity)?;
        request.validate()?;

        let book = Book::from(request);
        tracing::info!("Book added: {}", book);
        self.data.books.push(book);
        self.save()?;

        let index = self.data.books.len() - 1;
        Ok(&self.data.books[index])
    }

    /// Replace every field of the first book with `isbn`
    ///
    /// Borrowed entries only carry an ISBN, so a new ISBN re-points every
    /// entry holding the old one, including entries taken from a duplicate
    /// record that keeps the old ISBN.
    pub fn update_book(&mut self, identity: &Identity, isbn: u64, request: UpdateBook) -> AppResult<&Book> {
        self.authorize_admin(identity)?;
        request.validate()?;

        let Some(index) = self.data.books.iter().position(|b| b.isbn == isbn) else {
            tracing::warn!("Update failed: No book found with ISBN {}.", isbn);
            return Err(AppError::NotFound(NO_SUCH_BOOK.to_string()));
        };
        if isbn_conflicts(&self.data.books, isbn, request.isbn) {
            return Err(AppError::Conflict(
                "ISBN already exists in the database.".to_string(),
            ));
        }

        let new_isbn = request.isbn;
        self.data.books[index].apply(request);
        if new_isbn != isbn {
            // Borrowed entries follow the book to its new ISBN
            for entry in self.data.borrowed.iter_mut().filter(|e| e.isbn == isbn) {
                entry.isbn = new_isbn;
            }
        }
        tracing::info!("Book updated: {}", self.data.books[index]);
        self.save()?;

        Ok(&self.data.books[index])
    }

    /// Remove the first book with `isbn`
    pub fn delete_book(&mut self, identity: &Identity, isbn: u64) -> AppResult<Book> {
        self.authorize_admin(identity)?;

        let Some(index) = self.data.books.iter().position(|b| b.isbn == isbn) else {
            tracing::warn!("Delete failed: No book found with ISBN {}.", isbn);
            return Err(AppError::NotFound(NO_SUCH_BOOK.to_string()));
        };

        let book = self.data.books.remove(index);
        tracing::info!("Book deleted: {}", book);
        self.save()?;

        Ok(book)
    }
}
