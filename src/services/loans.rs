//! Borrow and return

use crate::{
    error::{AppError, AppResult},
    models::{Book, BorrowedBook},
    repository::Persistence,
};

use super::Library;

impl<P: Persistence> Library<P> {
    /// Books with a copy left and flagged available
    pub fn available_books(&self) -> Vec<&Book> {
        self.data.books.iter().filter(|b| b.is_available()).collect()
    }

    /// Catalog entry a borrowed entry points at, if it still exists
    pub fn borrowed_book(&self, entry: &BorrowedBook) -> Option<&Book> {
        self.data.books.iter().find(|b| b.isbn == entry.isbn)
    }

    /// Take one copy of the first book with `isbn`
    pub fn borrow_book(&mut self, isbn: u64) -> AppResult<&Book> {
        let Some(index) = self.data.books.iter().position(|b| b.isbn == isbn) else {
            tracing::warn!("Borrow failed: No book found with ISBN {}.", isbn);
            return Err(AppError::NotFound(
                "No book found with the provided ISBN.".to_string(),
            ));
        };

        let book = &mut self.data.books[index];
        if !book.is_available() {
            tracing::warn!("Borrow failed: Book not available for ISBN {}.", isbn);
            return Err(AppError::BusinessRule(
                "The selected book is not available for borrowing.".to_string(),
            ));
        }

        book.num_copies -= 1;
        tracing::info!("Book borrowed: {}", book);
        self.data.borrowed.push(BorrowedBook::new(isbn));
        self.save()?;

        Ok(&self.data.books[index])
    }

    /// Give back the first borrowed entry with `isbn`
    pub fn return_book(&mut self, isbn: u64) -> AppResult<BorrowedBook> {
        let Some(index) = self.data.borrowed.iter().position(|e| e.isbn == isbn) else {
            tracing::warn!("Return failed: No book found with ISBN {} or not borrowed.", isbn);
            return Err(AppError::NotFound(
                "No book found with the provided ISBN or not borrowed.".to_string(),
            ));
        };

        match self.data.books.iter_mut().find(|b| b.isbn == isbn) {
            Some(book) => {
                let Some(copies) = book.num_copies.checked_add(1) else {
                    tracing::warn!("Return failed: ISBN {} already holds the maximum number of copies.", isbn);
                    return Err(AppError::BusinessRule(
                        "The book already holds the maximum number of copies.".to_string(),
                    ));
                };
                book.num_copies = copies;
                tracing::info!("Book returned: {}", book);
            }
            None => {
                tracing::warn!("Book returned: ISBN {} is no longer in the catalog", isbn);
            }
        }
        let entry = self.data.borrowed.remove(index);
        self.save()?;

        Ok(entry)
    }
}
