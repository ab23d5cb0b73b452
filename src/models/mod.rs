//! Data models for the library console

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, CreateBook, FieldError, UpdateBook};
pub use loan::BorrowedBook;
pub use user::{Identity, UserAccounts};

/// Everything the library persists, owned by one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryData {
    pub books: Vec<Book>,
    pub borrowed: Vec<BorrowedBook>,
    pub accounts: UserAccounts,
}
