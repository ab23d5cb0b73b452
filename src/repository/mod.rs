//! Repository layer for the flat data files

pub mod books;
pub mod file;
pub mod loans;
pub mod users;

use crate::{
    config::{StorageConfig, UsersConfig},
    error::AppResult,
    models::LibraryData,
};

use file::SnapshotFile;

/// Load and store the complete library state
#[cfg_attr(test, mockall::automock)]
pub trait Persistence {
    fn load(&self) -> AppResult<LibraryData>;

    /// Rewrite every collection, whether or not it changed
    fn save(&self, data: &LibraryData) -> AppResult<()>;
}

/// File-backed repository, one file per collection
#[derive(Debug, Clone)]
pub struct Repository {
    pub books: books::BooksRepository,
    pub loans: loans::LoansRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a repository over the configured files
    pub fn new(storage: &StorageConfig, users: &UsersConfig) -> Self {
        Self {
            books: books::BooksRepository::new(SnapshotFile::new(storage.books_path())),
            loans: loans::LoansRepository::new(SnapshotFile::new(storage.borrowed_path())),
            users: users::UsersRepository::new(
                SnapshotFile::new(storage.users_path()),
                users.clone(),
            ),
        }
    }
}

impl Persistence for Repository {
    fn load(&self) -> AppResult<LibraryData> {
        let data = LibraryData {
            books: self.books.load()?,
            borrowed: self.loans.load()?,
            accounts: self.users.load()?,
        };
        tracing::debug!(
            "Loaded {} books, {} borrowed, {} accounts",
            data.books.len(),
            data.borrowed.len(),
            data.accounts.len()
        );
        Ok(data)
    }

    fn save(&self, data: &LibraryData) -> AppResult<()> {
        self.books.save(&data.books)?;
        self.loans.save(&data.borrowed)?;
        self.users.save(&data.accounts)?;
        tracing::debug!("Saved library data");
        Ok(())
    }
}
