//! Business logic over the library state

pub mod catalog;
pub mod loans;
pub mod sorting;
pub mod users;

use crate::{
    error::AppResult,
    models::{Book, BorrowedBook, LibraryData, UserAccounts},
    repository::Persistence,
};

/// Session-wide library: the in-memory collections and where they are stored.
///
/// Every successful mutation is followed by a full save through `store`.
pub struct Library<P: Persistence> {
    data: LibraryData,
    store: P,
    admin_login: String,
}

impl<P: Persistence> Library<P> {
    /// Load all collections from `store`
    pub fn open(store: P, admin_login: impl Into<String>) -> AppResult<Self> {
        let data = store.load()?;
        Ok(Self::new(data, store, admin_login))
    }

    pub fn new(data: LibraryData, store: P, admin_login: impl Into<String>) -> Self {
        Self {
            data,
            store,
            admin_login: admin_login.into(),
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.data.books
    }

    pub fn borrowed(&self) -> &[BorrowedBook] {
        &self.data.borrowed
    }

    pub fn accounts(&self) -> &UserAccounts {
        &self.data.accounts
    }

    /// Persist all three collections
    pub fn save(&self) -> AppResult<()> {
        self.store.save(&self.data)
    }
}
