//! Book records file

use crate::{error::AppResult, models::Book};

use super::file::SnapshotFile;

#[derive(Debug, Clone)]
pub struct BooksRepository {
    file: SnapshotFile<Vec<Book>>,
}

impl BooksRepository {
    pub fn new(file: SnapshotFile<Vec<Book>>) -> Self {
        Self { file }
    }

    /// Load the catalog, empty when the file is absent
    pub fn load(&self) -> AppResult<Vec<Book>> {
        Ok(self.file.read()?.unwrap_or_default())
    }

    pub fn save(&self, books: &[Book]) -> AppResult<()> {
        self.file.write(books)
    }
}
