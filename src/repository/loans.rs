//! Borrowed books file

use crate::{error::AppResult, models::BorrowedBook};

use super::file::SnapshotFile;

#[derive(Debug, Clone)]
pub struct LoansRepository {
    file: SnapshotFile<Vec<BorrowedBook>>,
}

impl LoansRepository {
    pub fn new(file: SnapshotFile<Vec<BorrowedBook>>) -> Self {
        Self { file }
    }

    /// Load the borrowed list, empty when the file is absent
    pub fn load(&self) -> AppResult<Vec<BorrowedBook>> {
        Ok(self.file.read()?.unwrap_or_default())
    }

    pub fn save(&self, borrowed: &[BorrowedBook]) -> AppResult<()> {
        self.file.write(borrowed)
    }
}
