//! Borrowed book entry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A borrowed copy, referencing its catalog book by ISBN
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowedBook {
    pub isbn: u64,
    pub borrowed_at: DateTime<Utc>,
}

impl BorrowedBook {
    pub fn new(isbn: u64) -> Self {
        Self {
            isbn,
            borrowed_at: Utc::now(),
        }
    }
}
