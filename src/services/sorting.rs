//! In-place catalog sorts

use crate::{models::Book, repository::Persistence};

use super::Library;

/// Bubble sort by ascending publisher; equal publishers keep their order
pub fn bubble_sort_by_publisher(books: &mut [Book]) {
    let n = books.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if books[j].publisher > books[j + 1].publisher {
                books.swap(j, j + 1);
            }
        }
    }
}

/// Insertion sort by descending number of copies.
///
/// An element only moves left past predecessors with strictly fewer copies,
/// so equal counts keep their order.
pub fn insertion_sort_by_copies(books: &mut [Book]) {
    for i in 1..books.len() {
        let mut j = i;
        while j > 0 && books[j].num_copies > books[j - 1].num_copies {
            books.swap(j, j - 1);
            j -= 1;
        }
    }
}

impl<P: Persistence> Library<P> {
    /// Reorder the live catalog by publisher. Not persisted until the next save.
    pub fn sort_by_publisher(&mut self) {
        bubble_sort_by_publisher(&mut self.data.books);
        tracing::info!("Sorted books by publisher (ascending order).");
    }

    /// Reorder the live catalog by copies, most first. Not persisted until the next save.
    pub fn sort_by_copies(&mut self) {
        insertion_sort_by_copies(&mut self.data.books);
        tracing::info!("Sorted books by number of copies (descending order).");
    }
}
