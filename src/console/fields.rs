//! Interactive entry of book fields

use std::io::{BufRead, Write};

use crate::{
    error::AppResult,
    models::{
        book::{
            parse_availability, parse_copies, parse_copies_or_keep, parse_isbn, parse_isbn_lookup,
            parse_language, parse_publisher, parse_publisher_update, parse_title,
        },
        Book, CreateBook, FieldError, UpdateBook,
    },
    services::catalog::isbn_conflicts,
};

use super::Console;

/// Ask for an ISBN identifying an existing entry
pub fn prompt_lookup_isbn<R: BufRead, W: Write>(console: &mut Console<R, W>, label: &str) -> AppResult<u64> {
    console.prompt_until(label, parse_isbn_lookup)
}

/// Collect every field of a new book
pub fn prompt_new_book<R: BufRead, W: Write>(console: &mut Console<R, W>) -> AppResult<CreateBook> {
    Ok(CreateBook {
        isbn: console.prompt_until("Enter ISBN: ", parse_isbn)?,
        title: console.prompt_until("Enter Title: ", parse_title)?,
        publisher: console.prompt_until("Enter Publisher: ", parse_publisher)?,
        language: console.prompt_until("Enter Language: ", parse_language)?,
        num_copies: console.prompt_until("Enter Number of Copies: ", parse_copies)?,
        availability: console.prompt_until("Enter Availability (True/False): ", parse_availability)?,
    })
}

/// Collect replacement values for `current`.
///
/// Every field must be entered again except the copy count, where an empty
/// answer keeps the current value.
pub fn prompt_book_update<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    books: &[Book],
    current: &Book,
) -> AppResult<UpdateBook> {
    let isbn = console.prompt_until(&format!("Enter new ISBN (current: {}): ", current.isbn), |input| {
        let isbn = parse_isbn(input)?;
        if isbn_conflicts(books, current.isbn, isbn) {
            Err(FieldError::IsbnTaken)
        } else {
            Ok(isbn)
        }
    })?;
    let title = console.prompt_until(&format!("Enter new Title (current: {}): ", current.title), parse_title)?;
    let publisher = console.prompt_until(
        &format!("Enter new Publisher (current: {}): ", current.publisher),
        parse_publisher_update,
    )?;
    let language = console.prompt_until(
        &format!("Enter new Language (current: {}): ", current.language),
        parse_language,
    )?;
    let num_copies = console.prompt_until(
        &format!("Enter new Number of Copies (current: {}): ", current.num_copies),
        |input| parse_copies_or_keep(input, current.num_copies),
    )?;
    let availability = console.prompt_until(
        &format!("Enter new Availability (True/False, current: {}): ", current.availability),
        parse_availability,
    )?;

    Ok(UpdateBook {
        isbn,
        title,
        publisher,
        language,
        num_copies,
        availability,
    })
}
