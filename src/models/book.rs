//! Book record model, request types and field parsing

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use validator::{Validate, ValidationError};

/// Smallest number with 13 decimal digits
pub const ISBN_MIN: u64 = 1_000_000_000_000;
/// Largest number with 13 decimal digits
pub const ISBN_MAX: u64 = 9_999_999_999_999;

/// Book record as stored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub isbn: u64,
    pub title: String,
    pub publisher: String,
    pub language: String,
    pub num_copies: u32,
    pub availability: bool,
}

impl Book {
    /// A book can be lent when a copy is left and it is flagged available
    pub fn is_available(&self) -> bool {
        self.num_copies > 0 && self.availability
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ISBN: {}, Title: {}, Publisher: {}, Language: {}, Number of Copies: {}, Availability: {}",
            self.isbn, self.title, self.publisher, self.language, self.num_copies, self.availability
        )
    }
}

/// Create book request
#[derive(Debug, Clone, Validate)]
pub struct CreateBook {
    #[validate(range(min = 1_000_000_000_000u64, max = 9_999_999_999_999u64, message = "ISBN must have 13 digits"))]
    pub isbn: u64,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(custom(function = "validate_letters_and_spaces"))]
    pub publisher: String,
    #[validate(custom(function = "validate_letters"))]
    pub language: String,
    #[validate(range(min = 1u32, message = "Number of copies must be greater than zero"))]
    pub num_copies: u32,
    pub availability: bool,
}

/// Update book request.
///
/// The publisher rule is looser than on creation: digits are accepted too.
#[derive(Debug, Clone, Validate)]
pub struct UpdateBook {
    #[validate(range(min = 1_000_000_000_000u64, max = 9_999_999_999_999u64, message = "ISBN must have 13 digits"))]
    pub isbn: u64,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(custom(function = "validate_alphanumeric_and_spaces"))]
    pub publisher: String,
    #[validate(custom(function = "validate_letters"))]
    pub language: String,
    #[validate(range(min = 1u32, message = "Number of copies must be greater than zero"))]
    pub num_copies: u32,
    pub availability: bool,
}

impl From<CreateBook> for Book {
    fn from(request: CreateBook) -> Self {
        Self {
            isbn: request.isbn,
            title: request.title,
            publisher: request.publisher,
            language: request.language,
            num_copies: request.num_copies,
            availability: request.availability,
        }
    }
}

impl Book {
    /// Overwrite every field with the update request
    pub fn apply(&mut self, update: UpdateBook) {
        self.isbn = update.isbn;
        self.title = update.title;
        self.publisher = update.publisher;
        self.language = update.language;
        self.num_copies = update.num_copies;
        self.availability = update.availability;
    }
}

/// Rejection of a single interactively entered field
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Invalid ISBN. Please enter a valid number.")]
    IsbnNotNumber,
    #[error("Invalid ISBN. Please enter a 13-digit number.")]
    IsbnLength,
    #[error("ISBN already exists in the database. Please enter a different ISBN.")]
    IsbnTaken,
    #[error("Title cannot be empty. Please enter a valid title.")]
    EmptyTitle,
    #[error("Invalid publisher. Please enter a valid publisher with letters only.")]
    PublisherLetters,
    #[error("Invalid publisher. Please enter a valid publisher with letters, digits and spaces only.")]
    PublisherAlphanumeric,
    #[error("Invalid language. Please enter a language with letters only.")]
    Language,
    #[error("Invalid number of copies. Please enter a valid number.")]
    CopiesNotNumber,
    #[error("Number of copies must be greater than zero.")]
    CopiesNotPositive,
    #[error("Invalid availability. Please enter True or False.")]
    Availability,
}

/// Parse any non-negative integer used to look a book up
pub fn parse_isbn_lookup(input: &str) -> Result<u64, FieldError> {
    input.trim().parse().map_err(|_| FieldError::IsbnNotNumber)
}

/// Parse an ISBN for storage: an integer of exactly 13 digits
pub fn parse_isbn(input: &str) -> Result<u64, FieldError> {
    let isbn = parse_isbn_lookup(input)?;
    if (ISBN_MIN..=ISBN_MAX).contains(&isbn) {
        Ok(isbn)
    } else {
        Err(FieldError::IsbnLength)
    }
}

pub fn parse_title(input: &str) -> Result<String, FieldError> {
    if input.is_empty() {
        Err(FieldError::EmptyTitle)
    } else {
        Ok(input.to_string())
    }
}

/// Publisher on creation: letters, with inner spaces allowed
pub fn parse_publisher(input: &str) -> Result<String, FieldError> {
    if is_letters_and_spaces(input) {
        Ok(input.to_string())
    } else {
        Err(FieldError::PublisherLetters)
    }
}

/// Publisher on update: letters or digits, with inner spaces allowed
pub fn parse_publisher_update(input: &str) -> Result<String, FieldError> {
    if is_alphanumeric_and_spaces(input) {
        Ok(input.to_string())
    } else {
        Err(FieldError::PublisherAlphanumeric)
    }
}

pub fn parse_language(input: &str) -> Result<String, FieldError> {
    if is_letters(input) {
        Ok(input.to_string())
    } else {
        Err(FieldError::Language)
    }
}

pub fn parse_copies(input: &str) -> Result<u32, FieldError> {
    let copies: i64 = input.trim().parse().map_err(|_| FieldError::CopiesNotNumber)?;
    if copies <= 0 {
        return Err(FieldError::CopiesNotPositive);
    }
    u32::try_from(copies).map_err(|_| FieldError::CopiesNotNumber)
}

/// Empty input keeps `current`, which must itself still be positive
pub fn parse_copies_or_keep(input: &str, current: u32) -> Result<u32, FieldError> {
    if input.is_empty() {
        if current == 0 {
            return Err(FieldError::CopiesNotPositive);
        }
        return Ok(current);
    }
    parse_copies(input)
}

pub fn parse_availability(input: &str) -> Result<bool, FieldError> {
    match input.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(FieldError::Availability),
    }
}

fn compact(value: &str) -> String {
    value.trim().chars().filter(|c| *c != ' ').collect()
}

fn is_letters(value: &str) -> bool {
    !value.is_empty() && value.chars().all(char::is_alphabetic)
}

fn is_letters_and_spaces(value: &str) -> bool {
    is_letters(&compact(value))
}

fn is_alphanumeric_and_spaces(value: &str) -> bool {
    let compacted = compact(value);
    !compacted.is_empty() && compacted.chars().all(char::is_alphanumeric)
}

fn validate_letters(value: &str) -> Result<(), ValidationError> {
    if is_letters(value) {
        Ok(())
    } else {
        Err(ValidationError::new("letters_only"))
    }
}

fn validate_letters_and_spaces(value: &str) -> Result<(), ValidationError> {
    if is_letters_and_spaces(value) {
        Ok(())
    } else {
        Err(ValidationError::new("letters_and_spaces_only"))
    }
}

fn validate_alphanumeric_and_spaces(value: &str) -> Result<(), ValidationError> {
    if is_alphanumeric_and_spaces(value) {
        Ok(())
    } else {
        Err(ValidationError::new("alphanumeric_and_spaces_only"))
    }
}
