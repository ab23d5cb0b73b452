//! Scripted console sessions against real data files

use std::fs;
use std::path::PathBuf;

use library_console::{
    config::{StorageConfig, UsersConfig},
    console::{self, Console},
    Library, Persistence, Repository,
};

/// Repository rooted in a fresh scratch directory
fn scratch_repository() -> (PathBuf, Repository) {
    let dir = std::env::temp_dir().join(format!("library-console-it-{}", uuid::Uuid::new_v4()));
    let storage = StorageConfig {
        data_dir: dir.clone(),
        ..StorageConfig::default()
    };
    (dir, Repository::new(&storage, &UsersConfig::default()))
}

/// Run one session with `input`, returning everything printed
fn run_session(repository: &Repository, input: &str) -> String {
    let mut library = Library::open(repository.clone(), "admin").expect("Failed to open library");
    let mut console = Console::new(input.as_bytes(), Vec::new());
    console::run(&mut console, &mut library).expect("Session failed");
    String::from_utf8(console.into_output()).expect("Output is not UTF-8")
}

const LOGIN_ADMIN: &str = "1\nadmin\npassword\n";

#[test]
fn test_add_book_persists_across_sessions() {
    let (dir, repository) = scratch_repository();

    let input = format!(
        "{}2\n9780441172719\nDune\nChilton Books\nEnglish\n3\nTrue\n9\n",
        LOGIN_ADMIN
    );
    let output = run_session(&repository, &input);
    assert!(output.contains("Book added successfully!"));

    let data = repository.load().expect("Failed to reload");
    assert_eq!(data.books.len(), 1);
    let book = &data.books[0];
    assert_eq!(book.isbn, 9780441172719);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.publisher, "Chilton Books");
    assert_eq!(book.language, "English");
    assert_eq!(book.num_copies, 3);
    assert!(book.availability);

    let output = run_session(&repository, &format!("{}1\n9\n", LOGIN_ADMIN));
    assert!(output.contains(
        "ISBN: 9780441172719, Title: Dune, Publisher: Chilton Books, Language: English, \
         Number of Copies: 3, Availability: true"
    ));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_duplicate_isbn_is_accepted_on_add() {
    let (dir, repository) = scratch_repository();

    let add = "2\n9780441172719\nDune\nChilton\nEnglish\n1\nfalse\n";
    let input = format!("{}{}{}9\n", LOGIN_ADMIN, add, add);
    let output = run_session(&repository, &input);

    assert_eq!(output.matches("Book added successfully!").count(), 2);
    assert_eq!(repository.load().unwrap().books.len(), 2);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_borrow_and_return_round_trip() {
    let (dir, repository) = scratch_repository();

    let setup = format!("{}2\n9780441172719\nDune\nChilton\nEnglish\n2\ntrue\n9\n", LOGIN_ADMIN);
    run_session(&repository, &setup);

    let output = run_session(&repository, &format!("{}5\n9780441172719\n9\n", LOGIN_ADMIN));
    assert!(output.contains("Available books for borrowing:"));
    assert!(output.contains("Book borrowed successfully!"));
    let data = repository.load().unwrap();
    assert_eq!(data.books[0].num_copies, 1);
    assert_eq!(data.borrowed.len(), 1);
    assert_eq!(data.borrowed[0].isbn, 9780441172719);

    let output = run_session(&repository, &format!("{}6\n9780441172719\n9\n", LOGIN_ADMIN));
    assert!(output.contains("Books borrowed:"));
    assert!(output.contains("Book returned successfully!"));
    let data = repository.load().unwrap();
    assert_eq!(data.books[0].num_copies, 2);
    assert!(data.borrowed.is_empty());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_return_not_borrowed_reports_error() {
    let (dir, repository) = scratch_repository();

    let output = run_session(&repository, &format!("{}6\n9780441172719\n9\n", LOGIN_ADMIN));
    assert!(output.contains("Error: No book found with the provided ISBN or not borrowed."));

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_update_then_delete() {
    let (dir, repository) = scratch_repository();

    let input = format!(
        "{}\
         2\n9780441172719\nDune\nChilton\nEnglish\n2\ntrue\n\
         3\n9780441172719\n9780441013593\nDune Messiah\nPutnam 1969\nEnglish\n\nfalse\n\
         9\n",
        LOGIN_ADMIN
    );
    let output = run_session(&repository, &input);
    assert!(output.contains("Updating book: ISBN: 9780441172719"));
    assert!(output.contains("Book updated successfully!"));

    let data = repository.load().unwrap();
    assert_eq!(data.books[0].isbn, 9780441013593);
    assert_eq!(data.books[0].publisher, "Putnam 1969");
    assert_eq!(data.books[0].num_copies, 2);
    assert!(!data.books[0].availability);

    let output = run_session(&repository, &format!("{}4\n9780441172719\n4\n9780441013593\n9\n", LOGIN_ADMIN));
    assert!(output.contains("Error: No book found with the provided ISBN."));
    assert!(output.contains("Book deleted successfully!"));
    assert!(repository.load().unwrap().books.is_empty());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_new_account_is_persisted_and_cannot_add() {
    let (dir, repository) = scratch_repository();

    let output = run_session(&repository, "2\nreader\nopen sesame\n3\n");
    assert!(output.contains("Account created successfully!"));
    assert!(repository.load().unwrap().accounts.verify("reader", "open sesame"));

    let output = run_session(&repository, "1\nreader\nopen sesame\n2\n9\n");
    assert!(output.contains("Access Denied. Only admin can perform this operation."));
    assert!(repository.load().unwrap().books.is_empty());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_sort_by_publisher_is_session_only_until_exit() {
    let (dir, repository) = scratch_repository();

    let input = format!(
        "{}\
         2\n9780000000001\nFirst\nZeta\nEnglish\n1\ntrue\n\
         2\n9780000000002\nSecond\nAlpha\nEnglish\n1\ntrue\n\
         2\n9780000000003\nThird\nMu\nEnglish\n1\ntrue\n\
         7\n9\n",
        LOGIN_ADMIN
    );
    let output = run_session(&repository, &input);
    assert!(output.contains("Books sorted by publisher (ascending order)."));

    let publishers: Vec<String> = repository
        .load()
        .unwrap()
        .books
        .into_iter()
        .map(|b| b.publisher)
        .collect();
    assert_eq!(publishers, vec!["Alpha", "Mu", "Zeta"]);

    fs::remove_dir_all(dir).ok();
}
