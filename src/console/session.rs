//! Login gate and main menu

use std::io::{BufRead, Write};

use crate::{
    error::{AppError, AppResult},
    models::{Book, Identity},
    repository::Persistence,
    services::Library,
};

use super::{fields, Console};

const MENU: [&str; 9] = [
    "1. Display all book records",
    "2. Add new book record",
    "3. Update book record",
    "4. Delete book record",
    "5. Borrow book",
    "6. Return book",
    "7. Sort books by Publisher (Bubble Sort)",
    "8. Sort books by Number of Copies (Insertion Sort)",
    "9. Exit and save",
];

/// Run a whole session: login gate, then the menu until exit
pub fn run<R, W, P>(console: &mut Console<R, W>, library: &mut Library<P>) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    let identity = match login(console, library) {
        Ok(Some(identity)) => identity,
        Ok(None) => {
            console.say("Access Denied or User Exited.")?;
            return Ok(());
        }
        Err(AppError::InputClosed) => {
            tracing::info!("Console input closed before login.");
            console.say("Access Denied or User Exited.")?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    menu(console, library, &identity)
}

/// Loop until a successful login (`Some`) or the user exits (`None`)
pub fn login<R, W, P>(console: &mut Console<R, W>, library: &mut Library<P>) -> AppResult<Option<Identity>>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    loop {
        console.say("1. Log in")?;
        console.say("2. Create a new account")?;
        console.say("3. Exit")?;
        let choice = console.prompt("Do you already have an account? (1 for Yes, 2 for No, 3 to Exit): ")?;

        match choice.trim() {
            "1" => {
                let username = console.prompt("Enter username: ")?;
                let password = console.prompt("Enter password: ")?;
                match library.authenticate(&username, &password) {
                    Ok(identity) => return Ok(Some(identity)),
                    Err(e @ AppError::Authentication(_)) => console.say(e.user_message())?,
                    Err(e) => return Err(e),
                }
            }
            "2" => create_account(console, library)?,
            "3" => {
                tracing::info!("User chose to exit.");
                return Ok(None);
            }
            _ => console.say("Invalid choice. Please enter 1, 2, or 3.")?,
        }
    }
}

fn create_account<R, W, P>(console: &mut Console<R, W>, library: &mut Library<P>) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    console.say("Creating a new account.")?;
    let username = loop {
        let username = console.prompt("Enter a new username: ")?;
        if library.username_exists(&username) {
            console.say("Username already exists. Please choose a different username.")?;
        } else {
            break username;
        }
    };
    let password = console.prompt("Enter a new password: ")?;

    library.create_account(&username, &password)?;
    console.say("Account created successfully!")
}

/// Dispatch menu choices until exit or end of input, then save
pub fn menu<R, W, P>(console: &mut Console<R, W>, library: &mut Library<P>, identity: &Identity) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    loop {
        console.say("\nLibrary Book Management System")?;
        for entry in MENU {
            console.say(entry)?;
        }
        let choice = match console.prompt("Enter your choice: ") {
            Ok(choice) => choice,
            Err(AppError::InputClosed) => return exit(console, library, identity),
            Err(e) => return Err(e),
        };

        let outcome = match choice.trim() {
            "1" => show_books(console, library.books()),
            "2" => add_book(console, library, identity),
            "3" => update_book(console, library, identity),
            "4" => delete_book(console, library, identity),
            "5" => borrow_book(console, library),
            "6" => return_book(console, library),
            "7" => {
                library.sort_by_publisher();
                show_sorted(console, library.books(), "Books sorted by publisher (ascending order).")
            }
            "8" => {
                library.sort_by_copies();
                show_sorted(console, library.books(), "Books sorted by number of copies (descending order).")
            }
            "9" => return exit(console, library, identity),
            _ => {
                tracing::warn!("Invalid menu choice: {}", choice);
                console.say("\nInvalid choice. Please try again.")
            }
        };

        match outcome {
            Ok(()) => {}
            Err(AppError::InputClosed) => return exit(console, library, identity),
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => console.say(e.user_message())?,
        }
    }
}

fn exit<R, W, P>(console: &mut Console<R, W>, library: &Library<P>, identity: &Identity) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    console.say("Exiting the program.")?;
    tracing::info!("User {} logged out.", identity);
    library.save()
}

fn show_books<R: BufRead, W: Write>(console: &mut Console<R, W>, books: &[Book]) -> AppResult<()> {
    if books.is_empty() {
        console.say("No books available.")?;
        tracing::info!("Displayed books: No books available.");
    } else {
        console.say("\nDisplaying all books records:\n")?;
        for book in books {
            console.say(book)?;
        }
        tracing::info!("Displayed all book records.");
    }
    Ok(())
}

fn show_sorted<R: BufRead, W: Write>(console: &mut Console<R, W>, books: &[Book], notice: &str) -> AppResult<()> {
    console.say(notice)?;
    show_books(console, books)
}

fn show_existing<R: BufRead, W: Write>(console: &mut Console<R, W>, books: &[Book]) -> AppResult<()> {
    console.say("Existing Books:\n")?;
    for book in books {
        console.say(book)?;
    }
    Ok(())
}

fn add_book<R, W, P>(console: &mut Console<R, W>, library: &mut Library<P>, identity: &Identity) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    library.authorize_admin(identity)?;
    let request = fields::prompt_new_book(console)?;
    library.add_book(identity, request)?;
    console.say("Book added successfully!")
}

fn update_book<R, W, P>(console: &mut Console<R, W>, library: &mut Library<P>, identity: &Identity) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    library.authorize_admin(identity)?;
    show_existing(console, library.books())?;
    let isbn = fields::prompt_lookup_isbn(console, "\nEnter ISBN of the book to update: ")?;

    let current = match library.find_book(isbn) {
        Ok(book) => book.clone(),
        Err(e) => {
            tracing::warn!("Update failed: No book found with ISBN {}.", isbn);
            return Err(e);
        }
    };
    console.say(format!("Updating book: {}", current))?;

    let request = fields::prompt_book_update(console, library.books(), &current)?;
    library.update_book(identity, isbn, request)?;
    console.say("Book updated successfully!")
}

fn delete_book<R, W, P>(console: &mut Console<R, W>, library: &mut Library<P>, identity: &Identity) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    library.authorize_admin(identity)?;
    show_existing(console, library.books())?;
    let isbn = fields::prompt_lookup_isbn(console, "\nEnter ISBN of the book to delete: ")?;

    library.delete_book(identity, isbn)?;
    console.say("Book deleted successfully!")
}

fn borrow_book<R, W, P>(console: &mut Console<R, W>, library: &mut Library<P>) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    let available = library.available_books();
    if available.is_empty() {
        console.say("No available books for borrowing.")?;
    } else {
        console.say("Available books for borrowing:")?;
        for book in available {
            console.say(book)?;
        }
    }
    let isbn = fields::prompt_lookup_isbn(console, "Enter ISBN of the book to borrow: ")?;

    library.borrow_book(isbn)?;
    console.say("Book borrowed successfully!")
}

fn return_book<R, W, P>(console: &mut Console<R, W>, library: &mut Library<P>) -> AppResult<()>
where
    R: BufRead,
    W: Write,
    P: Persistence,
{
    console.say("Books borrowed:")?;
    for entry in library.borrowed() {
        let since = entry.borrowed_at.format("%Y-%m-%d %H:%M UTC");
        match library.borrowed_book(entry) {
            Some(book) => console.say(format!("{} (borrowed {})", book, since))?,
            None => console.say(format!(
                "ISBN: {} (no longer in the catalog, borrowed {})",
                entry.isbn, since
            ))?,
        }
    }
    let isbn = fields::prompt_lookup_isbn(console, "Enter ISBN of the book to return: ")?;

    library.return_book(isbn)?;
    console.say("Book returned successfully!")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::{book, library_with};

    fn session_output(input: &str, library: &mut Library<crate::repository::MockPersistence>) -> String {
        let mut console = Console::new(input.as_bytes(), Vec::new());
        run(&mut console, library).unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_exit_at_login_gate() {
        let mut library = library_with(Vec::new(), 0);
        let output = session_output("3\n", &mut library);
        assert!(output.ends_with("Access Denied or User Exited.\n"));
    }

    #[test]
    fn test_invalid_gate_choice_then_bad_password() {
        let mut library = library_with(Vec::new(), 0);
        let output = session_output("7\n1\nadmin\nwrong\n3\n", &mut library);
        assert!(output.contains("Invalid choice. Please enter 1, 2, or 3."));
        assert!(output.contains("Invalid username or password. Please try again."));
    }

    #[test]
    fn test_menu_exit_saves_once() {
        let mut library = library_with(vec![book(9780000000001, "Ace", 1)], 1);
        let output = session_output("1\nadmin\npassword\n1\n9\n", &mut library);
        assert!(output.contains("Displaying all books records:"));
        assert!(output.contains("ISBN: 9780000000001, Title: Title 9780000000001"));
        assert!(output.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_end_of_input_in_menu_saves() {
        let mut library = library_with(Vec::new(), 1);
        let output = session_output("1\nadmin\npassword\n", &mut library);
        assert!(output.ends_with("Exiting the program.\n"));
    }

    #[test]
    fn test_unknown_menu_choice() {
        let mut library = library_with(Vec::new(), 1);
        let output = session_output("1\nadmin\npassword\n42\n9\n", &mut library);
        assert!(output.contains("\nInvalid choice. Please try again.\n"));
    }

    #[test]
    fn test_empty_catalog_listing() {
        let mut library = library_with(Vec::new(), 1);
        let output = session_output("1\nadmin\npassword\n1\n9\n", &mut library);
        assert!(output.contains("No books available.\n"));
    }

    #[test]
    fn test_non_admin_is_denied_before_prompting() {
        // One save for the new account, one on exit
        let mut library = library_with(vec![book(9780000000001, "Ace", 1)], 2);
        let output = session_output("2\nalice\nsecret\n1\nalice\nsecret\n2\n3\n4\n9\n", &mut library);

        assert_eq!(output.matches("Access Denied. Only admin can perform this operation.").count(), 3);
        assert!(!output.contains("Enter ISBN"));
        assert_eq!(library.books().len(), 1);
    }

    #[test]
    fn test_duplicate_username_reprompts() {
        let mut library = library_with(Vec::new(), 1);
        let output = session_output("2\nadmin\nbob\npw\n3\n", &mut library);
        assert!(output.contains("Username already exists. Please choose a different username."));
        assert!(output.contains("Account created successfully!"));
        assert!(library.accounts().verify("bob", "pw"));
    }

    #[test]
    fn test_borrow_unavailable_reports_error() {
        let mut library = library_with(vec![book(9780000000001, "Ace", 0)], 1);
        let output = session_output("1\nadmin\npassword\n5\n9780000000001\n9\n", &mut library);
        assert!(output.contains("No available books for borrowing."));
        assert!(output.contains("Error: The selected book is not available for borrowing."));
        assert!(library.borrowed().is_empty());
    }

    #[test]
    fn test_update_missing_isbn_reports_error() {
        let mut library = library_with(vec![book(9780000000001, "Ace", 1)], 1);
        let output = session_output("1\nadmin\npassword\n3\n9780000000009\n9\n", &mut library);
        assert!(output.contains("Error: No book found with the provided ISBN."));
        assert!(!output.contains("Updating book"));
    }

    #[test]
    fn test_sort_by_copies_prints_sorted_catalog() {
        let mut library = library_with(
            vec![book(9780000000001, "Ace", 1), book(9780000000002, "Tor", 9)],
            1,
        );
        let output = session_output("1\nadmin\npassword\n8\n9\n", &mut library);

        let first = output.find("ISBN: 9780000000002").unwrap();
        let second = output.find("ISBN: 9780000000001").unwrap();
        assert!(output.contains("Books sorted by number of copies (descending order)."));
        assert!(first < second);
    }
}
