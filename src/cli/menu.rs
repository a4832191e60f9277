//! Interactive line-oriented menu
//!
//! Reads choices from any `BufRead` and writes to any `Write`, so the loop
//! runs the same against a terminal or an in-memory script.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::display::{format_book_list, format_loan_list};
use crate::error::{LibrisError, LibrisResult};
use crate::services::Library;
use crate::storage::ShelfStore;

const MENU: &str = "\
=========== MENU ===========
 1. Add Book
 2. Remove Book
 3. Borrow Book
 4. Return Book
 5. View All Books
 6. View Borrowed Books
 7. Exit
============================";

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Borrow,
    Return,
    ViewBooks,
    ViewBorrowed,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::Remove),
            "3" => Ok(Self::Borrow),
            "4" => Ok(Self::Return),
            "5" => Ok(Self::ViewBooks),
            "6" => Ok(Self::ViewBorrowed),
            "7" => Ok(Self::Exit),
            other => Err(format!("Invalid option '{}'! Please try again.", other)),
        }
    }
}

/// Run the menu until the user exits or input ends
pub fn run_menu<S, R, W>(library: &mut Library<S>, input: &mut R, output: &mut W) -> LibrisResult<()>
where
    S: ShelfStore,
    R: BufRead,
    W: Write,
{
    writeln!(output, "Welcome to the library system")?;

    loop {
        writeln!(output)?;
        writeln!(output, "{}", MENU)?;

        let Some(line) = prompt(input, output, "Enter your choice: ")? else {
            break;
        };

        let choice = match line.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(msg) => {
                writeln!(output, "{}", msg)?;
                continue;
            }
        };

        match choice {
            MenuChoice::Add => {
                let Some(title) = prompt(input, output, "Enter title: ")? else { break };
                let Some(author) = prompt(input, output, "Enter author: ")? else { break };
                let result = library.add_book(&title, &author).map(|_| ());
                report(output, result, "Book added successfully!")?;
            }
            MenuChoice::Remove => {
                let Some(title) = prompt(input, output, "Enter title to remove: ")? else { break };
                let result = library.remove_book(&title).map(|_| ());
                report(output, result, "Book removed successfully!")?;
            }
            MenuChoice::Borrow => {
                let Some(name) = prompt(input, output, "Enter your name: ")? else { break };
                let Some(title) = prompt(input, output, "Enter title to borrow: ")? else { break };
                let result = library.borrow_book(&title, &name).map(|_| ());
                report(output, result, "Book borrowed successfully!")?;
            }
            MenuChoice::Return => {
                let Some(name) = prompt(input, output, "Enter your name: ")? else { break };
                let Some(title) = prompt(input, output, "Enter title to return: ")? else { break };
                let result = library.return_book(&title, &name).map(|_| ());
                report(output, result, "Book returned successfully!")?;
            }
            MenuChoice::ViewBooks => {
                writeln!(output, "Available books:")?;
                write!(output, "{}", format_book_list(library.list_available()))?;
            }
            MenuChoice::ViewBorrowed => {
                writeln!(output, "Borrowed books:")?;
                write!(output, "{}", format_loan_list(&library.list_borrowed()))?;
            }
            MenuChoice::Exit => {
                writeln!(output, "Exiting library system. Goodbye!")?;
                return Ok(());
            }
        }
    }

    writeln!(output)?;
    Ok(())
}

/// Print a prompt and read one line without its line ending.
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> LibrisResult<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Render the outcome of a mutation
fn report<W: Write>(output: &mut W, result: LibrisResult<()>, success: &str) -> LibrisResult<()> {
    match result {
        Ok(()) => writeln!(output, "{}", success)?,
        Err(LibrisError::Persistence(reason)) => {
            writeln!(output, "{}", success)?;
            writeln!(output, "Warning: the catalog could not be saved: {}", reason)?;
        }
        Err(e @ (LibrisError::NotFound { .. } | LibrisError::NotAvailable { .. })) => {
            writeln!(output, "! {}", e)?
        }
        Err(e) => return Err(e),
    }
    Ok(())
}
