//! Book CLI commands
//!
//! One-shot commands that act on the shelf and exit. Loans are not
//! reachable from here since the ledger does not outlive the process.

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::display::{format_book_list, format_history};
use crate::error::LibrisResult;
use crate::services::Library;
use crate::storage::ShelfStore;

/// Book subcommands
#[derive(Subcommand)]
pub enum BookCommands {
    /// Add a book to the shelf
    Add {
        /// Book title
        title: String,
        /// Book author
        author: String,
    },
    /// Remove the first shelf copy with this title
    Remove {
        /// Book title (case-insensitive)
        title: String,
    },
    /// List books on the shelf
    List,
}

/// Handle a book command
pub fn handle_book_command<S: ShelfStore>(
    library: &mut Library<S>,
    cmd: BookCommands,
) -> LibrisResult<()> {
    match cmd {
        BookCommands::Add { title, author } => {
            let book = library.add_book(&title, &author)?;
            println!("Added '{}' by {} ({})", book.title, book.author, book.id);
        }

        BookCommands::Remove { title } => {
            let book = library.remove_book(&title)?;
            println!("Removed '{}' by {}", book.title, book.author);
        }

        BookCommands::List => {
            print!("{}", format_book_list(library.list_available()));
        }
    }

    Ok(())
}

/// Print the most recent audit entries
pub fn handle_history_command(logger: &AuditLogger, limit: usize) -> LibrisResult<()> {
    let entries = logger.read_recent(limit)?;
    print!("{}", format_history(&entries));
    Ok(())
}
