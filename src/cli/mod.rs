//! CLI command handlers
//!
//! This module contains the interactive menu and the one-shot commands,
//! bridging user input with the library service.

pub mod book;
pub mod menu;

pub use book::{handle_book_command, handle_history_command, BookCommands};
pub use menu::{run_menu, MenuChoice};
