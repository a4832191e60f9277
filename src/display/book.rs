//! Book and loan display formatting

use crate::audit::AuditEntry;
use crate::models::Book;

/// Format the shelf as a table
pub fn format_book_list(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books available in the library.\n".to_string();
    }

    let title_width = books
        .iter()
        .map(|b| b.title.chars().count())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>3}  {:<title_width$}  {}\n",
        "#",
        "Title",
        "Author",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:->3}  {:-<title_width$}  {:-<6}\n",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for (i, book) in books.iter().enumerate() {
        output.push_str(&format!(
            "{:>3}  {:<title_width$}  {}\n",
            i + 1,
            book.title,
            book.author,
            title_width = title_width,
        ));
    }

    output.push_str(&format!("\nTotal: {} books\n", books.len()));
    output
}

/// Format current loans, one per line, sorted by borrower then title
pub fn format_loan_list(loans: &[(&str, &Book)]) -> String {
    if loans.is_empty() {
        return "No borrowed books.\n".to_string();
    }

    let mut sorted: Vec<_> = loans.to_vec();
    sorted.sort_by_key(|(borrower, book)| (borrower.to_lowercase(), book.title.to_lowercase()));

    let mut output = String::new();
    for (borrower, book) in sorted {
        output.push_str(&format!("{} borrowed -> {}\n", borrower, book));
    }
    output
}

/// Format audit entries, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No history recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}
