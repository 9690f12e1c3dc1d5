//! Book command handlers

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use shelf_core::LibraryStore;

use crate::output::Output;
use crate::prompt::confirm;

/// Add a new book to the library
pub fn add(
    store: &mut LibraryStore,
    title: String,
    author: String,
    pages: u32,
    read: bool,
    output: &Output,
) -> Result<()> {
    let book = store
        .add(title, author, pages, read)
        .context("Failed to add book")?;

    output.success(&format!("Added book: {}", book.id));
    output.print_book(&book);

    Ok(())
}

/// List all books in display order
pub fn list(store: &LibraryStore, output: &Output) -> Result<()> {
    output.print_books(store.books());
    Ok(())
}

/// Show a single book
pub fn show(store: &LibraryStore, id: String, output: &Output) -> Result<()> {
    let uuid = parse_book_id(&id, store)?;

    let book = store
        .get(uuid)
        .ok_or_else(|| anyhow::anyhow!("Book not found: {}", id))?;

    output.print_book(book);
    Ok(())
}

/// Mark a book as read or unread
pub fn set_read(store: &mut LibraryStore, id: String, read: bool, output: &Output) -> Result<()> {
    let uuid = parse_book_id(&id, store)?;

    store
        .set_read(uuid, read)
        .context("Failed to update book")?;

    if let Some(book) = store.get(uuid) {
        output.success(&format!(
            "Marked '{}' as {}",
            book.title,
            if read { "read" } else { "not read" }
        ));
    }

    Ok(())
}

/// Remove a book from the library
pub fn remove(store: &mut LibraryStore, id: String, output: &Output) -> Result<()> {
    let uuid = parse_book_id(&id, store)?;

    let book = store
        .get(uuid)
        .ok_or_else(|| anyhow::anyhow!("Book not found: {}", id))?;

    // Confirm deletion
    if output.should_prompt() {
        println!(
            "Remove book: {} - {}",
            &book.id.to_string()[..8],
            book.title
        );
        if !confirm("Are you sure?")? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let removed = store.remove(uuid).context("Failed to remove book")?;

    output.success(&format!("Removed '{}'", removed.title));

    Ok(())
}

/// Parse a book ID (supports full UUID or prefix)
fn parse_book_id(id: &str, store: &LibraryStore) -> Result<Uuid> {
    // Try full UUID first
    if let Ok(uuid) = Uuid::parse_str(id) {
        return Ok(uuid);
    }

    // Try prefix match
    let matches: Vec<_> = store
        .books()
        .iter()
        .filter(|b| b.id.to_string().starts_with(id))
        .collect();

    match matches.len() {
        0 => bail!("No book found matching: {}", id),
        1 => Ok(matches[0].id),
        _ => {
            eprintln!("Multiple books match '{}':", id);
            for book in &matches {
                eprintln!("  {} - {}", book.id, book.title);
            }
            bail!("Ambiguous ID. Please provide more characters.");
        }
    }
}
