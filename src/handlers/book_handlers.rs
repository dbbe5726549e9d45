use bookshelf_core::{current_year, BookStore, Catalog, CatalogError};

use crate::operations::{apply_input, draft_from_input, BookInput};
use crate::ui::{print_book, print_status, StatusLevel};

/// Print a single book
pub fn show_book<S: BookStore>(catalog: &mut Catalog<S>, id: &str) -> anyhow::Result<()> {
    catalog.fetch_books()?;

    let book = catalog
        .book_by_id(id)
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
    print_book(book);
    Ok(())
}

/// Validate input and write a new book to the store
pub fn add_book<S: BookStore>(catalog: &mut Catalog<S>, input: &BookInput) -> anyhow::Result<()> {
    let draft = draft_from_input(input, current_year())?;
    let book = catalog.add_book(draft)?;

    print_status(
        &format!("Book '{}' added with id {}", book.name, book.id),
        StatusLevel::Success,
    );
    Ok(())
}

/// Apply edits to a stored book
pub fn edit_book<S: BookStore>(
    catalog: &mut Catalog<S>,
    id: &str,
    input: &BookInput,
) -> anyhow::Result<()> {
    catalog.fetch_books()?;

    let current = catalog
        .book_by_id(id)
        .cloned()
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
    let edited = apply_input(&current, input, current_year())?;
    let name = edited.name.clone();
    catalog.update_book(edited)?;

    print_status(&format!("Book '{}' updated", name), StatusLevel::Success);
    Ok(())
}

pub fn delete_book<S: BookStore>(catalog: &mut Catalog<S>, id: &str) -> anyhow::Result<()> {
    catalog.fetch_books()?;

    let removed = catalog.delete_book(id)?;
    print_status(&format!("Book '{}' deleted", removed.name), StatusLevel::Success);
    Ok(())
}
