use anyhow::bail;
use bookshelf_core::{BookStore, Catalog, FilterField, Route};

use super::book_handlers::show_book;
use super::filter_handlers::list_books;
use crate::ui::{print_status, StatusLevel};

/// Resolve a page path and run the matching view
pub fn open_path<S: BookStore>(catalog: &mut Catalog<S>, path: &str) -> anyhow::Result<()> {
    let route = Route::resolve(path);
    tracing::debug!(path, route = %route, "resolved page");

    match route {
        Route::BooksList => list_books(catalog, None),
        Route::AddBook => {
            print_status(
                "Add a book with: bookshelf add --name <NAME> --authors <AUTHORS> \
                 [--year <YEAR>] [--rating <RATING>] [--isbn <ISBN>]",
                StatusLevel::Info,
            );
            let fields: Vec<&str> = FilterField::ALL.iter().map(|f| f.as_str()).collect();
            print_status(
                &format!("Books can then be grouped by: {}", fields.join(", ")),
                StatusLevel::Info,
            );
            Ok(())
        }
        Route::EditBook { id } => {
            show_book(catalog, &id)?;
            println!();
            print_status(
                &format!("Edit with: bookshelf edit {} [--name ...] [--rating ...]", id),
                StatusLevel::Info,
            );
            Ok(())
        }
        Route::NotFound => bail!("No page found at '{}'", path),
    }
}
