pub mod book_handlers;
pub mod filter_handlers;
pub mod route_handlers;

use bookshelf_core::{BookStore, Catalog};

use crate::Command;

/// Run one command against the catalog
pub fn dispatch<S: BookStore>(command: Command, catalog: &mut Catalog<S>) -> anyhow::Result<()> {
    match command {
        Command::List { filter } => filter_handlers::list_books(catalog, filter.as_deref()),
        Command::Show { id } => book_handlers::show_book(catalog, &id),
        Command::Add(input) => book_handlers::add_book(catalog, &input),
        Command::Edit { id, input } => book_handlers::edit_book(catalog, &id, &input),
        Command::Delete { id } => book_handlers::delete_book(catalog, &id),
        Command::Recommend => filter_handlers::recommend_book(catalog),
        Command::Open { path } => route_handlers::open_path(catalog, &path),
    }
}
