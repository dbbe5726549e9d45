use bookshelf_core::{Catalog, JsonFileStore, Route};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

mod config;
mod errors;
mod handlers;
mod operations;
mod ui;

use config::AppConfig;
use errors::map_command_error;
use operations::BookInput;

/// Book catalog - list, group and edit a book collection, and get a recommendation
///
/// Examples:
///   # List books grouped by publication year (newest first)
///   bookshelf list
///
///   # Group by author instead (a book appears under each of its authors)
///   bookshelf list --filter authors
///
///   # Add a book
///   bookshelf add --name "Small Gods" --authors "Terry Pratchett" --year 1992 --rating 9
///
///   # Change the rating of a book
///   bookshelf edit 4f1c... --rating 10
///
///   # Open a page by path, as the web front end would
///   bookshelf open /edit/4f1c...
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Grouping:\n  \
    - publicationYear, rating: one group per value, highest value first\n  \
    - authors: one group per author, alphabetical\n  \
    - Books without a publication year are grouped under 'Unknown'\n\n\
Recommendation:\n  \
    - A random pick among the highest rated books published at least 3 years ago\n\n\
Configuration:\n  \
    - --store > BOOKSHELF_STORE > bookshelf.toml > ./books.json")]
struct Cli {
    /// Path to the JSON book store
    #[arg(short, long, global = true, value_name = "FILE")]
    store: Option<PathBuf>,

    /// Path to a TOML config file (defaults to ./bookshelf.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List books grouped by a field
    List {
        /// Field to group by: publicationYear, authors, rating or name
        #[arg(short, long, value_name = "FIELD")]
        filter: Option<String>,
    },
    /// Show one book
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Add a book
    Add(BookInput),
    /// Edit fields of a book
    Edit {
        #[arg(value_name = "ID")]
        id: String,
        #[command(flatten)]
        input: BookInput,
    },
    /// Delete a book
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Recommend a well rated book that has been out for a while
    Recommend,
    /// Open a page by path: /, /add, /edit/<id>
    Open {
        #[arg(value_name = "PATH")]
        path: String,
    },
}

impl Command {
    /// Page of the web front end this command stands in for
    pub fn route(&self) -> Route {
        match self {
            Command::List { .. } | Command::Recommend => Route::BooksList,
            Command::Add(_) => Route::AddBook,
            Command::Show { id } | Command::Edit { id, .. } | Command::Delete { id } => {
                Route::EditBook { id: id.clone() }
            }
            Command::Open { path } => Route::resolve(path),
        }
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        let (title, message, details) = map_command_error(&err);
        ui::print_error(&title, &message, &details);
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref(), cli.store)?;

    let route = cli.command.route();
    let span = tracing::info_span!(
        "command",
        route = %route,
        store = %config.store_path.display()
    );
    let _guard = span.enter();

    let mut catalog = Catalog::new(JsonFileStore::new(&config.store_path))
        .with_filter(config.default_filter)
        .with_min_book_age(config.min_book_age_years);

    handlers::dispatch(cli.command, &mut catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_edit_with_flags() {
        let cli = Cli::try_parse_from([
            "bookshelf", "--store", "lib.json", "edit", "b1", "--rating", "7.5", "--clear-year",
        ])
        .unwrap();

        assert_eq!(cli.store, Some(PathBuf::from("lib.json")));
        match cli.command {
            Command::Edit { id, input } => {
                assert_eq!(id, "b1");
                assert_eq!(input.rating, Some(7.5));
                assert!(input.clear_year);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_commands_map_to_routes() {
        let list = Cli::try_parse_from(["bookshelf", "list", "-f", "authors"]).unwrap();
        assert_eq!(list.command.route(), Route::BooksList);

        let add = Cli::try_parse_from(["bookshelf", "add", "--name", "X", "--authors", "A B"]).unwrap();
        assert_eq!(add.command.route(), Route::AddBook);

        let delete = Cli::try_parse_from(["bookshelf", "delete", "b2"]).unwrap();
        assert_eq!(delete.command.route(), Route::EditBook { id: "b2".to_string() });

        let open = Cli::try_parse_from(["bookshelf", "open", "/nowhere"]).unwrap();
        assert_eq!(open.command.route(), Route::NotFound);
    }

    #[test]
    fn test_year_and_clear_year_conflict() {
        let result = Cli::try_parse_from(["bookshelf", "edit", "b1", "--year", "1999", "--clear-year"]);
        assert!(result.is_err());
    }
}
