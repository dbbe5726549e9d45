use bookshelf_core::{parse_authors, validate_book_draft, Book, BookDraft};
use clap::Args;

/// Book fields given on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct BookInput {
    /// Book title
    #[arg(short, long)]
    pub name: Option<String>,

    /// Authors, separated by ", " (e.g. "Terry Pratchett, Neil Gaiman")
    #[arg(short, long)]
    pub authors: Option<String>,

    /// Publication year
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Rating, a non-negative number
    #[arg(short, long)]
    pub rating: Option<f64>,

    /// ISBN-10 or ISBN-13, optionally hyphenated
    #[arg(short, long)]
    pub isbn: Option<String>,

    /// Remove the publication year
    #[arg(long, conflicts_with = "year")]
    pub clear_year: bool,
}

impl BookInput {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.authors.is_none()
            && self.year.is_none()
            && self.rating.is_none()
            && self.isbn.is_none()
            && !self.clear_year
    }
}

/// Validation error with field and message
#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Build a new book from command line input
pub fn draft_from_input(input: &BookInput, current_year: i32) -> Result<BookDraft, ValidationError> {
    let name = input
        .name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| ValidationError {
            field: "name".to_string(),
            message: "Name cannot be empty".to_string(),
        })?;

    let authors = input
        .authors
        .as_deref()
        .map(parse_authors)
        .filter(|authors| !authors.is_empty())
        .ok_or_else(|| ValidationError {
            field: "authors".to_string(),
            message: "At least one author is required".to_string(),
        })?;

    let draft = BookDraft {
        name: name.to_string(),
        authors,
        publication_year: if input.clear_year { None } else { input.year },
        rating: input.rating.unwrap_or(0.0),
        isbn: input.isbn.as_deref().map(str::trim).unwrap_or_default().to_string(),
    };

    check_draft(&draft, current_year)?;
    Ok(draft)
}

/// Apply command line edits on top of an existing book
pub fn apply_input(book: &Book, input: &BookInput, current_year: i32) -> Result<Book, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError {
            field: "edit".to_string(),
            message: "Nothing to change; pass at least one field".to_string(),
        });
    }

    let mut draft = book.to_draft();

    if let Some(name) = &input.name {
        draft.name = name.trim().to_string();
    }
    if let Some(authors) = &input.authors {
        draft.authors = parse_authors(authors);
    }
    if input.clear_year {
        draft.publication_year = None;
    } else if let Some(year) = input.year {
        draft.publication_year = Some(year);
    }
    if let Some(rating) = input.rating {
        draft.rating = rating;
    }
    if let Some(isbn) = &input.isbn {
        draft.isbn = isbn.trim().to_string();
    }

    check_draft(&draft, current_year)?;
    Ok(Book::from_draft(book.id.clone(), draft))
}

fn check_draft(draft: &BookDraft, current_year: i32) -> Result<(), ValidationError> {
    validate_book_draft(draft, current_year).map_err(|errors| ValidationError {
        field: "book".to_string(),
        message: errors.join("\n"),
    })
}
