use crate::models::BookDraft;
use lazy_static::lazy_static;
use regex::Regex;

// Latin letters plus the Cyrillic block (А-я, Ё, ё)
const LETTERS: &str = r"[a-zA-Z\x{0401}\x{0451}\x{0410}-\x{044F}]";

lazy_static! {
    static ref AUTHOR_NAME: Regex = Regex::new(&format!(
        r"^{l}+(?:(?:\.\s|\s|-){l}+)*$",
        l = LETTERS
    ))
    .expect("author name pattern is valid");
    static ref AUTHOR_LIST: Regex = Regex::new(&format!(
        r"^{l}+(?:(?:\.\s|\s|-){l}+)*(?:,\s{l}+(?:(?:\.\s|\s|-){l}+)*)*$",
        l = LETTERS
    ))
    .expect("author list pattern is valid");
    static ref ISBN_10: Regex = Regex::new(r"^[0-9]{10}$").expect("isbn-10 pattern is valid");
    static ref ISBN_13: Regex = Regex::new(r"^97[89][0-9]{10}$").expect("isbn-13 pattern is valid");
    static ref ISBN_GROUPED_13: Regex =
        Regex::new(r"^(?:[0-9]+[-●]){3}[-●0-9]*$").expect("grouped isbn-10 pattern is valid");
    static ref ISBN_GROUPED_17: Regex =
        Regex::new(r"^(?:[0-9]+[-●]){4}[-●0-9]*$").expect("grouped isbn-13 pattern is valid");
    static ref ISBN_BODY: Regex = Regex::new(
        r"^(?:97[89][-●]?)?[0-9]{0,5}[-●]?[0-9]*[-●]?[0-9]*[-●]?[0-9]*$"
    )
    .expect("isbn body pattern is valid");
}

/// Check a single author name
pub fn is_valid_author_name(name: &str) -> bool {
    AUTHOR_NAME.is_match(name)
}

/// Check a ", " separated list of author names
pub fn is_valid_authors(input: &str) -> bool {
    AUTHOR_LIST.is_match(input)
}

/// Check an ISBN-10 or ISBN-13, plain or hyphenated. Empty is accepted.
pub fn is_valid_isbn(input: &str) -> bool {
    if input.is_empty() {
        return true;
    }

    let length = input.chars().count();
    let shape_ok = ISBN_10.is_match(input)
        || ISBN_13.is_match(input)
        || (length == 13 && ISBN_GROUPED_13.is_match(input))
        || (length == 17 && ISBN_GROUPED_17.is_match(input));

    shape_ok && ISBN_BODY.is_match(input)
}

/// Parse a comma-separated author list
pub fn parse_authors(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Validate a book before it is written to a store
/// Returns Ok(()) if valid, or Err(Vec<String>) with validation errors
pub fn validate_book_draft(draft: &BookDraft, current_year: i32) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push("Name cannot be empty".to_string());
    }

    if draft.authors.is_empty() {
        errors.push("At least one author is required".to_string());
    }

    for author in &draft.authors {
        if !is_valid_author_name(author) {
            errors.push(format!("Author '{}' is not a valid name", author));
        }
    }

    if !is_valid_isbn(&draft.isbn) {
        errors.push(format!("ISBN '{}' is not a valid ISBN-10 or ISBN-13", draft.isbn));
    }

    if !draft.rating.is_finite() || draft.rating < 0.0 {
        errors.push(format!("Rating must be a non-negative number, got {}", draft.rating));
    }

    if let Some(year) = draft.publication_year {
        if year > current_year {
            errors.push(format!(
                "Publication year {} is in the future (current year is {})",
                year, current_year
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
