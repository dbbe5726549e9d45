use bookshelf_core::{Book, FilterField, GroupKey};

/// Authors as a single comma separated line
pub fn format_authors(authors: &[String]) -> String {
    if authors.is_empty() {
        "Unknown author".to_string()
    } else {
        authors.join(", ")
    }
}

pub fn format_year(year: Option<i32>) -> String {
    year.map_or_else(|| "Unknown".to_string(), |y| y.to_string())
}

pub fn format_rating(rating: f64) -> String {
    GroupKey::Number(rating).to_string()
}

/// One-line summary used in lists
pub fn format_book_line(book: &Book) -> String {
    format!(
        "{} ({}) by {}, rated {}  [{}]",
        book.name,
        format_year(book.publication_year),
        format_authors(&book.authors),
        format_rating(book.rating),
        book.id
    )
}

/// Label/value pairs for the detail view
pub fn format_book_details(book: &Book) -> Vec<(&'static str, String)> {
    let isbn = if book.isbn.is_empty() {
        "-".to_string()
    } else {
        book.isbn.clone()
    };

    vec![
        ("Id", book.id.clone()),
        ("Name", book.name.clone()),
        ("Authors", format_authors(&book.authors)),
        ("Published", format_year(book.publication_year)),
        ("Rating", format_rating(book.rating)),
        ("ISBN", isbn),
    ]
}

/// Heading for one group of books
pub fn format_bucket_heading(field: FilterField, key: &GroupKey, count: usize) -> String {
    let noun = if count == 1 { "book" } else { "books" };
    format!("{}: {} ({} {})", field.label(), key, count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> Book {
        Book {
            id: "b7".to_string(),
            name: "Good Omens".to_string(),
            authors: vec!["Terry Pratchett".to_string(), "Neil Gaiman".to_string()],
            publication_year: Some(1990),
            rating: 9.5,
            isbn: String::new(),
        }
    }

    #[test]
    fn test_format_book_line() {
        assert_eq!(
            format_book_line(&book()),
            "Good Omens (1990) by Terry Pratchett, Neil Gaiman, rated 9.5  [b7]"
        );
    }

    #[test]
    fn test_unknown_year_and_integral_rating() {
        let mut undated = book();
        undated.publication_year = None;
        undated.rating = 8.0;

        assert_eq!(
            format_book_line(&undated),
            "Good Omens (Unknown) by Terry Pratchett, Neil Gaiman, rated 8  [b7]"
        );
    }

    #[test]
    fn test_format_book_details() {
        let details = format_book_details(&book());
        assert_eq!(details.len(), 6);
        assert_eq!(details[5], ("ISBN", "-".to_string()));
    }

    #[test]
    fn test_format_bucket_heading() {
        assert_eq!(
            format_bucket_heading(FilterField::PublicationYear, &GroupKey::Number(1990.0), 2),
            "Publication year: 1990 (2 books)"
        );
        assert_eq!(
            format_bucket_heading(FilterField::Authors, &GroupKey::from("Neil Gaiman"), 1),
            "Author: Neil Gaiman (1 book)"
        );
    }
}
