use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::CatalogError;

/// A book as stored in the catalog. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub authors: Vec<String>,
    pub publication_year: Option<i32>,
    pub rating: f64,
    #[serde(rename = "ISBN", default)]
    pub isbn: String,
}

/// A book that has not been written to a store yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDraft {
    pub name: String,
    pub authors: Vec<String>,
    #[serde(default)]
    pub publication_year: Option<i32>,
    pub rating: f64,
    #[serde(rename = "ISBN", default)]
    pub isbn: String,
}

impl Book {
    pub fn from_draft(id: impl Into<String>, draft: BookDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            authors: draft.authors,
            publication_year: draft.publication_year,
            rating: draft.rating,
            isbn: draft.isbn,
        }
    }

    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            name: self.name.clone(),
            authors: self.authors.clone(),
            publication_year: self.publication_year,
            rating: self.rating,
            isbn: self.isbn.clone(),
        }
    }
}

/// Field a book list can be grouped by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterField {
    #[default]
    PublicationYear,
    Authors,
    Rating,
    Name,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::PublicationYear,
        FilterField::Authors,
        FilterField::Rating,
        FilterField::Name,
    ];

    /// Document field name
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::PublicationYear => "publicationYear",
            FilterField::Authors => "authors",
            FilterField::Rating => "rating",
            FilterField::Name => "name",
        }
    }

    /// Human readable label used in headings
    pub fn label(&self) -> &'static str {
        match self {
            FilterField::PublicationYear => "Publication year",
            FilterField::Authors => "Author",
            FilterField::Rating => "Rating",
            FilterField::Name => "Name",
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "publicationyear" | "year" => Ok(FilterField::PublicationYear),
            "authors" | "author" => Ok(FilterField::Authors),
            "rating" => Ok(FilterField::Rating),
            "name" => Ok(FilterField::Name),
            _ => Err(CatalogError::UnknownFilter(s.to_string())),
        }
    }
}

/// Key a bucket of grouped records is filed under
#[derive(Debug, Clone)]
pub enum GroupKey {
    Null,
    Number(f64),
    Text(String),
}

impl GroupKey {
    /// Numeric coercion used for ordering scalar buckets.
    /// Null and blank text are 0, unparsable text is NaN.
    pub fn as_number(&self) -> f64 {
        match self {
            GroupKey::Null => 0.0,
            GroupKey::Number(n) => *n,
            GroupKey::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().unwrap_or(f64::NAN)
                }
            }
        }
    }

    /// String form used for the default ascending order of list buckets
    pub fn sort_text(&self) -> String {
        match self {
            GroupKey::Null => "null".to_string(),
            GroupKey::Number(n) => n.to_string(),
            GroupKey::Text(s) => s.clone(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, GroupKey::Null)
    }

    fn number_bits(n: f64) -> u64 {
        if n == 0.0 {
            0
        } else if n.is_nan() {
            f64::NAN.to_bits()
        } else {
            n.to_bits()
        }
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (GroupKey::Null, GroupKey::Null) => true,
            (GroupKey::Number(a), GroupKey::Number(b)) => {
                GroupKey::number_bits(*a) == GroupKey::number_bits(*b)
            }
            (GroupKey::Text(a), GroupKey::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for GroupKey {}

impl Hash for GroupKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            GroupKey::Null => {}
            GroupKey::Number(n) => GroupKey::number_bits(*n).hash(state),
            GroupKey::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKey::Null => f.write_str("Unknown"),
            GroupKey::Number(n) => write!(f, "{}", n),
            GroupKey::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for GroupKey {
    fn from(s: &str) -> Self {
        GroupKey::Text(s.to_string())
    }
}

impl From<Option<i32>> for GroupKey {
    fn from(value: Option<i32>) -> Self {
        value.map_or(GroupKey::Null, |n| GroupKey::Number(f64::from(n)))
    }
}

/// Value a record holds for one selector
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Scalar(GroupKey),
    List(Vec<GroupKey>),
}

impl FieldValue {
    pub fn is_list(&self) -> bool {
        matches!(self, FieldValue::List(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_uses_document_field_names() {
        let book: Book = serde_json::from_value(json!({
            "id": "abc",
            "name": "Dune",
            "authors": ["Frank Herbert"],
            "publicationYear": 1965,
            "rating": 9,
            "ISBN": "9780441013593"
        }))
        .unwrap();

        assert_eq!(book.publication_year, Some(1965));
        assert_eq!(book.isbn, "9780441013593");

        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["publicationYear"], json!(1965));
        assert_eq!(value["ISBN"], json!("9780441013593"));
    }

    #[test]
    fn test_missing_year_and_isbn_default() {
        let draft: BookDraft = serde_json::from_value(json!({
            "name": "Untitled",
            "authors": ["Anon"],
            "rating": 1
        }))
        .unwrap();

        assert_eq!(draft.publication_year, None);
        assert!(draft.isbn.is_empty());
    }

    #[test]
    fn test_filter_field_parsing() {
        assert_eq!("publicationYear".parse::<FilterField>().unwrap(), FilterField::PublicationYear);
        assert_eq!("publication-year".parse::<FilterField>().unwrap(), FilterField::PublicationYear);
        assert_eq!("publication_year".parse::<FilterField>().unwrap(), FilterField::PublicationYear);
        assert_eq!("Authors".parse::<FilterField>().unwrap(), FilterField::Authors);
        assert!(matches!(
            "isbn".parse::<FilterField>(),
            Err(CatalogError::UnknownFilter(ref s)) if s == "isbn"
        ));
    }

    #[test]
    fn test_group_key_coercion() {
        assert_eq!(GroupKey::Null.as_number(), 0.0);
        assert_eq!(GroupKey::Number(2001.0).as_number(), 2001.0);
        assert_eq!(GroupKey::from(" 42 ").as_number(), 42.0);
        assert_eq!(GroupKey::from("").as_number(), 0.0);
        assert!(GroupKey::from("Dune").as_number().is_nan());
    }

    #[test]
    fn test_group_key_equality() {
        assert_eq!(GroupKey::Number(0.0), GroupKey::Number(-0.0));
        assert_ne!(GroupKey::Number(0.0), GroupKey::Null);
        assert_ne!(GroupKey::from("2001"), GroupKey::Number(2001.0));
    }

    #[test]
    fn test_group_key_display() {
        assert_eq!(GroupKey::Number(2001.0).to_string(), "2001");
        assert_eq!(GroupKey::Number(4.5).to_string(), "4.5");
        assert_eq!(GroupKey::Null.to_string(), "Unknown");
    }
}
