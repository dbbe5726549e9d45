// Public modules
pub mod catalog;
pub mod error;
pub mod grouping;
pub mod io;
pub mod models;
pub mod recommendation;
pub mod routes;
pub mod schema_validation;
pub mod sorting;
pub mod store;
pub mod validation;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use error::{CatalogError, StoreError, GENERIC_ERROR_MESSAGE};
pub use grouping::{bucket_keys, group_by, Bucket, Groupable};
pub use io::{load_document, save_document, JsonFileStore, StoreDocument};
pub use models::{Book, BookDraft, FieldValue, FilterField, GroupKey};
pub use recommendation::{
    candidates_with_min_age, current_year, recommend, recommend_with_min_age,
    recommendation_candidates, MIN_BOOK_AGE_YEARS,
};
pub use routes::Route;
pub use schema_validation::{store_document_schema, validate_against_schema};
pub use sorting::{compare_names, sort_books_by_name};
pub use store::{BookStore, MemoryStore};
pub use validation::{
    is_valid_author_name, is_valid_authors, is_valid_isbn, parse_authors, validate_book_draft,
};
