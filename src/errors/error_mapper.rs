use bookshelf_core::{CatalogError, StoreError};

use crate::operations::ValidationError;

/// Map a failed command to a user-friendly message
/// Returns (title, message, details)
pub fn map_command_error(error: &anyhow::Error) -> (String, String, String) {
    if let Some(catalog_error) = error.downcast_ref::<CatalogError>() {
        return map_catalog_error(catalog_error);
    }

    if let Some(store_error) = error.downcast_ref::<StoreError>() {
        return map_store_error(store_error);
    }

    if let Some(validation_error) = error.downcast_ref::<ValidationError>() {
        return (
            "Invalid Book".to_string(),
            format!("The {} is not valid.", validation_error.field),
            validation_error.message.clone(),
        );
    }

    let error_string = format!("{:#}", error);

    if error_string.contains("No page found") {
        (
            "Page Not Found".to_string(),
            "There is no page at that path.".to_string(),
            format!("{}\n\nKnown pages: /, /add, /edit/<id>", error),
        )
    } else if error_string.contains("config") {
        (
            "Configuration Error".to_string(),
            "The configuration could not be loaded.".to_string(),
            error_string,
        )
    } else {
        (
            "Error".to_string(),
            "The command failed.".to_string(),
            error_string,
        )
    }
}

/// Map catalog action errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_catalog_error(error: &CatalogError) -> (String, String, String) {
    match error {
        CatalogError::NotFound(id) => (
            "Book Not Found".to_string(),
            "No book with that id is in the catalog.".to_string(),
            format!("Id: {}\n\nRun 'bookshelf list' to see the ids of all books.", id),
        ),
        CatalogError::UnknownFilter(_) => (
            "Unknown Filter".to_string(),
            "Books cannot be grouped by that field.".to_string(),
            error.to_string(),
        ),
        CatalogError::Store(store_error) => map_store_error(store_error),
    }
}

/// Map store errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_store_error(error: &StoreError) -> (String, String, String) {
    match error {
        StoreError::Schema(violations) => (
            "Invalid Store File".to_string(),
            "The book store file has validation errors.".to_string(),
            violations.join("\n"),
        ),
        StoreError::Serialization(_) => (
            "Corrupt Store File".to_string(),
            "The book store file is not valid JSON.".to_string(),
            error.to_string(),
        ),
        StoreError::Io(io_error) if io_error.kind() == std::io::ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            "You don't have permission to read or write the book store file.".to_string(),
        ),
        StoreError::NotFound(id) => (
            "Book Not Found".to_string(),
            "The store has no book with that id.".to_string(),
            format!("Id: {}\n\nThe book may have been deleted elsewhere; list again to refresh.", id),
        ),
        _ => (
            "Store Error".to_string(),
            "The book store reported an error.".to_string(),
            error.user_message(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_catalog_not_found() {
        let err = anyhow::Error::new(CatalogError::NotFound("b9".to_string()));
        let (title, _, details) = map_command_error(&err);

        assert_eq!(title, "Book Not Found");
        assert!(details.contains("b9"));
    }

    #[test]
    fn test_store_errors_inside_catalog_errors() {
        let err = anyhow::Error::new(CatalogError::Store(StoreError::Schema(vec![
            "\"A\" is not of type \"array\" at /books/x/authors".to_string(),
        ])));
        let (title, _, details) = map_command_error(&err);

        assert_eq!(title, "Invalid Store File");
        assert!(details.contains("/books/x/authors"));
    }

    #[test]
    fn test_unclassified_store_failure() {
        let (title, _, details) = map_store_error(&StoreError::Unknown);
        assert_eq!(title, "Store Error");
        assert_eq!(details, "Something went wrong");
    }

    #[test]
    fn test_validation_error() {
        let err = anyhow::Error::new(ValidationError {
            field: "name".to_string(),
            message: "Name cannot be empty".to_string(),
        });
        let (title, message, details) = map_command_error(&err);

        assert_eq!(title, "Invalid Book");
        assert_eq!(message, "The name is not valid.");
        assert_eq!(details, "Name cannot be empty");
    }

    #[test]
    fn test_page_not_found() {
        let err = anyhow!("No page found at '/nowhere'");
        let (title, _, _) = map_command_error(&err);
        assert_eq!(title, "Page Not Found");
    }

    #[test]
    fn test_fallback() {
        let err = anyhow!("disk on fire");
        let (title, _, details) = map_command_error(&err);
        assert_eq!(title, "Error");
        assert_eq!(details, "disk on fire");
    }
}
