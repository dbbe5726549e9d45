use thiserror::Error;

/// Message recorded when a failure carries nothing presentable
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Errors reported by a [`crate::store::BookStore`]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected the call with a plain message
    #[error("{0}")]
    Message(String),
    #[error("Book not found in store: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store document failed validation:\n{}", .0.join("\n"))]
    Schema(Vec<String>),
    #[error("{}", GENERIC_ERROR_MESSAGE)]
    Unknown,
}

impl StoreError {
    /// Message shown to the user for a failed store call
    pub fn user_message(&self) -> String {
        match self {
            StoreError::Message(message) if !message.trim().is_empty() => message.clone(),
            StoreError::Message(_) | StoreError::Unknown => GENERIC_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Errors returned by [`crate::catalog::Catalog`] actions
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Raised before the store is contacted
    #[error("Book not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("Unknown filter '{0}' (expected one of: publicationYear, authors, rating, name)")]
    UnknownFilter(String),
}
