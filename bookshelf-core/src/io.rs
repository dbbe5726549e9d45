use crate::error::StoreError;
use crate::models::{Book, BookDraft};
use crate::schema_validation::{store_document_schema, validate_against_schema};
use crate::sorting::sort_books_by_name;
use crate::store::BookStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk layout: documents keyed by id
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreDocument {
    pub books: BTreeMap<String, BookDraft>,
}

/// Load a collection from a JSON file, validating it first.
/// A missing file is an empty collection.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<StoreDocument, StoreError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "store file missing, starting empty");
        return Ok(StoreDocument::default());
    }

    let contents = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    validate_against_schema(&store_document_schema(), &value).map_err(StoreError::Schema)?;

    Ok(serde_json::from_value(value)?)
}

/// Save a collection to a JSON file with pretty printing
pub fn save_document<P: AsRef<Path>>(document: &StoreDocument, path: P) -> Result<(), StoreError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(document)?;
    fs::write(path, json)?;
    Ok(())
}

/// Document store backed by a single JSON file.
/// Every call reads the file, so external edits are picked up.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn modify<T>(
        &self,
        change: impl FnOnce(&mut StoreDocument) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut document = load_document(&self.path)?;
        let result = change(&mut document)?;
        save_document(&document, &self.path)?;
        Ok(result)
    }
}

impl BookStore for JsonFileStore {
    fn fetch_all(&self) -> Result<Vec<Book>, StoreError> {
        let document = load_document(&self.path)?;
        let mut books: Vec<Book> = document
            .books
            .into_iter()
            .map(|(id, draft)| Book::from_draft(id, draft))
            .collect();

        sort_books_by_name(&mut books);
        tracing::debug!(path = %self.path.display(), count = books.len(), "fetched books");
        Ok(books)
    }

    fn add(&mut self, draft: &BookDraft) -> Result<Book, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();
        self.modify(|document| {
            document.books.insert(id.clone(), draft.clone());
            Ok(())
        })?;

        tracing::info!(id = %id, name = %draft.name, "added book");
        Ok(Book::from_draft(id, draft.clone()))
    }

    fn update(&mut self, book: &Book) -> Result<(), StoreError> {
        self.modify(|document| match document.books.get_mut(&book.id) {
            Some(stored) => {
                *stored = book.to_draft();
                Ok(())
            }
            None => Err(StoreError::NotFound(book.id.clone())),
        })?;

        tracing::info!(id = %book.id, "updated book");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        self.modify(|document| {
            document
                .books
                .remove(id)
                .map(|_| ())
                .ok_or_else(|| StoreError::NotFound(id.to_string()))
        })?;

        tracing::info!(id = %id, "deleted book");
        Ok(())
    }
}
