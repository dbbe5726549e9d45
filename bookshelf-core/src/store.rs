use crate::error::StoreError;
use crate::models::{Book, BookDraft};
use crate::sorting::sort_books_by_name;

/// A document store holding one collection of books
pub trait BookStore {
    /// Every book in the collection, ordered by name
    fn fetch_all(&self) -> Result<Vec<Book>, StoreError>;

    /// Insert a new book; the store assigns its id
    fn add(&mut self, draft: &BookDraft) -> Result<Book, StoreError>;

    /// Replace the stored document with the same id
    fn update(&mut self, book: &Book) -> Result<(), StoreError>;

    /// Remove the document with the given id
    fn delete(&mut self, id: &str) -> Result<(), StoreError>;
}

/// In-process store with sequential ids
#[derive(Debug, Default)]
pub struct MemoryStore {
    books: Vec<Book>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with existing documents.
    /// Generated ids continue after the highest seeded `book-N`.
    pub fn with_books(books: Vec<Book>) -> Self {
        let next_id = books
            .iter()
            .filter_map(|book| book.id.strip_prefix("book-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        Self { books, next_id }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl BookStore for MemoryStore {
    fn fetch_all(&self) -> Result<Vec<Book>, StoreError> {
        let mut books = self.books.clone();
        sort_books_by_name(&mut books);
        Ok(books)
    }

    fn add(&mut self, draft: &BookDraft) -> Result<Book, StoreError> {
        self.next_id += 1;
        let book = Book::from_draft(format!("book-{}", self.next_id), draft.clone());
        self.books.push(book.clone());
        Ok(book)
    }

    fn update(&mut self, book: &Book) -> Result<(), StoreError> {
        let position = self.position(&book.id)?;
        self.books[position] = book.clone();
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let position = self.position(id)?;
        self.books.remove(position);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> BookDraft {
        BookDraft {
            name: name.to_string(),
            authors: vec!["Someone".to_string()],
            publication_year: Some(2000),
            rating: 5.0,
            isbn: String::new(),
        }
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        let mut store = MemoryStore::new();
        let first = store.add(&draft("First")).unwrap();
        let second = store.add(&draft("Second")).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_fetch_all_orders_by_name() {
        let mut store = MemoryStore::new();
        store.add(&draft("Mort")).unwrap();
        store.add(&draft("Dune")).unwrap();

        let names: Vec<String> = store.fetch_all().unwrap().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Dune", "Mort"]);
    }

    #[test]
    fn test_update_and_delete_unknown_id() {
        let mut store = MemoryStore::new();
        let ghost = Book::from_draft("missing", draft("Ghost"));

        assert!(matches!(store.update(&ghost), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete("missing"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_seeded_ids_do_not_collide() {
        let seeded = vec![Book::from_draft("book-1", draft("Seed"))];
        let mut store = MemoryStore::with_books(seeded);
        let added = store.add(&draft("New")).unwrap();

        assert_eq!(added.id, "book-2");
    }

    #[test]
    fn test_seeded_ids_out_of_sequence() {
        let seeded = vec![
            Book::from_draft("book-2", draft("Second")),
            Book::from_draft("custom", draft("Custom")),
        ];
        let mut store = MemoryStore::with_books(seeded);
        let added = store.add(&draft("New")).unwrap();

        assert_eq!(added.id, "book-3");
        let ids: Vec<String> = store.fetch_all().unwrap().into_iter().map(|b| b.id).collect();
        assert_eq!(ids.iter().filter(|id| id.as_str() == "book-3").count(), 1);
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_fetch_all_uses_plain_name_order() {
        let mut store = MemoryStore::new();
        for name in ["anathem", "Dune", "The Hobbit", "Mort"] {
            store.add(&draft(name)).unwrap();
        }

        let names: Vec<String> = store.fetch_all().unwrap().into_iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Dune", "Mort", "The Hobbit", "anathem"]);
    }
}
