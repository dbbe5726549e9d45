use crate::error::{CatalogError, StoreError};
use crate::grouping::{group_by, Bucket};
use crate::models::{Book, BookDraft, FilterField};
use crate::recommendation::{
    candidates_with_min_age, current_year, recommend_with_min_age, MIN_BOOK_AGE_YEARS,
};
use crate::store::BookStore;

/// Catalog state: the in-memory mirror of a store plus the flags the front end reads
#[derive(Debug)]
pub struct Catalog<S: BookStore> {
    store: S,
    books: Vec<Book>,
    loading: bool,
    error: Option<String>,
    filter: FilterField,
    min_book_age_years: i32,
}

impl<S: BookStore> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            books: Vec::new(),
            loading: false,
            error: None,
            filter: FilterField::default(),
            min_book_age_years: MIN_BOOK_AGE_YEARS,
        }
    }

    pub fn with_filter(mut self, filter: FilterField) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_min_book_age(mut self, years: i32) -> Self {
        self.min_book_age_years = years;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message from the last failed store call, cleared when the next one starts
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn filter(&self) -> FilterField {
        self.filter
    }

    pub fn set_filter(&mut self, filter: FilterField) {
        self.filter = filter;
    }

    pub fn book_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// Books grouped by the current filter
    pub fn grouped_books(&self) -> Vec<Bucket<Book>> {
        group_by(self.filter, &self.books)
    }

    /// A random top-rated book among those old enough, if any
    pub fn recommended_book(&self) -> Option<&Book> {
        recommend_with_min_age(
            &self.books,
            current_year(),
            self.min_book_age_years,
            &mut rand::thread_rng(),
        )
    }

    /// Books the recommendation is drawn from
    pub fn recommendation_candidates(&self) -> Vec<&Book> {
        candidates_with_min_age(&self.books, current_year(), self.min_book_age_years)
    }

    /// Replace the in-memory list with the store's collection
    pub fn fetch_books(&mut self) -> Result<(), CatalogError> {
        let books = self.run_store_call("fetch_books", |store| store.fetch_all())?;
        tracing::debug!(count = books.len(), "catalog refreshed");
        self.books = books;
        Ok(())
    }

    /// Write a new book to the store and append it once the store assigned an id
    pub fn add_book(&mut self, draft: BookDraft) -> Result<Book, CatalogError> {
        let book = self.run_store_call("add_book", |store| store.add(&draft))?;
        self.books.push(book.clone());
        Ok(book)
    }

    /// Write an edited book to the store, then replace the local copy
    pub fn update_book(&mut self, book: Book) -> Result<(), CatalogError> {
        let index = self.index_of(&book.id)?;
        self.run_store_call("update_book", |store| store.update(&book))?;
        self.books[index] = book;
        Ok(())
    }

    /// Delete a book from the store, then drop the local copy
    pub fn delete_book(&mut self, id: &str) -> Result<Book, CatalogError> {
        let index = self.index_of(id)?;
        self.run_store_call("delete_book", |store| store.delete(id))?;
        Ok(self.books.remove(index))
    }

    fn index_of(&self, id: &str) -> Result<usize, CatalogError> {
        self.books
            .iter()
            .position(|book| book.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    fn run_store_call<T>(
        &mut self,
        action: &'static str,
        call: impl FnOnce(&mut S) -> Result<T, StoreError>,
    ) -> Result<T, CatalogError> {
        self.loading = true;
        self.error = None;

        let result = call(&mut self.store);
        self.loading = false;

        result.map_err(|err| {
            let message = err.user_message();
            tracing::error!(action, error = %message, "store call failed");
            self.error = Some(message);
            CatalogError::Store(err)
        })
    }
}
