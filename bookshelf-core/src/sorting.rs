use crate::models::Book;
use std::cmp::Ordering;

/// Sort books by name, the order fetches are returned in
pub fn sort_books_by_name(books: &mut [Book]) {
    books.sort_by(compare_names);
}

/// Plain code-point order on the name, ties broken by id
pub fn compare_names(a: &Book, b: &Book) -> Ordering {
    a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id))
}
