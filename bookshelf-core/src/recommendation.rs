use crate::models::Book;
use chrono::Datelike;
use rand::seq::SliceRandom;
use rand::Rng;

/// Minimum age in years before a book can be recommended
pub const MIN_BOOK_AGE_YEARS: i32 = 3;

/// Current calendar year in local time
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Books that are old enough and share the highest rating among them
pub fn recommendation_candidates(books: &[Book], current_year: i32) -> Vec<&Book> {
    candidates_with_min_age(books, current_year, MIN_BOOK_AGE_YEARS)
}

pub fn candidates_with_min_age(books: &[Book], current_year: i32, min_age_years: i32) -> Vec<&Book> {
    let old_enough: Vec<&Book> = books
        .iter()
        .filter(|book| {
            book.publication_year
                .map(|year| i64::from(current_year) - i64::from(year) >= i64::from(min_age_years))
                .unwrap_or(false)
        })
        .collect();

    let Some(max_rating) = old_enough
        .iter()
        .map(|book| book.rating)
        .reduce(f64::max)
    else {
        return Vec::new();
    };

    old_enough
        .into_iter()
        .filter(|book| book.rating == max_rating)
        .collect()
}

/// Pick a random book among the recommendation candidates
pub fn recommend<'a, R: Rng + ?Sized>(
    books: &'a [Book],
    current_year: i32,
    rng: &mut R,
) -> Option<&'a Book> {
    recommend_with_min_age(books, current_year, MIN_BOOK_AGE_YEARS, rng)
}

pub fn recommend_with_min_age<'a, R: Rng + ?Sized>(
    books: &'a [Book],
    current_year: i32,
    min_age_years: i32,
    rng: &mut R,
) -> Option<&'a Book> {
    let candidates = candidates_with_min_age(books, current_year, min_age_years);
    let choice = candidates.choose(rng).copied();

    tracing::debug!(
        candidates = candidates.len(),
        chosen = choice.map(|book| book.id.as_str()),
        "picked recommendation"
    );

    choice
}
