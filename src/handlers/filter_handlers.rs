use bookshelf_core::{BookStore, Catalog, FilterField};

use crate::ui::{print_buckets, print_recommendation, print_status, StatusLevel};

/// Fetch the catalog and print it grouped by the chosen field
pub fn list_books<S: BookStore>(catalog: &mut Catalog<S>, filter: Option<&str>) -> anyhow::Result<()> {
    if let Some(filter) = filter {
        catalog.set_filter(filter.parse::<FilterField>()?);
    }

    catalog.fetch_books()?;

    let buckets = catalog.grouped_books();
    print_buckets(catalog.filter(), &buckets);

    let count = catalog.books().len();
    if count > 0 {
        print_status(
            &format!("{} books in {} groups", count, buckets.len()),
            StatusLevel::Info,
        );
    }
    Ok(())
}

/// Fetch the catalog and print a recommended book
pub fn recommend_book<S: BookStore>(catalog: &mut Catalog<S>) -> anyhow::Result<()> {
    catalog.fetch_books()?;

    let candidates = catalog.recommendation_candidates().len();
    print_recommendation(catalog.recommended_book(), candidates);
    Ok(())
}
