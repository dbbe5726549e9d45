use bookshelf_core::{Book, Bucket, FilterField};
use colored::Colorize;

use super::formatting::{format_book_details, format_book_line, format_bucket_heading};

/// Semantic level of a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
}

/// Print a status message with its level's colour
pub fn print_status(text: &str, level: StatusLevel) {
    let line = match level {
        StatusLevel::Info => text.normal(),
        StatusLevel::Success => text.green(),
        StatusLevel::Warning => text.yellow(),
    };
    println!("{}", line);
}

/// Print an error as title, message and details on stderr
pub fn print_error(title: &str, message: &str, details: &str) {
    eprintln!("{} {}", format!("{}:", title).red().bold(), message);
    if !details.is_empty() {
        for line in details.lines() {
            eprintln!("  {}", line);
        }
    }
}

pub fn print_buckets(field: FilterField, buckets: &[Bucket<Book>]) {
    if buckets.is_empty() {
        print_status("No books in the catalog yet.", StatusLevel::Info);
        return;
    }

    for bucket in buckets {
        println!("{}", format_bucket_heading(field, &bucket.key, bucket.items.len()).bold());
        for book in &bucket.items {
            println!("  - {}", format_book_line(book));
        }
        println!();
    }
}

pub fn print_book(book: &Book) {
    for (label, value) in format_book_details(book) {
        println!("{}  {}", format!("{:>10}", label).bold(), value);
    }
}

pub fn print_recommendation(book: Option<&Book>, candidates: usize) {
    match book {
        Some(book) => {
            println!("{}", "Recommended for you".bold());
            print_book(book);
            if candidates > 1 {
                println!();
                print_status(
                    &format!("Picked at random from {} equally rated books.", candidates),
                    StatusLevel::Info,
                );
            }
        }
        None => print_status(
            "No recommendation yet: no book in the catalog is old enough.",
            StatusLevel::Warning,
        ),
    }
}
