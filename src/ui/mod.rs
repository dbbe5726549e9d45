pub mod formatting;
pub mod output;

pub use output::{
    print_book, print_buckets, print_error, print_recommendation, print_status, StatusLevel,
};
