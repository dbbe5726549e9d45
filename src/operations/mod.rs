pub mod book_input;

pub use book_input::{apply_input, draft_from_input, BookInput, ValidationError};
