use std::fmt;

/// Navigable views of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    BooksList,
    AddBook,
    EditBook { id: String },
    NotFound,
}

impl Route {
    /// Map a path like `/edit/abc` to a route. Unknown paths resolve to `NotFound`.
    pub fn resolve(path: &str) -> Route {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Route::BooksList,
            ["add"] => Route::AddBook,
            ["edit", id] => Route::EditBook { id: id.to_string() },
            _ => Route::NotFound,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::BooksList => "BooksList",
            Route::AddBook => "AddBook",
            Route::EditBook { .. } => "EditBook",
            Route::NotFound => "NotFound",
        }
    }

    /// Canonical path; `NotFound` has none
    pub fn path(&self) -> Option<String> {
        match self {
            Route::BooksList => Some("/".to_string()),
            Route::AddBook => Some("/add".to_string()),
            Route::EditBook { id } => Some(format!("/edit/{}", id)),
            Route::NotFound => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
