//! Book record.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A book in a lending catalog.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Book {
    /// Title of the book.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Year of first publication.
    pub published_year: i32,
    /// Whether a copy can currently be borrowed.
    pub is_available: bool,
}

impl Book {
    /// Creates a new book.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        published_year: i32,
        is_available: bool,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published_year,
            is_available,
        }
    }

    /// Returns the one-line summary, with availability rendered as `Yes`/`No`.
    #[must_use]
    pub fn details(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Published: {}, Available: {}",
            self.title,
            self.author,
            self.published_year,
            if self.is_available { "Yes" } else { "No" }
        )
    }
}
