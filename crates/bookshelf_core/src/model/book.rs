//! Book domain model.
//!
//! # Responsibility
//! - Define the record owned by book repositories.
//! - Provide construction helpers from typed or literal publication dates.
//!
//! # Invariants
//! - `isbn` is the identity key and must not be blank.
//! - `authors` keeps display order. Non-empty by data convention only.

use crate::date::{parse_date, InvalidDateFormat};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation errors for book records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// ISBN is empty or whitespace-only.
    BlankIsbn,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankIsbn => write!(f, "isbn must not be blank"),
        }
    }
}

impl Error for BookValidationError {}

/// Canonical book record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Globally unique identifier, also used as the list identity.
    pub isbn: String,
    pub title: String,
    /// Display order matters; rows join these with `", "`.
    pub authors: Vec<String>,
    /// Not shown in list rows.
    pub pages: u32,
    /// Serialized as ISO `YYYY-MM-DD`.
    pub publication_date: NaiveDate,
}

impl Book {
    /// Creates a book from a typed publication date.
    pub fn new<A, S>(
        isbn: impl Into<String>,
        title: impl Into<String>,
        authors: A,
        pages: u32,
        publication_date: NaiveDate,
    ) -> Self
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            authors: authors.into_iter().map(Into::into).collect(),
            pages,
            publication_date,
        }
    }

    /// Creates a book from a `dd/MM/yyyy` publication date literal.
    ///
    /// # Errors
    /// - Returns `InvalidDateFormat` when `publication_date` does not parse.
    pub fn parse<A, S>(
        isbn: impl Into<String>,
        title: impl Into<String>,
        authors: A,
        pages: u32,
        publication_date: &str,
    ) -> Result<Self, InvalidDateFormat>
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let publication_date = parse_date(publication_date)?;
        Ok(Self::new(isbn, title, authors, pages, publication_date))
    }

    /// Identity key used for list diffing. Same as `isbn`.
    pub fn id(&self) -> &str {
        self.isbn.as_str()
    }

    /// Checks invariants enforced by the type.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if self.isbn.trim().is_empty() {
            return Err(BookValidationError::BlankIsbn);
        }
        Ok(())
    }
}
