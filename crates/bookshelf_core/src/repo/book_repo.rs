//! Book repository contract and fixed in-memory catalog.
//!
//! # Responsibility
//! - Provide the `get()` listing contract consumed by view models.
//! - Own the fixed catalog constructed once at repository creation.
//!
//! # Invariants
//! - Repository contents never change after construction.
//! - Construction rejects duplicate ISBNs and invalid records.
//! - Repeated `get()` calls return value-equal, order-equal results.

use crate::date::InvalidDateFormat;
use crate::model::book::{Book, BookValidationError};
use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;
use std::sync::Arc;

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors raised while building a repository dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    InvalidDate(InvalidDateFormat),
    Validation(BookValidationError),
    DuplicateIsbn(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateIsbn(isbn) => write!(f, "duplicate isbn in catalog: {isbn}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::DuplicateIsbn(_) => None,
        }
    }
}

impl From<InvalidDateFormat> for RepoError {
    fn from(value: InvalidDateFormat) -> Self {
        Self::InvalidDate(value)
    }
}

impl From<BookValidationError> for RepoError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Read-only book listing contract.
pub trait BookRepository {
    /// Returns the full collection in a stable order. Pure query.
    fn get(&self) -> Vec<Book>;
}

impl<R: BookRepository + ?Sized> BookRepository for &R {
    fn get(&self) -> Vec<Book> {
        (**self).get()
    }
}

impl<R: BookRepository + ?Sized> BookRepository for Box<R> {
    fn get(&self) -> Vec<Book> {
        (**self).get()
    }
}

impl<R: BookRepository + ?Sized> BookRepository for Rc<R> {
    fn get(&self) -> Vec<Book> {
        (**self).get()
    }
}

impl<R: BookRepository + ?Sized> BookRepository for Arc<R> {
    fn get(&self) -> Vec<Book> {
        (**self).get()
    }
}

/// `(isbn, title, authors, pages, dd/MM/yyyy)` rows of the built-in catalog.
const CATALOG: &[(&str, &str, &[&str], u32, &str)] = &[
    (
        "0804139296",
        "Zero to One",
        &["Peter Thiel", "Blake Masters"],
        224,
        "04/06/2015",
    ),
    (
        "0307887898",
        "The Lean Startup",
        &["Eric Ries"],
        336,
        "06/10/2011",
    ),
];

/// In-memory repository over a fixed, validated book list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBookRepository {
    books: Vec<Book>,
}

impl FixedBookRepository {
    /// Builds a repository from caller-provided books, keeping their order.
    ///
    /// # Errors
    /// - `RepoError::Validation` when a book fails `Book::validate()`.
    /// - `RepoError::DuplicateIsbn` when two books share an ISBN.
    pub fn from_books(books: Vec<Book>) -> RepoResult<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            book.validate()?;
            if !seen.insert(book.isbn.as_str()) {
                return Err(RepoError::DuplicateIsbn(book.isbn.clone()));
            }
        }
        Ok(Self { books })
    }

    /// Builds the built-in catalog, surfacing literal parse failures.
    pub fn try_catalog() -> RepoResult<Self> {
        let books = CATALOG
            .iter()
            .map(|(isbn, title, authors, pages, date)| {
                Book::parse(*isbn, *title, authors.iter().copied(), *pages, date)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_books(books)
    }

    /// Builds the built-in catalog.
    ///
    /// # Panics
    /// Only if the compile-time catalog literals are malformed, which
    /// `try_catalog` is tested against.
    pub fn catalog() -> Self {
        Self::try_catalog().expect("built-in catalog literals are valid")
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for FixedBookRepository {
    fn default() -> Self {
        Self::catalog()
    }
}

impl BookRepository for FixedBookRepository {
    fn get(&self) -> Vec<Book> {
        debug!(
            "event=repo_get module=repo status=ok count={}",
            self.books.len()
        );
        self.books.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{FixedBookRepository, CATALOG};

    #[test]
    fn try_catalog_parses_every_literal() {
        let repo = FixedBookRepository::try_catalog().expect("catalog literals should parse");
        assert_eq!(repo.len(), CATALOG.len());
    }

    #[test]
    fn catalog_keeps_literal_order() {
        let isbns = FixedBookRepository::catalog()
            .books
            .iter()
            .map(|book| book.isbn.clone())
            .collect::<Vec<_>>();
        let expected = CATALOG
            .iter()
            .map(|(isbn, ..)| isbn.to_string())
            .collect::<Vec<_>>();
        assert_eq!(isbns, expected);
    }
}
