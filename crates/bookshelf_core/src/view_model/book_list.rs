//! Book list view model.
//!
//! # Responsibility
//! - Fetch books from an injected repository on demand.
//! - Project each book into a title/subtitle display row.
//! - Publish the resulting rows for view observation.
//!
//! # Invariants
//! - Published rows start empty and are replaced wholesale on each fetch.
//! - Row order matches repository order.
//! - Fetch is synchronous; observers see the new rows before `fetch_books` returns.

use crate::date::year;
use crate::model::book::Book;
use crate::repo::book_repo::BookRepository;
use crate::view_model::published::{Published, SubscriptionId};
use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

/// Separator between the author list and the year in a row subtitle (U+26AC).
pub const SUBTITLE_SEPARATOR: &str = " \u{26AC} ";

/// Display-ready projection of one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRowViewData {
    /// Copied from `Book::isbn`; list identity for diffing.
    pub id: String,
    pub title: String,
    /// `"<authors joined by ", "> ⚬ <year>"`.
    pub subtitle: String,
}

impl From<&Book> for BookRowViewData {
    fn from(book: &Book) -> Self {
        Self {
            id: book.isbn.clone(),
            title: book.title.clone(),
            subtitle: format_subtitle(&book.authors, &book.publication_date),
        }
    }
}

/// Formats the row subtitle for a book.
pub fn format_subtitle(authors: &[String], publication_date: &NaiveDate) -> String {
    format!(
        "{}{}{}",
        authors.join(", "),
        SUBTITLE_SEPARATOR,
        year(publication_date)
    )
}

/// View model backing a scrollable list of book cells.
#[derive(Debug)]
pub struct BookListViewModel<R: BookRepository> {
    repo: R,
    books: Published<Vec<BookRowViewData>>,
}

impl<R: BookRepository> BookListViewModel<R> {
    /// Creates a view model with empty published rows.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            books: Published::default(),
        }
    }

    /// Loads books from the repository and publishes their rows.
    ///
    /// Intended to run once when the list becomes visible.
    pub fn fetch_books(&mut self) {
        let rows = self
            .repo
            .get()
            .iter()
            .map(BookRowViewData::from)
            .collect::<Vec<_>>();
        let count = rows.len();
        let changed = self.books.set(rows);
        info!(
            "event=books_fetch module=view_model status=ok count={} changed={}",
            count, changed
        );
    }

    /// Currently published rows.
    pub fn books(&self) -> &[BookRowViewData] {
        self.books.get()
    }

    /// Registers a row observer. It is called right away with the current rows.
    pub fn subscribe(
        &mut self,
        observer: impl FnMut(&Vec<BookRowViewData>) + 'static,
    ) -> SubscriptionId {
        self.books.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.books.unsubscribe(id)
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}
