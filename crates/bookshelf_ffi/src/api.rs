//! FFI use-case API for the Flutter book list screen.
//!
//! # Responsibility
//! - Expose stable, use-case-level functions to Dart via FRB.
//! - Hand the UI display rows, never domain records.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Repositories are composed per call; no process-wide catalog lookup.

use bookshelf_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, BookListViewModel,
    BookRepository, BookRowViewData, FixedBookRepository,
};
use log::error;

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One list cell as rendered by the Flutter view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRowItem {
    /// Stable row key (the book ISBN).
    pub id: String,
    pub title: String,
    pub subtitle: String,
}

/// Response envelope for the book list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookListResponse {
    pub ok: bool,
    /// Rows in repository order; empty on failure.
    pub items: Vec<BookRowItem>,
    /// Human-readable diagnostics message.
    pub message: String,
}

/// Loads the book list rows. Call when the list screen appears.
///
/// # FFI contract
/// - Sync call, in-memory only.
/// - Never panics; catalog construction errors are returned in `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn book_list_fetch() -> BookListResponse {
    match FixedBookRepository::try_catalog() {
        Ok(repo) => fetch_rows(repo),
        Err(err) => {
            error!("event=book_list_fetch module=ffi status=error error={err}");
            BookListResponse {
                ok: false,
                items: Vec::new(),
                message: format!("book_list_fetch failed: {err}"),
            }
        }
    }
}

fn fetch_rows(repo: impl BookRepository) -> BookListResponse {
    let mut view_model = BookListViewModel::new(repo);
    view_model.fetch_books();
    let items = view_model
        .books()
        .iter()
        .map(to_book_row_item)
        .collect::<Vec<_>>();
    let message = if items.is_empty() {
        "No books.".to_string()
    } else {
        format!("Loaded {} book(s).", items.len())
    };
    BookListResponse {
        ok: true,
        items,
        message,
    }
}

fn to_book_row_item(row: &BookRowViewData) -> BookRowItem {
    BookRowItem {
        id: row.id.clone(),
        title: row.title.clone(),
        subtitle: row.subtitle.clone(),
    }
}
