//! Core domain logic for Bookshelf.
//! This crate owns the book catalog, the list projection and its observable state.

pub mod date;
pub mod logging;
pub mod model;
pub mod repo;
pub mod view_model;

pub use date::{parse_date, year, InvalidDateFormat, InvalidDateReason};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookValidationError};
pub use repo::book_repo::{BookRepository, FixedBookRepository, RepoError, RepoResult};
pub use view_model::book_list::{
    format_subtitle, BookListViewModel, BookRowViewData, SUBTITLE_SEPARATOR,
};
pub use view_model::published::{Published, SubscriptionId};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
