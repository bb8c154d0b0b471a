//! Flutter bridge for Bookshelf core.

pub mod api;
