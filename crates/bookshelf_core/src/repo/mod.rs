//! Repository layer abstractions and in-memory implementations.
//!
//! # Responsibility
//! - Define the read-only data access contract for books.
//! - Keep storage details out of view models and UI bridges.
//!
//! # Invariants
//! - `get()` returns fully materialized, deterministically ordered results.
//! - ISBNs are unique within every collection a repository returns.

pub mod book_repo;
