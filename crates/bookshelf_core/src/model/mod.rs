//! Domain model for the book list.
//!
//! # Responsibility
//! - Define the canonical book record consumed by repositories and view models.
//!
//! # Invariants
//! - Every book is identified by its ISBN.
//! - Records are immutable values; projections are derived, never stored back.

pub mod book;
