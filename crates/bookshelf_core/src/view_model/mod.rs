//! View models exposing render-ready, observable state.
//!
//! # Responsibility
//! - Map domain records into display rows.
//! - Publish row collections to registered observers.
//!
//! # Invariants
//! - View models own their published state; there is exactly one writer.
//! - Views only read published state and trigger use-case methods.

pub mod book_list;
pub mod published;
