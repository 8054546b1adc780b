//! Persistence contracts for comments.
//!
//! # Responsibility
//! - Define the store capability the editor saves through.
//! - Keep backend details out of the record and service layers.
//!
//! # Invariants
//! - Store writes must enforce `Comment::validate()` before persisting.

pub mod comment_store;
