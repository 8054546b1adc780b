//! Client-side domain model for editable comments.
//!
//! # Responsibility
//! - Define the comment entity and its display projection.
//! - Define the immutable value describing one committed edit.
//!
//! # Invariants
//! - Every comment is identified by a stable, non-nil `CommentId`.
//! - Edit values are fixed at construction and never mutated afterwards.

pub mod comment;
pub mod edit;
