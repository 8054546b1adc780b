//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate record persistence and UI notifications into edit use-cases.
//! - Keep UI layers decoupled from store details.

pub mod description_editor;
