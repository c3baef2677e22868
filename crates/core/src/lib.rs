//! Foundation types for the prompt library service.
//!
//! Everything in this crate is pure and synchronous: the error taxonomy,
//! id/timestamp generation, field validation, and template-variable
//! extraction. No I/O, no locking, no web types.

pub mod error;
pub mod template;
pub mod types;
pub mod validation;
