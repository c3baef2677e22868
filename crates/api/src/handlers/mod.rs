//! Request handlers for PromptLab entities.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, delete) for a single resource. Handlers validate input, delegate
//! to the [`promptlab_store::Store`], and map errors via
//! [`crate::error::AppError`].

pub mod collection;
pub mod prompt;
pub mod version;
