//! Field validation for prompts and collections.
//!
//! Bounds are counted in characters, not bytes, and values are checked as
//! given (no trimming). Callers run these before any store write so that
//! rejected input leaves no trace.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for a prompt or version title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a prompt, version, or collection description in characters.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Maximum length for a collection name in characters.
pub const MAX_COLLECTION_NAME_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a title: must be non-empty and within length limit.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    let len = title.chars().count();
    if len == 0 {
        return Err(CoreError::Validation(
            "Title must not be empty".to_string(),
        ));
    }
    if len > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Title exceeds maximum length of {MAX_TITLE_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate prompt content: must be non-empty.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.is_empty() {
        return Err(CoreError::Validation(
            "Content must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a description: length check only (can be empty).
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    let len = description.chars().count();
    if len > MAX_DESCRIPTION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Description exceeds maximum length of {MAX_DESCRIPTION_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate a collection name: must be non-empty and within length limit.
pub fn validate_collection_name(name: &str) -> Result<(), CoreError> {
    let len = name.chars().count();
    if len == 0 {
        return Err(CoreError::Validation(
            "Collection name must not be empty".to_string(),
        ));
    }
    if len > MAX_COLLECTION_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Collection name exceeds maximum length of {MAX_COLLECTION_NAME_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
