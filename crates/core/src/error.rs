use crate::types::Id;

/// Domain-level error taxonomy.
///
/// `NotFound` is for lookups that name a primary entity; `InvalidReference`
/// is for writes that name another entity which does not exist. Plain
/// missing-row outcomes in the store surface as `Option`/`bool`, not here.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: Id },

    #[error("Invalid reference: {entity} with id {id} does not exist")]
    InvalidReference { entity: &'static str, id: Id },

    #[error("Validation failed: {0}")]
    Validation(String),
}
