//! Version history for prompts.
//!
//! Versions are explicit snapshots: callers supply the fields to freeze,
//! and the engine assigns the number. Numbering is recomputed from the
//! stored data on every insert (one more than the current maximum for
//! that prompt), never tracked in a counter that could drift from the
//! table. The max-scan and the insert happen under one held write lock,
//! so two concurrent snapshots of the same prompt cannot collide.
//!
//! History is append-only. Nothing here mutates or deletes an existing
//! version, and reverting is itself an append: the target snapshot is
//! copied into a brand-new version at the top of the history.

use promptlab_core::error::CoreError;
use promptlab_core::types::{new_id, now};

use crate::models::prompt_version::{CreatePromptVersion, PromptVersion};
use crate::store::{Store, Tables};

/// Number for the next snapshot of this prompt, from the data at hand.
/// Caller must hold the store lock for the result to stay valid.
fn next_number_locked(tables: &Tables, prompt_id: &str) -> i64 {
    tables
        .versions
        .values()
        .filter(|v| v.prompt_id == prompt_id)
        .map(|v| v.version_number)
        .max()
        .unwrap_or(0)
        + 1
}

impl Store {
    /// The number the next snapshot of this prompt would receive.
    ///
    /// Advisory outside a write lock: another writer may claim it first.
    /// The mutating paths recompute under their own lock.
    pub fn next_version_number(&self, prompt_id: &str) -> i64 {
        next_number_locked(&self.inner.read(), prompt_id)
    }

    /// Snapshot the given fields as a new version of this prompt.
    ///
    /// The prompt must currently exist; snapshots of deleted or unknown
    /// prompts are refused so history cannot grow heads without an owner.
    pub fn create_version(
        &self,
        prompt_id: &str,
        input: &CreatePromptVersion,
    ) -> Result<PromptVersion, CoreError> {
        let mut tables = self.inner.write();

        if !tables.prompts.contains_key(prompt_id) {
            return Err(CoreError::NotFound {
                entity: "Prompt",
                id: prompt_id.to_string(),
            });
        }

        let version = PromptVersion {
            id: new_id(),
            prompt_id: prompt_id.to_string(),
            version_number: next_number_locked(&tables, prompt_id),
            title: input.title.clone(),
            content: input.content.clone(),
            description: input.description.clone(),
            created_at: now(),
        };
        tables.versions.insert(version.id.clone(), version.clone());
        Ok(version)
    }

    /// Look up one version, checking it belongs to the given prompt.
    ///
    /// A version id that exists under a different prompt is reported as
    /// not found rather than leaked across the ownership boundary.
    pub fn get_version(&self, prompt_id: &str, version_id: &str) -> Result<PromptVersion, CoreError> {
        let tables = self.inner.read();
        match tables.versions.get(version_id) {
            Some(v) if v.prompt_id == prompt_id => Ok(v.clone()),
            _ => Err(CoreError::NotFound {
                entity: "Version",
                id: version_id.to_string(),
            }),
        }
    }

    /// Revert a prompt to one of its versions by appending a new snapshot.
    ///
    /// The new version copies the target's title and content verbatim and
    /// records where it came from in its description. The live prompt and
    /// the target version are both left untouched; a revert only ever adds
    /// history.
    pub fn revert_to_version(
        &self,
        prompt_id: &str,
        version_id: &str,
    ) -> Result<PromptVersion, CoreError> {
        let mut tables = self.inner.write();

        if !tables.prompts.contains_key(prompt_id) {
            return Err(CoreError::NotFound {
                entity: "Prompt",
                id: prompt_id.to_string(),
            });
        }
        let target = match tables.versions.get(version_id) {
            Some(v) if v.prompt_id == prompt_id => v.clone(),
            _ => {
                return Err(CoreError::NotFound {
                    entity: "Version",
                    id: version_id.to_string(),
                })
            }
        };

        let version = PromptVersion {
            id: new_id(),
            prompt_id: prompt_id.to_string(),
            version_number: next_number_locked(&tables, prompt_id),
            title: target.title.clone(),
            content: target.content.clone(),
            description: Some(format!("Reverted to version {}", target.version_number)),
            created_at: now(),
        };
        tables.versions.insert(version.id.clone(), version.clone());
        Ok(version)
    }

    /// Full history of a prompt, newest version first.
    ///
    /// The prompt must currently exist. Orphaned snapshots of a deleted
    /// prompt are reachable through [`Store::get_version`] only.
    pub fn list_versions(&self, prompt_id: &str) -> Result<Vec<PromptVersion>, CoreError> {
        let tables = self.inner.read();

        if !tables.prompts.contains_key(prompt_id) {
            return Err(CoreError::NotFound {
                entity: "Prompt",
                id: prompt_id.to_string(),
            });
        }

        let mut versions: Vec<PromptVersion> = tables
            .versions
            .values()
            .filter(|v| v.prompt_id == prompt_id)
            .cloned()
            .collect();
        versions.sort_by(|a, b| b.version_number.cmp(&a.version_number));
        Ok(versions)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
