//! The in-memory entity store.
//!
//! Three keyed tables (prompts, collections, versions) behind a single
//! `parking_lot::RwLock`. Every mutating operation is a critical section,
//! and every check-then-write pair (referential checks, version numbering,
//! cascade deletion) runs entirely under one held write lock, so
//! cross-table invariants cannot be broken by interleaved callers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use promptlab_core::error::CoreError;
use promptlab_core::types::{new_id, now, Id};

use crate::models::collection::{Collection, CreateCollection, UpdateCollection};
use crate::models::prompt::{CreatePrompt, Prompt, UpdatePrompt};
use crate::models::prompt_version::PromptVersion;

/// The entity tables. All access goes through the [`Store`] lock.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) prompts: HashMap<Id, Prompt>,
    pub(crate) collections: HashMap<Id, Collection>,
    pub(crate) versions: HashMap<Id, PromptVersion>,
}

/// In-memory store for prompts, collections, and prompt versions.
///
/// An explicit object with no global instance: construct once at process
/// start and share via `Arc`. Reads clone values out; writes serialize on
/// the lock. Lookups of missing ids are normal outcomes (`None` / `false`),
/// not errors; only referential violations surface as [`CoreError`].
#[derive(Debug, Default)]
pub struct Store {
    pub(crate) inner: RwLock<Tables>,
    seq: AtomicU64,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next insertion sequence number, monotonic for the store's lifetime.
    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }

    // -----------------------------------------------------------------------
    // Prompts
    // -----------------------------------------------------------------------

    /// Create a prompt, assigning id, timestamps, and sequence.
    ///
    /// When the payload names a collection, that collection must exist at
    /// this moment; the check and the insert share one write lock, so the
    /// reference cannot go stale in between. On rejection nothing is stored.
    pub fn create_prompt(&self, input: &CreatePrompt) -> Result<Prompt, CoreError> {
        let mut tables = self.inner.write();

        if let Some(collection_id) = &input.collection_id {
            if !tables.collections.contains_key(collection_id) {
                return Err(CoreError::InvalidReference {
                    entity: "Collection",
                    id: collection_id.clone(),
                });
            }
        }

        let created_at = now();
        let prompt = Prompt {
            id: new_id(),
            title: input.title.clone(),
            content: input.content.clone(),
            description: input.description.clone(),
            collection_id: input.collection_id.clone(),
            created_at,
            updated_at: created_at,
            seq: self.next_seq(),
        };
        tables.prompts.insert(prompt.id.clone(), prompt.clone());
        Ok(prompt)
    }

    /// Look up a prompt by id.
    pub fn get_prompt(&self, id: &str) -> Option<Prompt> {
        self.inner.read().prompts.get(id).cloned()
    }

    /// All prompts in unspecified internal order. Callers that need a
    /// stable order go through the query layer.
    pub fn list_all_prompts(&self) -> Vec<Prompt> {
        self.inner.read().prompts.values().cloned().collect()
    }

    /// Merge `input` into the prompt with this id.
    ///
    /// Preserves `id` and `created_at` verbatim and stamps `updated_at`.
    /// Setting a collection re-checks the reference under the same lock.
    /// `Ok(None)` when no such prompt exists.
    pub fn update_prompt(
        &self,
        id: &str,
        input: &UpdatePrompt,
    ) -> Result<Option<Prompt>, CoreError> {
        let mut tables = self.inner.write();

        if let Some(Some(collection_id)) = &input.collection_id {
            if !tables.collections.contains_key(collection_id) {
                return Err(CoreError::InvalidReference {
                    entity: "Collection",
                    id: collection_id.clone(),
                });
            }
        }

        let prompt = match tables.prompts.get_mut(id) {
            Some(p) => p,
            None => return Ok(None),
        };

        if let Some(title) = &input.title {
            prompt.title = title.clone();
        }
        if let Some(content) = &input.content {
            prompt.content = content.clone();
        }
        if let Some(description) = &input.description {
            prompt.description = description.clone();
        }
        if let Some(collection_id) = &input.collection_id {
            prompt.collection_id = collection_id.clone();
        }
        prompt.updated_at = now();

        Ok(Some(prompt.clone()))
    }

    /// Delete a prompt. Returns whether a record was removed; that bool is
    /// the sole "not found" signal for deletes.
    ///
    /// Versions of the prompt stay in the version table. They remain
    /// readable through version lookups, while the versioning engine
    /// refuses to snapshot anything new for a missing prompt.
    pub fn delete_prompt(&self, id: &str) -> bool {
        self.inner.write().prompts.remove(id).is_some()
    }

    // -----------------------------------------------------------------------
    // Collections
    // -----------------------------------------------------------------------

    /// Create a collection, assigning id, timestamp, and sequence.
    pub fn create_collection(&self, input: &CreateCollection) -> Collection {
        let collection = Collection {
            id: new_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            created_at: now(),
            seq: self.next_seq(),
        };
        self.inner
            .write()
            .collections
            .insert(collection.id.clone(), collection.clone());
        collection
    }

    /// Look up a collection by id.
    pub fn get_collection(&self, id: &str) -> Option<Collection> {
        self.inner.read().collections.get(id).cloned()
    }

    /// All collections in unspecified internal order.
    pub fn list_all_collections(&self) -> Vec<Collection> {
        self.inner.read().collections.values().cloned().collect()
    }

    /// Merge `input` into the collection with this id; `None` when absent.
    ///
    /// Collections carry no `updated_at`, so the merge touches name and
    /// description only.
    pub fn update_collection(&self, id: &str, input: &UpdateCollection) -> Option<Collection> {
        let mut tables = self.inner.write();
        let collection = match tables.collections.get_mut(id) {
            Some(c) => c,
            None => return None,
        };
        if let Some(name) = &input.name {
            collection.name = name.clone();
        }
        if let Some(description) = &input.description {
            collection.description = description.clone();
        }
        Some(collection.clone())
    }

    /// Delete a collection and every prompt filed under it, atomically.
    ///
    /// Collection deletion always cascades: member prompts go with the
    /// collection in one critical section, so no interleaved writer can
    /// observe the half-deleted state, and no plain collection delete
    /// exists to bypass the policy. Returns whether the collection
    /// existed. Versions of the removed prompts stay, matching
    /// [`Store::delete_prompt`].
    pub fn delete_collection_cascade(&self, id: &str) -> bool {
        let mut tables = self.inner.write();
        if tables.collections.remove(id).is_none() {
            return false;
        }
        tables
            .prompts
            .retain(|_, p| p.collection_id.as_deref() != Some(id));
        true
    }

    // -----------------------------------------------------------------------
    // Maintenance
    // -----------------------------------------------------------------------

    /// Reset all three tables to empty. Test-harness escape hatch; nothing
    /// in the request path calls this.
    pub fn clear(&self) {
        let mut tables = self.inner.write();
        tables.prompts.clear();
        tables.collections.clear();
        tables.versions.clear();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
