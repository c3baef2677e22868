//! Read-side filtering, search, and ordering over prompts.
//!
//! The building blocks are pure functions over owned snapshots, composed
//! by [`Store::list_prompts`] in a fixed order: filter by collection,
//! then search, then sort. Ordering uses the insertion sequence as a
//! tiebreaker so prompts created within the same timestamp tick still
//! come back in a stable, deterministic order.

use crate::models::collection::Collection;
use crate::models::prompt::Prompt;
use crate::store::Store;

/// Keep only prompts filed under the given collection.
///
/// Unfiled prompts never match. An id no collection has simply matches
/// nothing; filtering is a read and cannot fail.
pub fn filter_by_collection(prompts: Vec<Prompt>, collection_id: &str) -> Vec<Prompt> {
    prompts
        .into_iter()
        .filter(|p| p.collection_id.as_deref() == Some(collection_id))
        .collect()
}

/// Keep prompts whose title or description contains `query`,
/// case-insensitively. The empty query matches everything.
pub fn search(prompts: Vec<Prompt>, query: &str) -> Vec<Prompt> {
    if query.is_empty() {
        return prompts;
    }
    let needle = query.to_lowercase();
    prompts
        .into_iter()
        .filter(|p| {
            p.title.to_lowercase().contains(&needle)
                || p.description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Sort prompts by creation time, insertion sequence breaking ties.
pub fn sort_by_created_at(mut prompts: Vec<Prompt>, descending: bool) -> Vec<Prompt> {
    prompts.sort_by_key(|p| (p.created_at, p.seq));
    if descending {
        prompts.reverse();
    }
    prompts
}

impl Store {
    /// Prompts for listing: optionally filtered and searched, always
    /// newest first.
    pub fn list_prompts(&self, collection_id: Option<&str>, query: Option<&str>) -> Vec<Prompt> {
        let mut prompts = self.list_all_prompts();
        if let Some(collection_id) = collection_id {
            prompts = filter_by_collection(prompts, collection_id);
        }
        if let Some(query) = query {
            prompts = search(prompts, query);
        }
        sort_by_created_at(prompts, true)
    }

    /// Collections for listing, newest first.
    pub fn list_collections(&self) -> Vec<Collection> {
        let mut collections = self.list_all_collections();
        collections.sort_by_key(|c| (c.created_at, c.seq));
        collections.reverse();
        collections
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
