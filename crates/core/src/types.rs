//! Identity and clock primitives shared by every layer.

/// All entity identifiers are opaque UUID strings.
pub type Id = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Generate a fresh entity id: a hyphenated lowercase UUID v4.
///
/// Uniqueness is probabilistic and needs no coordination; ids are never
/// reused or recycled within a store's lifetime.
pub fn new_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}

/// Current UTC instant, used for `created_at` / `updated_at` stamping.
///
/// Wall-clock resolution is not relied on for ordering; the store keeps a
/// separate insertion sequence for that.
pub fn now() -> Timestamp {
    chrono::Utc::now()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- new_id --

    #[test]
    fn ids_are_unique() {
        let a = new_id();
        let b = new_id();
        assert_ne!(a, b);
    }

    #[test]
    fn id_is_hyphenated_uuid() {
        let id = new_id();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
    }

    // -- now --

    #[test]
    fn now_is_non_decreasing() {
        let a = now();
        let b = now();
        assert!(a <= b);
    }
}
