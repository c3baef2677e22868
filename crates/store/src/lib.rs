//! In-memory entity store, versioning engine, and query layer.
//!
//! All state lives for the process lifetime only; there is no persistence.
//! The [`Store`] is an explicit object with no global instance: construct
//! one at startup, wrap it in an `Arc`, and thread it through whatever
//! needs it.

pub mod models;
pub mod query;
pub mod store;
pub mod versioning;

pub use store::Store;
