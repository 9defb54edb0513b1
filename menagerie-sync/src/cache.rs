//! Collection cache.
//!
//! Holds the last-known-good sequence of records for each kind, in the
//! order the service returned them. Entries are replaced wholesale by a
//! fetch and never merged incrementally.

use menagerie_types::{Record, RecordId, ResourceKind};
use std::collections::HashMap;

/// Local snapshot of every collection.
#[derive(Debug, Clone, Default)]
pub struct CollectionCache {
    entries: HashMap<ResourceKind, Vec<Record>>,
}

impl CollectionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the cached sequence for `kind`.
    pub fn replace(&mut self, kind: ResourceKind, records: Vec<Record>) {
        debug_assert!(
            records.iter().all(|r| r.kind() == kind),
            "records of another kind cached under {kind}"
        );
        self.entries.insert(kind, records);
    }

    /// Returns the cached sequence for `kind`, empty if never fetched.
    pub fn read(&self, kind: ResourceKind) -> &[Record] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Finds a cached record by id.
    pub fn find(&self, kind: ResourceKind, id: &RecordId) -> Option<&Record> {
        self.read(kind).iter().find(|r| r.id() == id)
    }

    /// Returns true if nothing is cached for `kind`.
    pub fn is_empty(&self, kind: ResourceKind) -> bool {
        self.read(kind).is_empty()
    }

    /// Returns true if `kind` was populated by at least one fetch.
    pub fn has_fetched(&self, kind: ResourceKind) -> bool {
        self.entries.contains_key(&kind)
    }
}
