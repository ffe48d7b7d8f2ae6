//! Ordered record storage
//!
//! A `RecordStore` maps ids to records. The map is a `BTreeMap`, so
//! iteration order is id order, which is also insertion order: ids are
//! allocator-issued and strictly increasing. Records are mutated in place
//! and never deleted.

use std::collections::BTreeMap;

/// Id-to-record map for one registry kind
///
/// `K` is the kind's id newtype; `R` the record type. The store itself is
/// policy-agnostic; existence and authorization failures are raised by the
/// owning registry.
#[derive(Debug, Clone)]
pub struct RecordStore<K: Ord + Copy, R> {
    records: BTreeMap<K, R>,
}

// A derived Default would bound K and R; the empty map needs neither
impl<K: Ord + Copy, R> Default for RecordStore<K, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Copy, R> RecordStore<K, R> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
        }
    }

    /// Insert a new record under an allocator-issued id
    ///
    /// Ids come from `IdAllocator`, so an insert can never land on an
    /// occupied slot; that invariant is debug-asserted rather than handled.
    pub fn insert(&mut self, id: K, record: R) {
        let previous = self.records.insert(id, record);
        debug_assert!(previous.is_none(), "allocator-issued ids never collide");
    }

    /// Get a record by id
    pub fn get(&self, id: K) -> Option<&R> {
        self.records.get(&id)
    }

    /// Get a mutable record by id
    ///
    /// Returns `None` for an absent id; the surrounding operation turns that
    /// into `InvalidReference` before any authorization check runs.
    pub fn get_mut(&mut self, id: K) -> Option<&mut R> {
        self.records.get_mut(&id)
    }

    /// Apply a mutator to the record, if present
    pub fn update<F, T>(&mut self, id: K, f: F) -> Option<T>
    where
        F: FnOnce(&mut R) -> T,
    {
        self.records.get_mut(&id).map(f)
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in id order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &R)> {
        self.records.iter()
    }
}
