//! Discovered pattern registry
//!
//! Patterns reference the task that surfaced them (weak reference) and carry
//! a numeric significance score. The only mutation is verification, gated by
//! `OwnerOnly`: not even the discoverer may verify their own pattern. There
//! is no generic status update for patterns.

use crate::allocator::IdAllocator;
use crate::policy::AccessPolicy;
use crate::store::RecordStore;
use cmbledger_core::{
    ContentHash, LedgerError, LedgerResult, PatternId, Principal, RecordKind, StatusLabel, TaskId,
    Timestamp,
};
use serde::{Deserialize, Serialize};

/// A stored pattern record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRecord {
    /// Allocator-issued id, never reused
    pub id: PatternId,
    /// Principal that discovered the pattern; immutable
    pub discoverer: Principal,
    /// Weak reference to the task that produced the pattern
    pub task_id: TaskId,
    /// Pattern name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Opaque content hash of the pattern data
    pub pattern_hash: ContentHash,
    /// Significance score supplied by the discoverer (e.g. 0.95)
    pub significance: f64,
    /// Current status; starts as `unverified`
    pub status: StatusLabel,
    /// Creation time from the environment clock; immutable
    pub created_at: Timestamp,
}

/// Payload for pattern registration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternSpec {
    /// Task that produced the pattern (weak reference)
    pub task_id: TaskId,
    /// Pattern name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Opaque content hash
    pub pattern_hash: ContentHash,
    /// Significance score
    pub significance: f64,
}

/// Registry of discovered patterns
#[derive(Debug, Clone, Default)]
pub struct PatternRegistry {
    ids: IdAllocator,
    records: RecordStore<PatternId, PatternRecord>,
}

impl PatternRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            records: RecordStore::new(),
        }
    }

    /// Register a pattern; always succeeds and returns the new id
    ///
    /// The record starts with status `unverified`.
    pub fn register(&mut self, spec: PatternSpec, discoverer: Principal, at: Timestamp) -> PatternId {
        let id = PatternId::new(self.ids.next_id());
        self.records.insert(
            id,
            PatternRecord {
                id,
                discoverer,
                task_id: spec.task_id,
                name: spec.name,
                description: spec.description,
                pattern_hash: spec.pattern_hash,
                significance: spec.significance,
                status: StatusLabel::unverified(),
                created_at: at,
            },
        );
        id
    }

    /// Pin the pattern's status to `verified`
    ///
    /// Gated by `OwnerOnly`. Existence is checked before authorization, so
    /// an unauthorized caller addressing an unknown id sees
    /// `InvalidReference`. Repeat verification succeeds; it is not guarded
    /// as a no-op.
    pub fn verify(&mut self, id: PatternId, caller: &Principal) -> LedgerResult<()> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| LedgerError::invalid_reference(RecordKind::Pattern, id.get()))?;
        AccessPolicy::OwnerOnly.check(caller, &record.discoverer, RecordKind::Pattern, id.get())?;
        record.status = StatusLabel::verified();
        Ok(())
    }

    /// Look up a pattern record
    pub fn get(&self, id: PatternId) -> Option<&PatternRecord> {
        self.records.get(id)
    }

    /// Number of registered patterns
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no patterns have been registered
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in id order
    pub fn iter(&self) -> impl Iterator<Item = &PatternRecord> {
        self.records.iter().map(|(_, r)| r)
    }
}

// ============================================================================
// Tests
// ============================================================================
