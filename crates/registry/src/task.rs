//! Analysis task registry
//!
//! Tasks reference a dataset and an algorithm by id. Both references are
//! weak: recorded for traceability, never checked against any store. Status
//! updates are gated by `OwnerOrCreator`; result finalization by
//! `CreatorOnly`; the contract owner alone cannot set a result.

use crate::allocator::IdAllocator;
use crate::policy::AccessPolicy;
use crate::store::RecordStore;
use cmbledger_core::{
    AlgorithmId, ContentHash, DatasetId, LedgerError, LedgerResult, Principal, RecordKind,
    StatusLabel, TaskId, Timestamp,
};
use serde::{Deserialize, Serialize};

/// A stored analysis task record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisTaskRecord {
    /// Allocator-issued id, never reused
    pub id: TaskId,
    /// Principal that created the task; immutable
    pub creator: Principal,
    /// Weak reference to the analyzed dataset
    pub dataset_id: DatasetId,
    /// Weak reference to the analysis algorithm
    pub algorithm_id: AlgorithmId,
    /// Task name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Current status; starts as `pending`
    pub status: StatusLabel,
    /// Result hash; `None` until `set_result` is called
    pub result_hash: Option<ContentHash>,
    /// Creation time from the environment clock; immutable
    pub created_at: Timestamp,
}

/// Payload for task creation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSpec {
    /// Dataset the task analyzes (weak reference)
    pub dataset_id: DatasetId,
    /// Algorithm the task applies (weak reference)
    pub algorithm_id: AlgorithmId,
    /// Task name
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// Registry of analysis tasks
#[derive(Debug, Clone, Default)]
pub struct AnalysisTaskRegistry {
    ids: IdAllocator,
    records: RecordStore<TaskId, AnalysisTaskRecord>,
}

impl AnalysisTaskRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            records: RecordStore::new(),
        }
    }

    /// Create a task; always succeeds and returns the new id
    ///
    /// The record starts with status `pending` and no result hash.
    pub fn create(&mut self, spec: TaskSpec, creator: Principal, at: Timestamp) -> TaskId {
        let id = TaskId::new(self.ids.next_id());
        self.records.insert(
            id,
            AnalysisTaskRecord {
                id,
                creator,
                dataset_id: spec.dataset_id,
                algorithm_id: spec.algorithm_id,
                name: spec.name,
                description: spec.description,
                status: StatusLabel::pending(),
                result_hash: None,
                created_at: at,
            },
        );
        id
    }

    /// Overwrite the task's status
    ///
    /// Gated by `OwnerOrCreator`. Any label passes; only the *who* is
    /// restricted.
    pub fn update_status(
        &mut self,
        id: TaskId,
        status: StatusLabel,
        caller: &Principal,
    ) -> LedgerResult<()> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| LedgerError::invalid_reference(RecordKind::AnalysisTask, id.get()))?;
        AccessPolicy::OwnerOrCreator.check(
            caller,
            &record.creator,
            RecordKind::AnalysisTask,
            id.get(),
        )?;
        record.status = status;
        Ok(())
    }

    /// Record the task result and pin status to `completed`
    ///
    /// Gated by `CreatorOnly`. Repeat calls by the creator succeed and
    /// overwrite both the status and the stored hash; there is no
    /// re-finalization guard.
    pub fn set_result(
        &mut self,
        id: TaskId,
        result_hash: ContentHash,
        caller: &Principal,
    ) -> LedgerResult<()> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| LedgerError::invalid_reference(RecordKind::AnalysisTask, id.get()))?;
        AccessPolicy::CreatorOnly.check(
            caller,
            &record.creator,
            RecordKind::AnalysisTask,
            id.get(),
        )?;
        record.status = StatusLabel::completed();
        record.result_hash = Some(result_hash);
        Ok(())
    }

    /// Look up a task record
    pub fn get(&self, id: TaskId) -> Option<&AnalysisTaskRecord> {
        self.records.get(id)
    }

    /// Number of created tasks
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no tasks have been created
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in id order
    pub fn iter(&self) -> impl Iterator<Item = &AnalysisTaskRecord> {
        self.records.iter().map(|(_, r)| r)
    }
}

// ============================================================================
// Tests
// ============================================================================
