//! CMB dataset registry
//!
//! Datasets are uploaded once and live forever; the only mutation is a
//! status overwrite, gated by `OwnerOrCreator`. There is no finalize
//! operation for datasets.

use crate::allocator::IdAllocator;
use crate::policy::AccessPolicy;
use crate::store::RecordStore;
use cmbledger_core::{
    ContentHash, DatasetId, LedgerError, LedgerResult, Principal, RecordKind, StatusLabel,
    Timestamp,
};
use serde::{Deserialize, Serialize};

/// A stored CMB dataset record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Allocator-issued id, never reused
    pub id: DatasetId,
    /// Principal that uploaded the dataset; immutable
    pub uploader: Principal,
    /// Dataset name (uniqueness not enforced)
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Opaque content hash of the dataset payload
    pub data_hash: ContentHash,
    /// Map resolution supplied by the uploader
    pub resolution: u64,
    /// Current status; starts as `active`
    pub status: StatusLabel,
    /// Creation time from the environment clock; immutable
    pub created_at: Timestamp,
}

/// Payload for a dataset upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetUpload {
    /// Dataset name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Opaque content hash
    pub data_hash: ContentHash,
    /// Map resolution
    pub resolution: u64,
}

/// Registry of uploaded CMB datasets
#[derive(Debug, Clone, Default)]
pub struct DatasetRegistry {
    ids: IdAllocator,
    records: RecordStore<DatasetId, DatasetRecord>,
}

impl DatasetRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(),
            records: RecordStore::new(),
        }
    }

    /// Upload a dataset; always succeeds and returns the new id
    ///
    /// The record starts with status `active`.
    pub fn upload(&mut self, upload: DatasetUpload, uploader: Principal, at: Timestamp) -> DatasetId {
        let id = DatasetId::new(self.ids.next_id());
        self.records.insert(
            id,
            DatasetRecord {
                id,
                uploader,
                name: upload.name,
                description: upload.description,
                data_hash: upload.data_hash,
                resolution: upload.resolution,
                status: StatusLabel::active(),
                created_at: at,
            },
        );
        id
    }

    /// Overwrite the dataset's status
    ///
    /// Fails with `InvalidReference` for an unknown id, then with
    /// `Unauthorized` unless the caller is the uploader or the contract
    /// owner. A failed call leaves the record untouched.
    pub fn update_status(
        &mut self,
        id: DatasetId,
        status: StatusLabel,
        caller: &Principal,
    ) -> LedgerResult<()> {
        let record = self
            .records
            .get_mut(id)
            .ok_or_else(|| LedgerError::invalid_reference(RecordKind::Dataset, id.get()))?;
        AccessPolicy::OwnerOrCreator.check(caller, &record.uploader, RecordKind::Dataset, id.get())?;
        record.status = status;
        Ok(())
    }

    /// Look up a dataset record
    pub fn get(&self, id: DatasetId) -> Option<&DatasetRecord> {
        self.records.get(id)
    }

    /// Number of uploaded datasets
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no datasets have been uploaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in id order
    pub fn iter(&self) -> impl Iterator<Item = &DatasetRecord> {
        self.records.iter().map(|(_, r)| r)
    }
}

// ============================================================================
// Tests
// ============================================================================
