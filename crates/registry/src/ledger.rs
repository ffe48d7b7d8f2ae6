//! Ledger façade
//!
//! One `Ledger` owns all three registries and presents the full external
//! call surface. The inner registries are plain serialized state machines;
//! the ledger adds the mutual-exclusion boundary required when callers are
//! genuinely concurrent: one `parking_lot::RwLock` per registry kind, so
//! every invocation runs lookup, authorization check, and mutation to
//! completion before the next one touches the same kind.
//!
//! Timestamps come from the injected `Clock`; production uses `SystemClock`,
//! tests may pin a fixed clock.

use crate::dataset::{DatasetRecord, DatasetRegistry, DatasetUpload};
use crate::pattern::{PatternRecord, PatternRegistry, PatternSpec};
use crate::task::{AnalysisTaskRecord, AnalysisTaskRegistry, TaskSpec};
use cmbledger_core::{
    Clock, ContentHash, DatasetId, LedgerResult, PatternId, Principal, StatusLabel, SystemClock,
    TaskId,
};
use parking_lot::RwLock;
use tracing::{debug, info, warn};

/// Process-wide façade over the three record registries
pub struct Ledger {
    datasets: RwLock<DatasetRegistry>,
    tasks: RwLock<AnalysisTaskRegistry>,
    patterns: RwLock<PatternRegistry>,
    clock: Box<dyn Clock>,
}

impl Ledger {
    /// Create a ledger with empty registries and the system clock
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Create a ledger with an injected clock
    ///
    /// The clock supplies every record's creation timestamp; the registries
    /// never read time themselves.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        Self {
            datasets: RwLock::new(DatasetRegistry::new()),
            tasks: RwLock::new(AnalysisTaskRegistry::new()),
            patterns: RwLock::new(PatternRegistry::new()),
            clock,
        }
    }

    // ========================================================================
    // Dataset registry
    // ========================================================================

    /// Upload a CMB dataset; returns the new id
    pub fn upload_dataset(&self, upload: DatasetUpload, uploader: Principal) -> DatasetId {
        let at = self.clock.now();
        let id = self.datasets.write().upload(upload, uploader.clone(), at);
        info!(
            target: "cmbledger::dataset",
            id = id.get(),
            uploader = %uploader,
            "dataset uploaded"
        );
        id
    }

    /// Overwrite a dataset's status (uploader or contract owner)
    pub fn update_dataset_status(
        &self,
        id: DatasetId,
        status: StatusLabel,
        caller: &Principal,
    ) -> LedgerResult<()> {
        let result = self.datasets.write().update_status(id, status, caller);
        match &result {
            Ok(()) => debug!(target: "cmbledger::dataset", id = id.get(), "status updated"),
            Err(e) => warn!(target: "cmbledger::dataset", id = id.get(), error = %e, "status update rejected"),
        }
        result
    }

    /// Look up a dataset record (cloned out of the lock)
    pub fn dataset(&self, id: DatasetId) -> Option<DatasetRecord> {
        self.datasets.read().get(id).cloned()
    }

    /// Number of uploaded datasets
    pub fn dataset_count(&self) -> usize {
        self.datasets.read().len()
    }

    // ========================================================================
    // Analysis task registry
    // ========================================================================

    /// Create an analysis task; returns the new id
    pub fn create_analysis_task(&self, spec: TaskSpec, creator: Principal) -> TaskId {
        let at = self.clock.now();
        let id = self.tasks.write().create(spec, creator.clone(), at);
        info!(
            target: "cmbledger::task",
            id = id.get(),
            creator = %creator,
            "analysis task created"
        );
        id
    }

    /// Overwrite a task's status (creator or contract owner)
    pub fn update_task_status(
        &self,
        id: TaskId,
        status: StatusLabel,
        caller: &Principal,
    ) -> LedgerResult<()> {
        let result = self.tasks.write().update_status(id, status, caller);
        match &result {
            Ok(()) => debug!(target: "cmbledger::task", id = id.get(), "status updated"),
            Err(e) => warn!(target: "cmbledger::task", id = id.get(), error = %e, "status update rejected"),
        }
        result
    }

    /// Record a task result and pin its status to `completed` (creator only)
    pub fn set_task_result(
        &self,
        id: TaskId,
        result_hash: ContentHash,
        caller: &Principal,
    ) -> LedgerResult<()> {
        let result = self.tasks.write().set_result(id, result_hash, caller);
        match &result {
            Ok(()) => info!(target: "cmbledger::task", id = id.get(), "result recorded"),
            Err(e) => warn!(target: "cmbledger::task", id = id.get(), error = %e, "result rejected"),
        }
        result
    }

    /// Look up a task record (cloned out of the lock)
    pub fn analysis_task(&self, id: TaskId) -> Option<AnalysisTaskRecord> {
        self.tasks.read().get(id).cloned()
    }

    /// Number of created tasks
    pub fn task_count(&self) -> usize {
        self.tasks.read().len()
    }

    // ========================================================================
    // Pattern registry
    // ========================================================================

    /// Register a discovered pattern; returns the new id
    pub fn register_pattern(&self, spec: PatternSpec, discoverer: Principal) -> PatternId {
        let at = self.clock.now();
        let id = self.patterns.write().register(spec, discoverer.clone(), at);
        info!(
            target: "cmbledger::pattern",
            id = id.get(),
            discoverer = %discoverer,
            "pattern registered"
        );
        id
    }

    /// Pin a pattern's status to `verified` (contract owner only)
    pub fn verify_pattern(&self, id: PatternId, caller: &Principal) -> LedgerResult<()> {
        let result = self.patterns.write().verify(id, caller);
        match &result {
            Ok(()) => info!(target: "cmbledger::pattern", id = id.get(), "pattern verified"),
            Err(e) => warn!(target: "cmbledger::pattern", id = id.get(), error = %e, "verification rejected"),
        }
        result
    }

    /// Look up a pattern record (cloned out of the lock)
    pub fn pattern(&self, id: PatternId) -> Option<PatternRecord> {
        self.patterns.read().get(id).cloned()
    }

    /// Number of registered patterns
    pub fn pattern_count(&self) -> usize {
        self.patterns.read().len()
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cmbledger_core::{AlgorithmId, Timestamp};

    /// Clock pinned to a fixed instant
    struct FixedClock(Timestamp);

    impl Clock for FixedClock {
        fn now(&self) -> Timestamp {
            self.0
        }
    }

    fn upload() -> DatasetUpload {
        DatasetUpload {
            name: "Planck 2018".to_string(),
            description: "Planck 2018 CMB data".to_string(),
            data_hash: ContentHash::from("0xabcdef1234567890"),
            resolution: 2048,
        }
    }

    fn task_spec() -> TaskSpec {
        TaskSpec {
            dataset_id: DatasetId::from_raw(1).unwrap(),
            algorithm_id: AlgorithmId::from_raw(2).unwrap(),
            name: "Planck Analysis".to_string(),
            description: "Analyze Planck data for cold spots".to_string(),
        }
    }

    fn pattern_spec() -> PatternSpec {
        PatternSpec {
            task_id: TaskId::from_raw(1).unwrap(),
            name: "Axis of Evil".to_string(),
            description: "Alignment of CMB multipoles".to_string(),
            pattern_hash: ContentHash::from("0xabcdef1234567890"),
            significance: 0.99,
        }
    }

    #[test]
    fn test_ledger_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Ledger>();
    }

    #[test]
    fn test_registries_count_independently() {
        let ledger = Ledger::new();
        ledger.upload_dataset(upload(), Principal::identity("user1"));
        ledger.upload_dataset(upload(), Principal::identity("user1"));
        ledger.create_analysis_task(task_spec(), Principal::identity("user2"));

        assert_eq!(ledger.dataset_count(), 2);
        assert_eq!(ledger.task_count(), 1);
        assert_eq!(ledger.pattern_count(), 0);
    }

    #[test]
    fn test_injected_clock_stamps_records() {
        let ledger = Ledger::with_clock(Box::new(FixedClock(Timestamp::from_micros(777))));
        let id = ledger.upload_dataset(upload(), Principal::identity("user1"));
        assert_eq!(
            ledger.dataset(id).unwrap().created_at,
            Timestamp::from_micros(777)
        );
    }

    #[test]
    fn test_full_flow_across_kinds() {
        let ledger = Ledger::new();
        let uploader = Principal::identity("user1");
        let analyst = Principal::identity("user2");

        let dataset_id = ledger.upload_dataset(upload(), uploader);
        let task_id = ledger.create_analysis_task(
            TaskSpec {
                dataset_id,
                algorithm_id: AlgorithmId::from_raw(1).unwrap(),
                name: "Planck Analysis".to_string(),
                description: String::new(),
            },
            analyst.clone(),
        );
        ledger
            .set_task_result(task_id, ContentHash::from("0x1234"), &analyst)
            .unwrap();

        let pattern_id = ledger.register_pattern(
            PatternSpec {
                task_id,
                ..pattern_spec()
            },
            analyst,
        );
        ledger
            .verify_pattern(pattern_id, &Principal::ContractOwner)
            .unwrap();

        assert_eq!(
            ledger.analysis_task(task_id).unwrap().status,
            StatusLabel::completed()
        );
        assert_eq!(
            ledger.pattern(pattern_id).unwrap().status,
            StatusLabel::verified()
        );
    }

    #[test]
    fn test_concurrent_creations_stay_dense() {
        use std::sync::Arc;

        let ledger = Arc::new(Ledger::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let ledger = Arc::clone(&ledger);
            handles.push(std::thread::spawn(move || {
                for _ in 0..25 {
                    ledger.upload_dataset(upload(), Principal::identity("worker"));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ledger.dataset_count(), 100);
        // Every id in 1..=100 was issued exactly once
        for raw in 1..=100u64 {
            assert!(ledger.dataset(DatasetId::from_raw(raw).unwrap()).is_some());
        }
    }
}
