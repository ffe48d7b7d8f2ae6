//! Monotonic record registries with authorization-gated transitions
//!
//! Three parallel registries (CMB datasets, analysis tasks, discovered
//! patterns) built from the same three primitives instantiated once per
//! kind:
//! - [`IdAllocator`]: strictly increasing ids starting at 1
//! - [`RecordStore`]: ordered id → record map, mutated in place
//! - [`AccessPolicy`]: pure caller/creator predicate
//!
//! The [`Ledger`] composes the three registries behind one lock per kind and
//! is the intended entry point. Every mutation follows the same shape:
//! lookup (fail `InvalidReference`) → policy check (fail `Unauthorized`) →
//! write → success. Checks strictly precede writes, so failed calls never
//! leave partial state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod allocator;
pub mod dataset;
pub mod ledger;
pub mod pattern;
pub mod policy;
pub mod store;
pub mod task;

pub use allocator::IdAllocator;
pub use dataset::{DatasetRecord, DatasetRegistry, DatasetUpload};
pub use ledger::Ledger;
pub use pattern::{PatternRecord, PatternRegistry, PatternSpec};
pub use policy::AccessPolicy;
pub use store::RecordStore;
pub use task::{AnalysisTaskRecord, AnalysisTaskRegistry, TaskSpec};

// Re-export the core vocabulary so embedders need only this crate
pub use cmbledger_core::{
    AlgorithmId, Clock, ContentHash, DatasetId, LedgerError, LedgerResult, PatternId, Principal,
    RecordKind, StatusLabel, StatusLabelError, SystemClock, TaskId, Timestamp,
    MAX_STATUS_LABEL_LENGTH,
};
