//! Core types for the cmbledger record registries
//!
//! This crate defines the foundational vocabulary shared by all three
//! registries:
//! - Id newtypes: DatasetId, TaskId, PatternId, AlgorithmId
//! - RecordKind: discriminates the three registry kinds
//! - ContentHash: opaque content identifier (never interpreted)
//! - Principal: closed caller model (contract owner vs ordinary identity)
//! - StatusLabel: validated open-text status plus the fixed lifecycle labels
//! - Timestamp and Clock: the environment-supplied time seam
//! - LedgerError: the two operation failure kinds

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod limits;
pub mod principal;
pub mod status;
pub mod timestamp;
pub mod types;

pub use error::{LedgerError, LedgerResult};
pub use limits::MAX_STATUS_LABEL_LENGTH;
pub use principal::Principal;
pub use status::{StatusLabel, StatusLabelError};
pub use timestamp::{Clock, SystemClock, Timestamp};
pub use types::{AlgorithmId, ContentHash, DatasetId, PatternId, RecordKind, TaskId};
