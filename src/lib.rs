//! cmbledger - authorization-gated record registries for CMB analysis
//!
//! Three parallel registries track the lifecycle of a CMB analysis pipeline:
//! uploaded datasets, analysis tasks run against them, and patterns
//! discovered by those tasks. Each registry issues dense sequential ids and
//! gates every state transition behind a small authorization policy.
//!
//! # Quick Start
//!
//! ```
//! use cmbledger::{ContentHash, DatasetUpload, Ledger, Principal, StatusLabel};
//!
//! let ledger = Ledger::new();
//! let uploader = Principal::identity("user1");
//!
//! let id = ledger.upload_dataset(
//!     DatasetUpload {
//!         name: "WMAP 7-year".to_string(),
//!         description: "WMAP 7-year CMB data".to_string(),
//!         data_hash: ContentHash::from("0x1234567890abcdef"),
//!         resolution: 1024,
//!     },
//!     uploader.clone(),
//! );
//!
//! ledger
//!     .update_dataset_status(id, StatusLabel::new("archived").unwrap(), &uploader)
//!     .unwrap();
//! ```
//!
//! # Architecture
//!
//! The [`Ledger`] façade owns one registry per kind behind one lock per
//! kind. Internal mechanism (id allocation, record storage, policy checks)
//! is exposed through `cmbledger-registry` for embedders that want to hold
//! a single registry directly.

// Re-export the public API from cmbledger-registry
pub use cmbledger_registry::*;
