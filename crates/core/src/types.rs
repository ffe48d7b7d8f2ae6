//! Identifier and content types
//!
//! Every record id is a `NonZeroU64` newtype: ids are allocator-issued,
//! 1-based, and strictly increasing within a registry kind. The newtypes keep
//! a dataset id from ever being passed where a task id is expected, which
//! matters because cross-registry references are weak (recorded, never
//! validated).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU64;

/// Unique identifier for an uploaded CMB dataset
///
/// Dataset ids are issued sequentially starting at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetId(NonZeroU64);

/// Unique identifier for an analysis task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(NonZeroU64);

/// Unique identifier for a discovered pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatternId(NonZeroU64);

/// Weak reference to an analysis algorithm
///
/// There is no algorithm registry; this id exists purely for traceability
/// and is never checked against any store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlgorithmId(NonZeroU64);

macro_rules! impl_record_id {
    ($name:ident) => {
        impl $name {
            /// Create an id from a non-zero value
            #[must_use]
            pub const fn new(id: NonZeroU64) -> Self {
                Self(id)
            }

            /// Create an id from a raw value, returning `None` for zero
            #[must_use]
            pub fn from_raw(raw: u64) -> Option<Self> {
                NonZeroU64::new(raw).map(Self)
            }

            /// Get the raw value (always >= 1)
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0.get()
            }

            /// Get the inner non-zero value
            #[must_use]
            pub const fn inner(self) -> NonZeroU64 {
                self.0
            }
        }

        impl From<NonZeroU64> for $name {
            fn from(id: NonZeroU64) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.get().fmt(f)
            }
        }
    };
}

impl_record_id!(DatasetId);
impl_record_id!(TaskId);
impl_record_id!(PatternId);
impl_record_id!(AlgorithmId);

/// Discriminates the three registry kinds
///
/// Used in error reporting and log targets; never stored in records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// CMB dataset registry
    Dataset,
    /// Analysis task registry
    AnalysisTask,
    /// Discovered pattern registry
    Pattern,
}

impl RecordKind {
    /// Lowercase human-readable kind name
    pub const fn as_str(self) -> &'static str {
        match self {
            RecordKind::Dataset => "dataset",
            RecordKind::AnalysisTask => "analysis task",
            RecordKind::Pattern => "pattern",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque content identifier
///
/// Carries `dataHash`, `resultHash`, and `patternHash` values. The registry
/// never interprets the contents; equality and display are the only
/// operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Wrap an opaque hash string
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Get the hash as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for ContentHash {
    fn from(hash: &str) -> Self {
        Self(hash.to_string())
    }
}

impl From<String> for ContentHash {
    fn from(hash: String) -> Self {
        Self(hash)
    }
}

impl AsRef<str> for ContentHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(v: u64) -> NonZeroU64 {
        NonZeroU64::new(v).unwrap()
    }

    #[test]
    fn test_dataset_id_from_raw() {
        assert_eq!(DatasetId::from_raw(1).unwrap().get(), 1);
        assert_eq!(DatasetId::from_raw(0), None);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", TaskId::new(nz(42))), "42");
        assert_eq!(format!("{}", PatternId::new(nz(7))), "7");
    }

    #[test]
    fn test_ids_are_distinct_types() {
        // Compile-time property; just exercise the constructors
        let d = DatasetId::new(nz(1));
        let t = TaskId::new(nz(1));
        assert_eq!(d.get(), t.get());
    }

    #[test]
    fn test_id_ordering() {
        assert!(DatasetId::from_raw(1).unwrap() < DatasetId::from_raw(2).unwrap());
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = DatasetId::from_raw(3).unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "3");
        let restored: DatasetId = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, id);
    }

    #[test]
    fn test_id_deserialize_rejects_zero() {
        let result: Result<TaskId, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test]
    fn test_record_kind_display() {
        assert_eq!(RecordKind::Dataset.to_string(), "dataset");
        assert_eq!(RecordKind::AnalysisTask.to_string(), "analysis task");
        assert_eq!(RecordKind::Pattern.to_string(), "pattern");
    }

    #[test]
    fn test_content_hash_opaque() {
        let hash = ContentHash::from("0x1234567890abcdef");
        assert_eq!(hash.as_str(), "0x1234567890abcdef");
        assert_eq!(hash.to_string(), "0x1234567890abcdef");
    }

    #[test]
    fn test_content_hash_serde() {
        let hash = ContentHash::from("0xabcdef1234567890");
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(json, "\"0xabcdef1234567890\"");
        let restored: ContentHash = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, hash);
    }
}
