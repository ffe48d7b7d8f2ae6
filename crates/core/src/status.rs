//! Status labels
//!
//! Every record carries a status. The field is deliberately open text: status
//! updates accept any caller-supplied label, restricted in *who* may set it,
//! never in *what* it says. The finalize operations are the exception: they
//! pin the status to a fixed literal (`completed`, `verified`) and never
//! accept caller text.
//!
//! `StatusLabel` models that split: `new()` validates caller text (non-empty,
//! bounded), while the named constructors produce the designated lifecycle
//! labels.

use crate::limits::MAX_STATUS_LABEL_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Initial status of a freshly uploaded dataset
const ACTIVE: &str = "active";
/// Initial status of a freshly created analysis task
const PENDING: &str = "pending";
/// Initial status of a freshly registered pattern
const UNVERIFIED: &str = "unverified";
/// Status pinned by task result finalization
const COMPLETED: &str = "completed";
/// Status pinned by pattern verification
const VERIFIED: &str = "verified";

/// A record status
///
/// Open text for caller-driven transitions, fixed literals for the lifecycle
/// points the registry itself sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StatusLabel(String);

/// Error when validating a caller-supplied status label
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusLabelError {
    /// Label is empty
    #[error("status label cannot be empty")]
    Empty,
    /// Label exceeds the maximum length
    #[error("status label too long: {length} bytes (max {max})")]
    TooLong {
        /// Actual length in bytes
        length: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl StatusLabel {
    /// Create a status label from caller-supplied text, validating it
    ///
    /// # Errors
    ///
    /// Returns `StatusLabelError` if the label is empty or too long.
    pub fn new(label: impl Into<String>) -> Result<Self, StatusLabelError> {
        let label = label.into();
        if label.is_empty() {
            return Err(StatusLabelError::Empty);
        }
        if label.len() > MAX_STATUS_LABEL_LENGTH {
            return Err(StatusLabelError::TooLong {
                length: label.len(),
                max: MAX_STATUS_LABEL_LENGTH,
            });
        }
        Ok(StatusLabel(label))
    }

    /// The `active` label, initial dataset status
    pub fn active() -> Self {
        StatusLabel(ACTIVE.to_string())
    }

    /// The `pending` label, initial analysis task status
    pub fn pending() -> Self {
        StatusLabel(PENDING.to_string())
    }

    /// The `unverified` label, initial pattern status
    pub fn unverified() -> Self {
        StatusLabel(UNVERIFIED.to_string())
    }

    /// The `completed` label, pinned by `set_result`
    pub fn completed() -> Self {
        StatusLabel(COMPLETED.to_string())
    }

    /// The `verified` label, pinned by `verify`
    pub fn verified() -> Self {
        StatusLabel(VERIFIED.to_string())
    }

    /// Get the label as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StatusLabel {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for StatusLabel {
    type Error = StatusLabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        StatusLabel::new(value)
    }
}

impl TryFrom<&str> for StatusLabel {
    type Error = StatusLabelError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        StatusLabel::new(value)
    }
}

impl From<StatusLabel> for String {
    fn from(label: StatusLabel) -> String {
        label.0
    }
}

// ============================================================================
// Tests
// ============================================================================
