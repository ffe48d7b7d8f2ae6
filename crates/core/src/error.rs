//! Error types for registry operations
//!
//! Two failure kinds cover every mutation: the referenced record does not
//! exist, or the caller is not permitted to perform the transition. Checks
//! strictly precede writes, so neither error ever leaves partial state
//! behind. We use `thiserror` for the `Display` and `Error` implementations.

use crate::principal::Principal;
use crate::types::RecordKind;
use thiserror::Error;

/// Result type alias for registry operations
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

/// Registry operation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The supplied id does not exist in the target registry kind
    ///
    /// Raised before any authorization check.
    #[error("no {kind} record with id {id}")]
    InvalidReference {
        /// Registry kind that was addressed
        kind: RecordKind,
        /// The unknown raw id
        id: u64,
    },

    /// The caller fails the authorization policy for the operation
    ///
    /// Raised after existence is confirmed, before any mutation.
    #[error("{caller} is not authorized to modify {kind} {id}")]
    Unauthorized {
        /// Registry kind that was addressed
        kind: RecordKind,
        /// Raw id of the record the caller addressed
        id: u64,
        /// The denied principal
        caller: Principal,
    },
}

impl LedgerError {
    /// Build an `InvalidReference` error
    pub fn invalid_reference(kind: RecordKind, id: u64) -> Self {
        LedgerError::InvalidReference { kind, id }
    }

    /// Build an `Unauthorized` error
    pub fn unauthorized(kind: RecordKind, id: u64, caller: &Principal) -> Self {
        LedgerError::Unauthorized {
            kind,
            id,
            caller: caller.clone(),
        }
    }

    /// Whether this is an `InvalidReference`
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, LedgerError::InvalidReference { .. })
    }

    /// Whether this is an `Unauthorized`
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, LedgerError::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reference_display() {
        let err = LedgerError::invalid_reference(RecordKind::Dataset, 99);
        assert_eq!(err.to_string(), "no dataset record with id 99");
    }

    #[test]
    fn test_unauthorized_display() {
        let err = LedgerError::unauthorized(
            RecordKind::Pattern,
            3,
            &Principal::identity("unauthorized_user"),
        );
        let msg = err.to_string();
        assert!(msg.contains("unauthorized_user"));
        assert!(msg.contains("pattern 3"));
    }

    #[test]
    fn test_predicates() {
        let missing = LedgerError::invalid_reference(RecordKind::AnalysisTask, 1);
        assert!(missing.is_invalid_reference());
        assert!(!missing.is_unauthorized());

        let denied =
            LedgerError::unauthorized(RecordKind::AnalysisTask, 1, &Principal::ContractOwner);
        assert!(denied.is_unauthorized());
        assert!(!denied.is_invalid_reference());
    }

    #[test]
    fn test_result_alias() {
        fn fails() -> LedgerResult<()> {
            Err(LedgerError::invalid_reference(RecordKind::Pattern, 5))
        }
        assert!(fails().is_err());
    }
}
