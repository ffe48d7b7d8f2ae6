//! Caller principal model
//!
//! The source contract compared caller strings against a `'CONTRACT_OWNER'`
//! sentinel. Here the distinction is a closed enum: a caller is either the
//! single distinguished contract owner or an ordinary identity string. The
//! identity string itself is pre-verified by the calling environment; the
//! registry never authenticates it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A calling principal
///
/// Equality is the authorization boundary: `OwnerOrCreator` and `CreatorOnly`
/// policies compare the caller against the record's creator, and
/// `OwnerOnly` matches the `ContractOwner` variant directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Principal {
    /// The single distinguished principal with elevated authorization
    ContractOwner,
    /// An ordinary pre-verified identity
    Identity(String),
}

impl Principal {
    /// Create an ordinary identity principal
    pub fn identity(id: impl Into<String>) -> Self {
        Principal::Identity(id.into())
    }

    /// Whether this principal is the contract owner
    #[inline]
    pub const fn is_contract_owner(&self) -> bool {
        matches!(self, Principal::ContractOwner)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Principal::ContractOwner => f.write_str("contract-owner"),
            Principal::Identity(id) => f.write_str(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        assert_eq!(Principal::identity("user1"), Principal::identity("user1"));
        assert_ne!(Principal::identity("user1"), Principal::identity("user2"));
        assert_ne!(Principal::identity("user1"), Principal::ContractOwner);
    }

    #[test]
    fn test_is_contract_owner() {
        assert!(Principal::ContractOwner.is_contract_owner());
        assert!(!Principal::identity("user1").is_contract_owner());
    }

    #[test]
    fn test_display() {
        assert_eq!(Principal::ContractOwner.to_string(), "contract-owner");
        assert_eq!(Principal::identity("user1").to_string(), "user1");
    }

    #[test]
    fn test_serde_round_trip() {
        let p = Principal::identity("user2");
        let json = serde_json::to_string(&p).unwrap();
        let restored: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, p);
    }
}
