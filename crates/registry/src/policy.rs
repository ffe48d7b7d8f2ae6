//! Authorization policy
//!
//! A pure predicate over (caller, creator). Three variants cover all gated
//! operations across the registries:
//!
//! | Variant          | Permits                              | Used by                  |
//! |------------------|--------------------------------------|--------------------------|
//! | `OwnerOrCreator` | creator or the contract owner        | status updates           |
//! | `CreatorOnly`    | the creator alone                    | task result finalization |
//! | `OwnerOnly`      | the contract owner alone             | pattern verification     |
//!
//! `CreatorOnly` is not overridable by the contract owner; the asymmetry
//! versus status updates is part of the contract.
//!
//! Policy checks run strictly after the existence lookup and strictly before
//! any mutation; a denial leaves no observable state change.

use cmbledger_core::{LedgerError, LedgerResult, Principal, RecordKind};

/// Policy variant gating a requested transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessPolicy {
    /// Caller must equal the record's creator or be the contract owner
    OwnerOrCreator,
    /// Caller must equal the record's creator; the contract owner alone
    /// is insufficient
    CreatorOnly,
    /// Caller must be the contract owner
    OwnerOnly,
}

impl AccessPolicy {
    /// Pure permission predicate
    pub fn permits(self, caller: &Principal, creator: &Principal) -> bool {
        match self {
            AccessPolicy::OwnerOrCreator => caller == creator || caller.is_contract_owner(),
            AccessPolicy::CreatorOnly => caller == creator,
            AccessPolicy::OwnerOnly => caller.is_contract_owner(),
        }
    }

    /// Check the predicate, producing `Unauthorized` on denial
    pub fn check(
        self,
        caller: &Principal,
        creator: &Principal,
        kind: RecordKind,
        id: u64,
    ) -> LedgerResult<()> {
        if self.permits(caller, creator) {
            Ok(())
        } else {
            Err(LedgerError::unauthorized(kind, id, caller))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> Principal {
        Principal::identity(name)
    }

    #[test]
    fn test_owner_or_creator() {
        let policy = AccessPolicy::OwnerOrCreator;
        let creator = user("user1");
        assert!(policy.permits(&creator, &creator));
        assert!(policy.permits(&Principal::ContractOwner, &creator));
        assert!(!policy.permits(&user("other"), &creator));
    }

    #[test]
    fn test_creator_only() {
        let policy = AccessPolicy::CreatorOnly;
        let creator = user("user3");
        assert!(policy.permits(&creator, &creator));
        // The contract owner is NOT sufficient here
        assert!(!policy.permits(&Principal::ContractOwner, &creator));
        assert!(!policy.permits(&user("other"), &creator));
    }

    #[test]
    fn test_creator_only_when_creator_is_owner() {
        // A record created by the contract owner: equality admits the owner
        let policy = AccessPolicy::CreatorOnly;
        assert!(policy.permits(&Principal::ContractOwner, &Principal::ContractOwner));
    }

    #[test]
    fn test_owner_only() {
        let policy = AccessPolicy::OwnerOnly;
        let creator = user("user2");
        assert!(policy.permits(&Principal::ContractOwner, &creator));
        // Not even the creator may pass
        assert!(!policy.permits(&creator, &creator));
        assert!(!policy.permits(&user("unauthorized_user"), &creator));
    }

    #[test]
    fn test_check_produces_unauthorized() {
        let err = AccessPolicy::OwnerOnly
            .check(&user("user2"), &user("user2"), RecordKind::Pattern, 3)
            .unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_check_passes() {
        assert!(AccessPolicy::OwnerOrCreator
            .check(&user("user1"), &user("user1"), RecordKind::Dataset, 1)
            .is_ok());
    }
}
