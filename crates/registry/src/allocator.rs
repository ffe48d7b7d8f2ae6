//! Sequential id allocation
//!
//! One allocator per registry kind. Ids form the dense sequence 1, 2, 3, …
//! for the lifetime of the registry; nothing is ever reused. The registries
//! run fully serialized (one façade call at a time, under the kind's lock),
//! so a plain counter is sufficient, no atomics.

use std::num::NonZeroU64;

/// Strictly increasing id counter starting at 1
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: NonZeroU64,
}

impl IdAllocator {
    /// Create an allocator whose first issued id is 1
    pub const fn new() -> Self {
        Self {
            next: NonZeroU64::MIN,
        }
    }

    /// Issue the next id
    ///
    /// Returns one greater than the previous return value. Saturates at
    /// `u64::MAX` (unreachable in practice; ids would collide only after
    /// 2^64 - 1 creations).
    pub fn next_id(&mut self) -> NonZeroU64 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    /// How many ids have been issued so far
    pub const fn issued(&self) -> u64 {
        self.next.get() - 1
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
