//! Creation timestamps and the clock seam
//!
//! Timestamps are opaque creation-time markers set once per record and never
//! mutated. The registry does not generate time itself: the `Ledger` façade
//! is handed a `Clock`, and tests may inject a fixed one.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Microsecond-precision timestamp
///
/// Microseconds since the Unix epoch. Comparable and orderable; no
/// arithmetic surface beyond what the registries need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp(0);

    /// Current moment from the system clock
    ///
    /// Returns epoch if the system clock reads before 1970 (clock skew).
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(duration.as_micros() as u64)
    }

    /// Create a timestamp from microseconds since epoch
    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        Timestamp(micros)
    }

    /// Get microseconds since epoch
    #[inline]
    pub const fn as_micros(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.0)
    }
}

/// Source of creation timestamps
///
/// The environment owns time. Production uses `SystemClock`; tests inject a
/// fixed clock for deterministic records.
pub trait Clock: Send + Sync {
    /// Current timestamp
    fn now(&self) -> Timestamp;
}

/// Clock backed by `SystemTime`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_is_after_epoch() {
        assert!(Timestamp::now() > Timestamp::EPOCH);
    }

    #[test]
    fn test_from_as_micros() {
        let ts = Timestamp::from_micros(1_000_000);
        assert_eq!(ts.as_micros(), 1_000_000);
    }

    #[test]
    fn test_ordering() {
        assert!(Timestamp::from_micros(1) < Timestamp::from_micros(2));
    }

    #[test]
    fn test_system_clock() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(a <= b);
    }

    #[test]
    fn test_display() {
        assert_eq!(Timestamp::from_micros(42).to_string(), "42us");
    }

    #[test]
    fn test_serde_transparent() {
        let ts = Timestamp::from_micros(1234);
        let json = serde_json::to_string(&ts).unwrap();
        assert_eq!(json, "1234");
        let restored: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ts);
    }
}
