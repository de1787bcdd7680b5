//! Time-derived lead identifiers.
//!
//! A lead id is the number of milliseconds since the Unix epoch at which the
//! lead was accepted. Ids are never stored, so uniqueness only has to hold
//! within one running process: the generator bumps an id forward by one
//! millisecond when two leads arrive in the same millisecond.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identifier returned to the submitter. Serialized as a decimal string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeadId(u64);

impl LeadId {
    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LeadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for LeadId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Issues strictly increasing, time-derived lead ids. Lock-free.
#[derive(Debug, Default)]
pub struct LeadIdGenerator {
    last: AtomicU64,
}

impl LeadIdGenerator {
    /// Create a generator that has issued nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue an id for a lead accepted at `at`.
    pub fn issue(&self, at: DateTime<Utc>) -> LeadId {
        let now_ms = u64::try_from(at.timestamp_millis()).unwrap_or(0);
        LeadId(self.issue_at(now_ms))
    }

    fn issue_at(&self, now_ms: u64) -> u64 {
        let mut current = self.last.load(Ordering::Relaxed);
        loop {
            let next = now_ms.max(current.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => current = actual,
            }
        }
    }
}
