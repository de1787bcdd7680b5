//! Shared application state for the Alfox server.
//!
//! A single [`AppState`] is constructed at startup and shared across all
//! Axum handlers via `Arc`. Nothing in it is mutated per request except the
//! lock-free lead id counter.

use alfox_core::lead_id::LeadIdGenerator;
use alfox_core::notifier::LeadNotifier;

/// Shared application state passed to all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    /// Renders and delivers lead notifications.
    pub notifier: LeadNotifier,
    /// Issues time-derived lead ids.
    pub lead_ids: LeadIdGenerator,
}

impl AppState {
    /// State around the given notifier with a fresh id generator.
    #[must_use]
    pub fn new(notifier: LeadNotifier) -> Self {
        Self {
            notifier,
            lead_ids: LeadIdGenerator::new(),
        }
    }
}
