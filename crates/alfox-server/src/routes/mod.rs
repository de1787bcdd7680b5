//! HTTP route handlers for Alfox.
//!
//! - `lead`: lead submission API
//! - `health`: liveness probe
//! - `ui`: landing page with the lead form

pub mod health;
pub mod lead;
pub mod ui;
