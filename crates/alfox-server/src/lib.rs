//! Alfox HTTP server.
//!
//! Wires the lead model, notifier, and mail transport into a running Axum
//! server. Serves the lead-capture API at `/api/lead` and the landing page
//! at `/`.

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
