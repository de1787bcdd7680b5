//! Core library for Alfox lead capture.
//!
//! Contains the service catalog, the lead submission model and its
//! validation rules, lead id generation, notification rendering, and the
//! notifier that hands rendered mail to a transport. This crate depends on
//! `alfox-mail` for the transport trait and knows nothing about HTTP.

pub mod catalog;
pub mod error;
pub mod lead;
pub mod lead_id;
pub mod notification;
pub mod notifier;
