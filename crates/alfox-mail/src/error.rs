//! Mail transport error types.
//!
//! Variants carry the address or relay involved so a failed delivery can be
//! diagnosed from the log line alone.

/// Errors that can occur while building or delivering a message.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// A sender, recipient, or reply-to address could not be parsed.
    #[error("invalid address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    /// The message could not be assembled from its parts.
    #[error("failed to build message: {reason}")]
    Build { reason: String },

    /// The relay could not be configured (bad host, TLS setup failure).
    #[error("failed to configure relay '{host}': {reason}")]
    Relay { host: String, reason: String },

    /// The relay rejected the message or the connection failed mid-send.
    #[error("SMTP delivery failed: {reason}")]
    Delivery { reason: String },
}
