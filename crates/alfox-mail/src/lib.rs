//! Mail transport abstraction for Alfox.
//!
//! This crate defines the [`MailTransport`] trait, a delivery interface that
//! knows nothing about leads or HTML layout. The notifier in `alfox-core`
//! renders a message and hands it to whichever transport the server was
//! configured with.
//!
//! Two implementations are provided:
//!
//! - [`SmtpTransport`] — production relay, backed by lettre (feature `smtp`)
//! - [`MemoryTransport`] — records messages in memory, for testing only

mod config;
mod error;
mod memory;
#[cfg(feature = "smtp")]
mod smtp;

pub use config::{SmtpConfig, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};
pub use error::MailError;
pub use memory::MemoryTransport;
#[cfg(feature = "smtp")]
pub use smtp::SmtpTransport;

/// A fully addressed message ready for delivery.
///
/// The body is HTML. Addresses are plain `local@domain` strings and are
/// parsed by the transport, so an unparseable address surfaces as
/// [`MailError::InvalidAddress`] at send time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    /// Sender address.
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Address replies should go to, if different from the sender.
    pub reply_to: Option<String>,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_body: String,
}

/// A pluggable outbound mail transport.
///
/// Implementations must be safe to share across async tasks (`Send + Sync`).
#[async_trait::async_trait]
pub trait MailTransport: Send + Sync + 'static {
    /// Deliver a single message.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::InvalidAddress`] or [`MailError::Build`] if the
    /// message cannot be assembled, and [`MailError::Delivery`] if the relay
    /// rejects it.
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError>;

    /// Short backend name for log fields.
    fn name(&self) -> &'static str;
}
