//! In-memory mail transport for testing.
//!
//! Messages are appended to a `Vec` behind a `RwLock` instead of being sent
//! anywhere. The transport can be switched into a failing mode to exercise
//! delivery-error paths without a relay.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{MailError, MailTransport, OutgoingMail};

/// A mail transport that records every message it is asked to send.
///
/// Clones share the same outbox, so a test can hand one clone to the code
/// under test and inspect the other.
///
/// # Examples
///
/// ```
/// # use alfox_mail::{MailTransport, MemoryTransport, OutgoingMail};
/// # #[tokio::main]
/// # async fn main() {
/// let transport = MemoryTransport::new();
/// let mail = OutgoingMail {
///     from: "bot@alfox.ai".to_owned(),
///     to: "sales@alfox.ai".to_owned(),
///     reply_to: None,
///     subject: "hello".to_owned(),
///     html_body: "<p>hi</p>".to_owned(),
/// };
/// transport.send(&mail).await.unwrap();
/// assert_eq!(transport.sent().await, vec![mail]);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    outbox: Arc<RwLock<Vec<OutgoingMail>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryTransport {
    /// Create a new transport with an empty outbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport whose every send fails with [`MailError::Delivery`].
    #[must_use]
    pub fn failing() -> Self {
        let transport = Self::new();
        transport.set_failing(true);
        transport
    }

    /// Toggle failure mode.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Snapshot of every message accepted so far, oldest first.
    pub async fn sent(&self) -> Vec<OutgoingMail> {
        self.outbox.read().await.clone()
    }
}

#[async_trait::async_trait]
impl MailTransport for MemoryTransport {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(MailError::Delivery {
                reason: "memory transport set to fail".to_owned(),
            });
        }
        self.outbox.write().await.push(mail.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
