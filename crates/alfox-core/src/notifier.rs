//! Delivery of lead notifications.
//!
//! The [`LeadNotifier`] renders a [`Notification`] and hands it to a mail
//! transport. Delivery is best-effort: failures are logged here and reported
//! back as a [`DeliveryOutcome`], never as an error, so the caller's response
//! to the submitter does not depend on the mail relay.

use std::sync::Arc;

use alfox_mail::{MailTransport, OutgoingMail};
use tracing::{error, info};

use crate::lead::LeadSubmission;
use crate::lead_id::LeadId;
use crate::notification::Notification;

/// What happened to a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The transport accepted the message.
    Sent,
    /// Delivery is not configured; nothing was sent.
    NotConfigured,
    /// The transport returned an error, which has been logged.
    Failed(String),
}

#[derive(Clone)]
struct Route {
    transport: Arc<dyn MailTransport>,
    from: String,
    to: String,
}

/// Sends one notification per accepted lead.
#[derive(Clone)]
pub struct LeadNotifier {
    route: Option<Route>,
    recipient_hint: Option<String>,
}

impl std::fmt::Debug for LeadNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LeadNotifier")
            .field("transport", &self.route.as_ref().map(|r| r.transport.name()))
            .field("to", &self.route.as_ref().map(|r| r.to.as_str()))
            .finish_non_exhaustive()
    }
}

impl LeadNotifier {
    /// A notifier that delivers through `transport` from `from` to `to`.
    pub fn new(
        transport: Arc<dyn MailTransport>,
        from: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let to = to.into();
        Self {
            route: Some(Route {
                transport,
                from: from.into(),
                to: to.clone(),
            }),
            recipient_hint: Some(to),
        }
    }

    /// A notifier that only logs. `recipient_hint` is the address mail would
    /// have gone to, if one is known.
    #[must_use]
    pub fn disabled(recipient_hint: Option<String>) -> Self {
        Self {
            route: None,
            recipient_hint,
        }
    }

    /// Whether a transport is attached.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.route.is_some()
    }

    /// Sender address, when a transport is attached.
    #[must_use]
    pub fn sender(&self) -> Option<&str> {
        self.route.as_ref().map(|r| r.from.as_str())
    }

    /// Address notifications go to, when a transport is attached.
    #[must_use]
    pub fn recipient(&self) -> Option<&str> {
        self.route.as_ref().map(|r| r.to.as_str())
    }

    /// Render and send the notification for `lead`.
    pub async fn notify(&self, lead: &LeadSubmission, lead_id: LeadId) -> DeliveryOutcome {
        let Some(route) = &self.route else {
            info!(
                %lead_id,
                recipient = self.recipient_hint.as_deref().unwrap_or("not configured"),
                "mail delivery not configured, skipping lead notification"
            );
            return DeliveryOutcome::NotConfigured;
        };

        let notification = Notification::render(lead);
        let mail = OutgoingMail {
            from: route.from.clone(),
            to: route.to.clone(),
            reply_to: Some(lead.email.clone()),
            subject: notification.subject,
            html_body: notification.html_body,
        };

        match route.transport.send(&mail).await {
            Ok(()) => {
                info!(
                    %lead_id,
                    transport = route.transport.name(),
                    "lead notification sent"
                );
                DeliveryOutcome::Sent
            }
            Err(e) => {
                error!(
                    %lead_id,
                    transport = route.transport.name(),
                    error = %e,
                    "failed to send lead notification"
                );
                DeliveryOutcome::Failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::lead::{LeadRequest, PHONE_SENTINEL};
    use crate::lead_id::LeadIdGenerator;
    use alfox_mail::MemoryTransport;
    use chrono::Utc;

    fn lead() -> LeadSubmission {
        LeadRequest {
            name: Some("Jane Doe".to_owned()),
            email: Some("jane@acme.com".to_owned()),
            company: Some("Acme".to_owned()),
            phone: None,
            services: Some(vec!["UX/UI Design".to_owned()]),
            message: None,
        }
        .validate(Utc::now())
        .unwrap()
    }

    fn id() -> LeadId {
        LeadIdGenerator::new().issue(Utc::now())
    }

    #[tokio::test]
    async fn sends_addressed_notification() {
        let transport = MemoryTransport::new();
        let notifier = LeadNotifier::new(
            Arc::new(transport.clone()),
            "bot@alfox.ai",
            "sales@alfox.ai",
        );

        assert_eq!(notifier.sender(), Some("bot@alfox.ai"));
        assert_eq!(notifier.recipient(), Some("sales@alfox.ai"));

        let outcome = notifier.notify(&lead(), id()).await;
        assert_eq!(outcome, DeliveryOutcome::Sent);

        let sent = transport.sent().await;
        assert_eq!(sent.len(), 1);
        let mail = &sent[0];
        assert_eq!(mail.from, "bot@alfox.ai");
        assert_eq!(mail.to, "sales@alfox.ai");
        assert_eq!(mail.reply_to.as_deref(), Some("jane@acme.com"));
        assert_eq!(mail.subject, "New Lead: Jane Doe from Acme");
        assert!(mail.html_body.contains(PHONE_SENTINEL));
    }

    #[tokio::test]
    async fn transport_failure_is_reported_not_raised() {
        let transport = MemoryTransport::failing();
        let notifier = LeadNotifier::new(Arc::new(transport), "bot@alfox.ai", "sales@alfox.ai");

        let outcome = notifier.notify(&lead(), id()).await;
        assert!(matches!(outcome, DeliveryOutcome::Failed(ref reason) if reason.contains("SMTP")));
    }

    #[tokio::test]
    async fn disabled_notifier_sends_nothing() {
        let notifier = LeadNotifier::disabled(None);
        assert!(!notifier.is_configured());
        assert_eq!(notifier.recipient(), None);
        assert_eq!(
            notifier.notify(&lead(), id()).await,
            DeliveryOutcome::NotConfigured
        );
    }
}
