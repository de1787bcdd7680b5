//! SMTP transport — the production relay.
//!
//! Wraps lettre's async SMTP client behind the [`MailTransport`] trait. The
//! connection is opened lazily on the first send, so constructing the
//! transport never touches the network.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::{MailError, MailTransport, OutgoingMail, SmtpConfig};

/// A mail transport that relays through an SMTP server using STARTTLS.
#[derive(Clone)]
pub struct SmtpTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
    host: String,
    port: u16,
}

impl std::fmt::Debug for SmtpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpTransport")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl SmtpTransport {
    /// Build a relay client from configuration.
    ///
    /// Credentials are attached when both user and password are present.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::Relay`] if the TLS parameters for the host cannot
    /// be built.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, MailError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| MailError::Relay {
                host: config.host.clone(),
                reason: e.to_string(),
            })?
            .port(config.port);

        if let (Some(user), Some(password)) = (&config.user, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        Ok(Self {
            inner: builder.build(),
            host: config.host.clone(),
            port: config.port,
        })
    }
}

#[async_trait::async_trait]
impl MailTransport for SmtpTransport {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let message = build_message(mail)?;
        let response = self
            .inner
            .send(message)
            .await
            .map_err(|e| MailError::Delivery {
                reason: e.to_string(),
            })?;

        tracing::debug!(
            host = %self.host,
            code = %response.code(),
            "SMTP relay accepted message"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse().map_err(|e: lettre::address::AddressError| {
        MailError::InvalidAddress {
            address: address.to_owned(),
            reason: e.to_string(),
        }
    })
}

/// Assemble an RFC 5322 message with an HTML body.
fn build_message(mail: &OutgoingMail) -> Result<Message, MailError> {
    let mut builder = Message::builder()
        .from(parse_mailbox(&mail.from)?)
        .to(parse_mailbox(&mail.to)?)
        .subject(mail.subject.as_str())
        .header(ContentType::TEXT_HTML);

    // An unparseable Reply-To is dropped; the message still goes out.
    if let Some(ref reply_to) = mail.reply_to {
        match parse_mailbox(reply_to) {
            Ok(mailbox) => builder = builder.reply_to(mailbox),
            Err(e) => tracing::warn!(error = %e, "dropping unparseable Reply-To header"),
        }
    }

    builder
        .body(mail.html_body.clone())
        .map_err(|e| MailError::Build {
            reason: e.to_string(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> OutgoingMail {
        OutgoingMail {
            from: "bot@alfox.ai".to_owned(),
            to: "sales@alfox.ai".to_owned(),
            reply_to: Some("jane@acme.com".to_owned()),
            subject: "New Lead: Jane Doe from Acme".to_owned(),
            html_body: "<p>hello</p>".to_owned(),
        }
    }

    #[test]
    fn builds_html_message_with_reply_to() {
        let message = build_message(&sample()).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("From: bot@alfox.ai"));
        assert!(raw.contains("To: sales@alfox.ai"));
        assert!(raw.contains("Reply-To: jane@acme.com"));
        assert!(raw.contains("Subject: New Lead: Jane Doe from Acme"));
        assert!(raw.contains("Content-Type: text/html"));
    }

    #[test]
    fn omits_reply_to_when_absent() {
        let mut mail = sample();
        mail.reply_to = None;
        let raw = String::from_utf8(build_message(&mail).unwrap().formatted()).unwrap();
        assert!(!raw.contains("Reply-To"));
    }

    #[test]
    fn unparseable_reply_to_is_dropped_not_fatal() {
        for address in ["jane@acme..com", "a,b@acme.com", "jane@-acme.com"] {
            let mut mail = sample();
            mail.reply_to = Some(address.to_owned());
            let raw = String::from_utf8(build_message(&mail).unwrap().formatted()).unwrap();
            assert!(!raw.contains("Reply-To"), "{address}");
            assert!(raw.contains("To: sales@alfox.ai"));
        }
    }

    #[test]
    fn rejects_unparseable_recipient() {
        let mut mail = sample();
        mail.to = "not an address".to_owned();
        let result = build_message(&mail);
        assert!(matches!(
            result,
            Err(MailError::InvalidAddress { ref address, .. }) if address == "not an address"
        ));
    }
}
