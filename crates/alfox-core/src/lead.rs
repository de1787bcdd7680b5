//! Lead submission model and validation.
//!
//! A [`LeadRequest`] is whatever the form posted, with every field optional.
//! [`LeadRequest::validate`] turns it into a [`LeadSubmission`] or rejects it
//! with a [`LeadError`]. Submissions are never stored; they live for one
//! request and are discarded after the notification attempt.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Deserialize;

use crate::error::LeadError;

/// Shown in place of a phone number the visitor left blank.
pub const PHONE_SENTINEL: &str = "Not provided";

/// Shown in place of a message the visitor left blank.
pub const MESSAGE_SENTINEL: &str = "No message provided";

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Raw form payload as posted to `/api/lead`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub services: Option<Vec<String>>,
    pub message: Option<String>,
}

/// A validated lead, ready to be rendered into a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    /// The submitted phone number, or [`PHONE_SENTINEL`].
    pub phone: String,
    pub services: Vec<String>,
    /// The submitted message, or [`MESSAGE_SENTINEL`].
    pub message: String,
    /// When the handler accepted the submission.
    pub timestamp: DateTime<Utc>,
}

impl LeadRequest {
    /// Validate the payload and fill in sentinels for omitted optional fields.
    ///
    /// Empty strings count as missing. Whitespace is not trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::MissingFields`] if name, email, company or
    /// services is missing or empty, and [`LeadError::InvalidEmail`] if the
    /// email does not match `local@domain.tld`.
    pub fn validate(self, timestamp: DateTime<Utc>) -> Result<LeadSubmission, LeadError> {
        let (Some(name), Some(email), Some(company), Some(services)) = (
            non_empty(self.name),
            non_empty(self.email),
            non_empty(self.company),
            self.services.filter(|s| !s.is_empty()),
        ) else {
            return Err(LeadError::MissingFields);
        };

        if !is_valid_email(&email) {
            return Err(LeadError::InvalidEmail { email });
        }

        Ok(LeadSubmission {
            name,
            email,
            company,
            phone: non_empty(self.phone).unwrap_or_else(|| PHONE_SENTINEL.to_owned()),
            services,
            message: non_empty(self.message).unwrap_or_else(|| MESSAGE_SENTINEL.to_owned()),
            timestamp,
        })
    }
}

/// Whether `email` looks like `local@domain.tld`.
///
/// This is the same loose check the form relies on: no whitespace, exactly
/// one `@`, and at least one dot after it.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete() -> LeadRequest {
        LeadRequest {
            name: Some("Jane Doe".to_owned()),
            email: Some("jane@acme.com".to_owned()),
            company: Some("Acme".to_owned()),
            phone: Some("+1 (555) 123-4567".to_owned()),
            services: Some(vec!["UX/UI Design".to_owned()]),
            message: Some("We need a redesign.".to_owned()),
        }
    }

    #[test]
    fn complete_request_validates() {
        let now = Utc::now();
        let lead = complete().validate(now).unwrap();
        assert_eq!(lead.name, "Jane Doe");
        assert_eq!(lead.email, "jane@acme.com");
        assert_eq!(lead.company, "Acme");
        assert_eq!(lead.phone, "+1 (555) 123-4567");
        assert_eq!(lead.services, vec!["UX/UI Design"]);
        assert_eq!(lead.message, "We need a redesign.");
        assert_eq!(lead.timestamp, now);
    }

    #[test]
    fn missing_required_fields_rejected() {
        let cases: [fn(&mut LeadRequest); 8] = [
            |r| r.name = None,
            |r| r.name = Some(String::new()),
            |r| r.email = None,
            |r| r.email = Some(String::new()),
            |r| r.company = None,
            |r| r.company = Some(String::new()),
            |r| r.services = None,
            |r| r.services = Some(Vec::new()),
        ];

        for mutate in cases {
            let mut request = complete();
            mutate(&mut request);
            assert_eq!(
                request.validate(Utc::now()),
                Err(LeadError::MissingFields)
            );
        }
    }

    #[test]
    fn missing_fields_checked_before_email_format() {
        let mut request = complete();
        request.email = Some("nope".to_owned());
        request.company = None;
        assert_eq!(request.validate(Utc::now()), Err(LeadError::MissingFields));
    }

    #[test]
    fn malformed_email_rejected() {
        for email in ["jane", "jane@", "jane@acme", "@acme.com", "jane doe@acme.com", "jane@@acme.com"] {
            let mut request = complete();
            request.email = Some(email.to_owned());
            assert_eq!(
                request.validate(Utc::now()),
                Err(LeadError::InvalidEmail {
                    email: email.to_owned()
                }),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn loose_email_shapes_accepted() {
        for email in ["jane@acme.com", "j.doe+leads@mail.acme.co.uk", "a@b.c"] {
            assert!(is_valid_email(email), "{email} should be accepted");
        }
    }

    #[test]
    fn omitted_optionals_become_sentinels() {
        let mut request = complete();
        request.phone = None;
        request.message = Some(String::new());
        let lead = request.validate(Utc::now()).unwrap();
        assert_eq!(lead.phone, PHONE_SENTINEL);
        assert_eq!(lead.message, MESSAGE_SENTINEL);
    }

    #[test]
    fn whitespace_name_is_not_empty() {
        let mut request = complete();
        request.name = Some("   ".to_owned());
        assert!(request.validate(Utc::now()).is_ok());
    }

    #[test]
    fn off_catalog_services_pass_through() {
        let mut request = complete();
        request.services = Some(vec!["Time Travel".to_owned()]);
        let lead = request.validate(Utc::now()).unwrap();
        assert_eq!(lead.services, vec!["Time Travel"]);
    }

    #[test]
    fn deserializes_partial_json() {
        let request: LeadRequest =
            serde_json::from_str(r#"{"name":"Jane","services":["UX/UI Design"]}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("Jane"));
        assert!(request.email.is_none());
        assert_eq!(request.services.map(|s| s.len()), Some(1));
    }
}
