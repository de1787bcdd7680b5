//! SMTP relay configuration.
//!
//! Every setting is optional. Delivery is enabled only when both a username
//! and a password are present; otherwise the notifier logs the lead and skips
//! the send.

/// Relay host used when `SMTP_HOST` is unset.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Relay port used when `SMTP_PORT` is unset or unparseable.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Outbound relay settings plus the lead destination address.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpConfig {
    /// Relay hostname.
    pub host: String,
    /// Relay port (STARTTLS).
    pub port: u16,
    /// SMTP username.
    pub user: Option<String>,
    /// SMTP password.
    pub password: Option<String>,
    /// Explicit sender address (`SMTP_FROM`).
    pub from: Option<String>,
    /// Address lead notifications are sent to (`LEAD_EMAIL`).
    pub lead_email: Option<String>,
}

impl SmtpConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SMTP_HOST` — relay host (default: `smtp.gmail.com`)
    /// - `SMTP_PORT` — relay port (default: `587`)
    /// - `SMTP_USER` — username
    /// - `SMTP_PASS` — password
    /// - `SMTP_FROM` — sender address (default: `SMTP_USER`)
    /// - `LEAD_EMAIL` — destination address (default: `SMTP_USER`)
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let host = get("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_owned());
        let port = get("SMTP_PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);

        Self {
            host,
            port,
            user: get("SMTP_USER"),
            password: get("SMTP_PASS"),
            from: get("SMTP_FROM"),
            lead_email: get("LEAD_EMAIL"),
        }
    }

    /// Whether credentials are present and delivery should be attempted.
    #[must_use]
    pub fn delivery_enabled(&self) -> bool {
        self.user.is_some() && self.password.is_some()
    }

    /// Sender address: `SMTP_FROM`, falling back to `SMTP_USER`.
    #[must_use]
    pub fn sender(&self) -> Option<&str> {
        self.from.as_deref().or(self.user.as_deref())
    }

    /// Destination address: `LEAD_EMAIL`, falling back to `SMTP_USER`.
    #[must_use]
    pub fn recipient(&self) -> Option<&str> {
        self.lead_email.as_deref().or(self.user.as_deref())
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "[redacted]"))
            .field("from", &self.from)
            .field("lead_email", &self.lead_email)
            .finish()
    }
}
