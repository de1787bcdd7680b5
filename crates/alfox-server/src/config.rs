//! Server configuration for Alfox.
//!
//! Loads configuration from environment variables with sensible defaults.
//! Nothing is required: with no SMTP credentials the server still accepts
//! leads and only logs them.

use std::net::SocketAddr;

use alfox_mail::SmtpConfig;

/// Default listener address when neither `ALFOX_BIND_ADDR` nor `PORT` is set.
const DEFAULT_BIND: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to.
    pub bind_addr: SocketAddr,
    /// Log level filter (e.g., `info`, `debug`, `warn`).
    pub log_level: String,
    /// Outbound mail relay and lead destination.
    pub mail: SmtpConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PORT` — port to bind on (platform convention, binds to `0.0.0.0`)
    /// - `ALFOX_BIND_ADDR` — full bind address (overrides `PORT`, default: `127.0.0.1:3000`)
    /// - `ALFOX_LOG_LEVEL` — log filter (default: `info`)
    /// - `SMTP_*` and `LEAD_EMAIL` — see [`SmtpConfig::from_env`]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_addr = SocketAddr::from(DEFAULT_BIND);

        // Priority: ALFOX_BIND_ADDR > PORT > default 127.0.0.1:3000
        let bind_addr = if let Some(addr) = lookup("ALFOX_BIND_ADDR") {
            addr.parse().unwrap_or(default_addr)
        } else if let Some(port_str) = lookup("PORT") {
            let port: u16 = port_str.parse().unwrap_or(DEFAULT_BIND.1);
            SocketAddr::from(([0, 0, 0, 0], port))
        } else {
            default_addr
        };

        let log_level = lookup("ALFOX_LOG_LEVEL").unwrap_or_else(|| "info".to_owned());

        Self {
            bind_addr,
            log_level,
            mail: SmtpConfig::from_lookup(&lookup),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<&str, &str> = pairs.iter().copied().collect();
        ServerConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_owned()))
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]);
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.log_level, "info");
        assert!(!config.mail.delivery_enabled());
    }

    #[test]
    fn port_binds_all_interfaces() {
        let config = config_from(&[("PORT", "8080")]);
        assert_eq!(config.bind_addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
    }

    #[test]
    fn bind_addr_overrides_port() {
        let config = config_from(&[("PORT", "8080"), ("ALFOX_BIND_ADDR", "10.0.0.5:9000")]);
        assert_eq!(config.bind_addr, SocketAddr::from(([10, 0, 0, 5], 9000)));
    }

    #[test]
    fn garbage_bind_addr_falls_back() {
        let config = config_from(&[("ALFOX_BIND_ADDR", "nowhere")]);
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
    }

    #[test]
    fn mail_settings_pass_through() {
        let config = config_from(&[
            ("SMTP_USER", "bot@alfox.ai"),
            ("SMTP_PASS", "secret"),
            ("LEAD_EMAIL", "sales@alfox.ai"),
        ]);
        assert!(config.mail.delivery_enabled());
        assert_eq!(config.mail.recipient(), Some("sales@alfox.ai"));
    }
}
