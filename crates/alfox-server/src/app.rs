//! Application assembly: notifier wiring and the Axum router.
//!
//! Lives in the library so integration tests can drive the exact router the
//! binary serves.

use std::any::Any;
use std::sync::Arc;

use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use alfox_core::notifier::LeadNotifier;
use alfox_mail::SmtpConfig;

use crate::error::AppError;
use crate::routes;
use crate::state::AppState;

/// Build the lead notifier from SMTP settings.
///
/// Without credentials, or if the relay client cannot be built, the notifier
/// is disabled: leads are still accepted and logged.
pub fn build_notifier(config: &SmtpConfig) -> LeadNotifier {
    let hint = config.recipient().map(str::to_owned);

    let (true, Some(from), Some(to)) =
        (config.delivery_enabled(), config.sender(), config.recipient())
    else {
        info!(
            recipient = hint.as_deref().unwrap_or("not configured"),
            "SMTP credentials not set, lead notifications disabled"
        );
        return LeadNotifier::disabled(hint);
    };

    #[cfg(feature = "smtp")]
    {
        match alfox_mail::SmtpTransport::from_config(config) {
            Ok(transport) => {
                info!(host = %config.host, port = config.port, to = %to, "SMTP delivery enabled");
                LeadNotifier::new(Arc::new(transport), from, to)
            }
            Err(e) => {
                warn!(error = %e, "failed to configure SMTP relay, lead notifications disabled");
                LeadNotifier::disabled(hint)
            }
        }
    }

    #[cfg(not(feature = "smtp"))]
    {
        let _ = (from, to);
        warn!("SMTP credentials set but the `smtp` feature is disabled, lead notifications disabled");
        LeadNotifier::disabled(hint)
    }
}

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::lead::router())
        .merge(routes::health::router())
        .merge(routes::ui::router())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            axum::http::header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .with_state(state)
}

/// Any handler panic becomes the generic 500 body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "handler panicked".to_owned());
    AppError::Internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifier_disabled_without_credentials() {
        let config = SmtpConfig::from_lookup(|key| {
            (key == "LEAD_EMAIL").then(|| "sales@alfox.ai".to_owned())
        });
        assert!(!build_notifier(&config).is_configured());
    }

    #[cfg(feature = "smtp")]
    #[test]
    fn credentials_alone_route_mail_to_and_from_smtp_user() {
        let config = SmtpConfig::from_lookup(|key| match key {
            "SMTP_USER" => Some("bot@alfox.ai".to_owned()),
            "SMTP_PASS" => Some("app-password".to_owned()),
            _ => None,
        });

        let notifier = build_notifier(&config);
        assert!(notifier.is_configured());
        assert_eq!(notifier.sender(), Some("bot@alfox.ai"));
        assert_eq!(notifier.recipient(), Some("bot@alfox.ai"));
    }

    #[cfg(feature = "smtp")]
    #[test]
    fn explicit_sender_and_lead_address_override_smtp_user() {
        let config = SmtpConfig::from_lookup(|key| match key {
            "SMTP_USER" => Some("bot@alfox.ai".to_owned()),
            "SMTP_PASS" => Some("app-password".to_owned()),
            "SMTP_FROM" => Some("leads@alfox.ai".to_owned()),
            "LEAD_EMAIL" => Some("sales@alfox.ai".to_owned()),
            _ => None,
        });

        let notifier = build_notifier(&config);
        assert_eq!(notifier.sender(), Some("leads@alfox.ai"));
        assert_eq!(notifier.recipient(), Some("sales@alfox.ai"));
    }
}
