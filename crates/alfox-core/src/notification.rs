//! Rendering of the lead notification email.
//!
//! The body is built with `maud`, so every submitted string is HTML-escaped
//! on the way in. Only the fixed layout is emitted as raw markup.

use maud::{html, Markup, DOCTYPE};

use crate::lead::LeadSubmission;

const BRAND: &str = "Alfox.ai";
const ACCENT: &str = "#6366f1";
const HEADING: &str = "color: #1f2937; margin-top: 0;";
const PANEL: &str = "background-color: #f3f4f6; padding: 20px; border-radius: 8px; margin: 20px 0;";

/// Subject line and HTML body for one lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub html_body: String,
}

impl Notification {
    /// Render the notification for a validated lead.
    #[must_use]
    pub fn render(lead: &LeadSubmission) -> Self {
        Self {
            subject: format!("New Lead: {} from {}", lead.name, lead.company),
            html_body: render_body(lead).into_string(),
        }
    }
}

fn render_body(lead: &LeadSubmission) -> Markup {
    html! {
        (DOCTYPE)
        html {
            body {
                div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;" {
                    h2 style={ "color: " (ACCENT) "; border-bottom: 2px solid " (ACCENT) "; padding-bottom: 10px;" } {
                        "New Lead from " (BRAND)
                    }

                    div style=(PANEL) {
                        h3 style=(HEADING) { "Contact Information" }
                        p { strong { "Name:" } " " (lead.name) }
                        p {
                            strong { "Email:" } " "
                            a href={ "mailto:" (lead.email) } { (lead.email) }
                        }
                        p { strong { "Company:" } " " (lead.company) }
                        p { strong { "Phone:" } " " (lead.phone) }
                    }

                    div style=(PANEL) {
                        h3 style=(HEADING) { "Services of Interest" }
                        ul style="list-style-type: none; padding-left: 0;" {
                            @for service in &lead.services {
                                li style="padding: 5px 0;" { "✓ " (service) }
                            }
                        }
                    }

                    div style=(PANEL) {
                        h3 style=(HEADING) { "Message" }
                        p style="white-space: pre-wrap;" { (lead.message) }
                    }

                    div style="margin-top: 20px; padding-top: 20px; border-top: 1px solid #e5e7eb; color: #6b7280; font-size: 12px;" {
                        p {
                            "Lead generated at: "
                            (lead.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                        }
                    }
                }
            }
        }
    }
}
