//! Lead capture route: `/api/lead`
//!
//! Validates the submitted form, issues a lead id, and attempts one
//! notification email. The response depends only on validation: a failed
//! or unconfigured delivery still reports success.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, info};

use alfox_core::catalog::is_catalog_service;
use alfox_core::lead::LeadRequest;
use alfox_core::lead_id::LeadId;

use crate::error::AppError;
use crate::state::AppState;

/// Build the `/api` router.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/lead", post(submit_lead))
}

/// Body of a successful submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub success: bool,
    pub message: &'static str,
    pub lead_id: LeadId,
}

/// `POST /api/lead` — accept a lead and notify the sales inbox.
async fn submit_lead(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<LeadRequest>, JsonRejection>,
) -> Result<Json<LeadResponse>, AppError> {
    let Json(request) = payload.inspect_err(|rejection| {
        debug!(error = %rejection.body_text(), "rejected unparseable lead payload");
    })?;

    let received_at = Utc::now();
    let lead = request.validate(received_at).inspect_err(|e| {
        debug!(error = %e, "rejected invalid lead");
    })?;
    let lead_id = state.lead_ids.issue(received_at);

    for service in lead.services.iter().filter(|s| !is_catalog_service(s)) {
        debug!(%lead_id, service = %service, "lead selected a service outside the catalog");
    }

    info!(
        %lead_id,
        company = %lead.company,
        services = lead.services.len(),
        "new lead"
    );
    debug!(%lead_id, ?lead, "lead details");

    // The submitter never sees the delivery outcome.
    let outcome = state.notifier.notify(&lead, lead_id).await;
    debug!(%lead_id, ?outcome, "lead notification finished");

    Ok(Json(LeadResponse {
        success: true,
        message: "Lead submitted successfully",
        lead_id,
    }))
}
