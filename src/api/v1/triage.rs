//! Triage endpoints
//!
//! Two routes with identical contracts: `/v1/triage` drives the pipeline
//! state machine, `/v1/triage/direct` calls the stage functions in a plain
//! sequence. Equivalent input must produce equivalent output on both.

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::triage::{TriageInput, TriageOutcome};

/// Request to triage a ticket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageRequest {
    /// Raw ticket text; empty text is valid and yields `unclassified`
    #[serde(default)]
    pub ticket_text: String,

    /// Known order id; takes precedence over in-text extraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

impl From<TriageRequest> for TriageInput {
    fn from(request: TriageRequest) -> Self {
        Self {
            ticket_text: request.ticket_text,
            order_id: request.order_id,
        }
    }
}

/// POST /v1/triage
pub async fn run_triage(
    State(state): State<AppState>,
    Json(request): Json<TriageRequest>,
) -> Result<Json<TriageOutcome>, ApiError> {
    debug!(order_id = ?request.order_id, "Running triage pipeline");

    let outcome = state
        .pipeline
        .run(request.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(outcome))
}

/// POST /v1/triage/direct
pub async fn run_triage_direct(
    State(state): State<AppState>,
    Json(request): Json<TriageRequest>,
) -> Result<Json<TriageOutcome>, ApiError> {
    debug!(order_id = ?request.order_id, "Running triage stages directly");

    let outcome = state
        .pipeline
        .run_direct(request.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Json(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let request: TriageRequest =
            serde_json::from_str(r#"{"ticket_text": "ORD1001 arrived broken"}"#).unwrap();
        assert_eq!(request.ticket_text, "ORD1001 arrived broken");
        assert!(request.order_id.is_none());
    }

    #[test]
    fn test_request_with_order_id() {
        let request: TriageRequest = serde_json::from_str(
            r#"{"ticket_text": "this one is late", "order_id": "ORD0001"}"#,
        )
        .unwrap();
        assert_eq!(request.order_id.as_deref(), Some("ORD0001"));
    }

    #[test]
    fn test_request_defaults_to_empty_text() {
        let request: TriageRequest = serde_json::from_str("{}").unwrap();
        assert!(request.ticket_text.is_empty());
    }

    #[test]
    fn test_request_into_input() {
        let input: TriageInput = TriageRequest {
            ticket_text: "refund please".to_string(),
            order_id: Some("ORD1004".to_string()),
        }
        .into();

        assert_eq!(input.ticket_text, "refund please");
        assert_eq!(input.order_id.as_deref(), Some("ORD1004"));
    }
}
