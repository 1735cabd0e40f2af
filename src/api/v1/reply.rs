//! Reply drafting endpoint

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::classifier::IssueType;
use crate::domain::reply;

/// Request to draft a reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftReplyRequest {
    /// Issue category label; unknown labels fall back to the generic
    /// template rather than failing
    pub issue_type: String,

    /// Optional order id to pull customer context from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Drafted reply with the agent recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftReplyResponse {
    pub draft_reply: String,
    pub recommendation: String,
}

/// POST /v1/reply
pub async fn draft_reply(
    State(state): State<AppState>,
    Json(request): Json<DraftReplyRequest>,
) -> Result<Json<DraftReplyResponse>, ApiError> {
    debug!(issue_type = %request.issue_type, order_id = ?request.order_id, "Drafting reply");

    let issue_type =
        IssueType::parse(&request.issue_type).unwrap_or(IssueType::Unclassified);

    // Missing orders are not an error here; the renderer substitutes the
    // generic placeholder.
    let order = match request.order_id.as_deref() {
        Some(id) => state.order_store.get(id).await.map_err(ApiError::from)?,
        None => None,
    };

    let (draft_reply, recommendation) =
        reply::render(issue_type, order.as_ref(), request.order_id.as_deref());

    Ok(Json(DraftReplyResponse {
        draft_reply,
        recommendation,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let request: DraftReplyRequest =
            serde_json::from_str(r#"{"issue_type": "late_delivery", "order_id": "ORD1002"}"#)
                .unwrap();
        assert_eq!(request.issue_type, "late_delivery");
        assert_eq!(request.order_id.as_deref(), Some("ORD1002"));
    }

    #[test]
    fn test_request_without_order_id() {
        let request: DraftReplyRequest =
            serde_json::from_str(r#"{"issue_type": "refund_request"}"#).unwrap();
        assert!(request.order_id.is_none());
    }

    #[test]
    fn test_response_serialization() {
        let response = DraftReplyResponse {
            draft_reply: "Hi valued customer...".to_string(),
            recommendation: "Escalate to human agent for review".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"draft_reply\":"));
        assert!(json.contains("\"recommendation\":"));
    }
}
