//! Classification endpoint

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::types::{ApiError, Json};
use crate::domain::classifier::{self, IssueType};

/// Request to classify ticket text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    /// Raw ticket text; may be empty
    #[serde(default)]
    pub ticket_text: String,
}

/// Classification result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub issue_type: IssueType,
    pub evidence: Vec<String>,
}

/// POST /v1/classify
pub async fn classify_ticket(
    Json(request): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    debug!(chars = request.ticket_text.len(), "Classifying ticket text");

    let (issue_type, evidence) = classifier::classify(&request.ticket_text);

    Ok(Json(ClassifyResponse {
        issue_type,
        evidence,
    }))
}
