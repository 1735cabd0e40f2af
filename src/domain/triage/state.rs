//! Triage state - the single record threaded through the pipeline

use serde::{Deserialize, Serialize};

use crate::domain::classifier::IssueType;
use crate::domain::order::Order;

/// Author of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
    Tool,
}

/// One entry in the run's conversation log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub text: String,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            text: text.into(),
        }
    }

    pub fn tool(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Tool,
            text: text.into(),
        }
    }
}

/// Input to a triage run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageInput {
    /// Raw ticket text submitted by the customer
    pub ticket_text: String,

    /// Caller-supplied order id; takes precedence over extraction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

/// Mutable state accumulated across the pipeline stages
///
/// Every field is write-once per run except `conversation`, which is
/// append-only, and `order_id`, which is set at most once (by the caller
/// or by extraction) and never cleared. Created fresh per run and
/// discarded once the outcome is returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageState {
    /// Ordered message log for the run, append-only
    pub conversation: Vec<Message>,

    /// Immutable input text for the run
    pub ticket_text: String,

    /// Referenced order id, once known
    pub order_id: Option<String>,

    /// Category assigned by the classify stage
    pub issue_type: Option<IssueType>,

    /// Matched keywords justifying `issue_type`, in rule-table order
    pub evidence: Vec<String>,

    /// Suggested next action for a human agent
    pub recommendation: Option<String>,

    /// Rendered response proposed to the customer
    pub draft_reply: Option<String>,
}

impl TriageState {
    /// Create the initial state for a run
    ///
    /// Seeds the conversation with the customer's message.
    pub fn new(input: TriageInput) -> Self {
        Self {
            conversation: vec![Message::user(input.ticket_text.clone())],
            ticket_text: input.ticket_text,
            order_id: input.order_id,
            issue_type: None,
            evidence: Vec::new(),
            recommendation: None,
            draft_reply: None,
        }
    }

    /// Append a message to the conversation log
    pub fn push_message(&mut self, message: Message) {
        self.conversation.push(message);
    }
}

/// Final result of a triage run, as exposed to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageOutcome {
    /// Resolved order id, if one was supplied or extracted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// Assigned issue category
    pub issue_type: IssueType,

    /// Matched keywords justifying the category
    pub evidence: Vec<String>,

    /// Order details when the lookup succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,

    /// Suggested next action for a human agent
    pub recommendation: String,

    /// Rendered response proposed to the customer
    pub draft_reply: String,

    /// Full message log of the run
    pub conversation: Vec<Message>,
}
