//! Triage pipeline - Ingest → Classify → [Fetch Order] → Draft Reply
//!
//! The pipeline is an explicit finite-state machine over [`TriageState`].
//! Its only branch is "do we know an order id after classification"; every
//! stage is a bounded in-memory computation and none of them can fail the
//! run. A missing or unknown order id is normal control flow, not an error.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::state::{Message, TriageInput, TriageOutcome, TriageState};
use crate::domain::classifier::{self, IssueType};
use crate::domain::order::{Order, OrderStore};
use crate::domain::reply;
use crate::domain::DomainError;

/// Order-id pattern: "ORD" followed by exactly four digits
///
/// Matched case-insensitively and normalized to uppercase; the first
/// occurrence in the ticket text wins.
static ORDER_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)ORD\d{4}").expect("order id pattern is valid"));

/// Pipeline stages, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Ingest,
    Classify,
    FetchOrder,
    DraftReply,
    Done,
}

/// Transition function for the pipeline
///
/// The single conditional edge sits after Classify: with an order id the
/// run visits FetchOrder, otherwise it goes straight to DraftReply.
pub fn next(stage: Stage, state: &TriageState) -> Stage {
    match stage {
        Stage::Ingest => Stage::Classify,
        Stage::Classify => {
            if state.order_id.is_some() {
                Stage::FetchOrder
            } else {
                Stage::DraftReply
            }
        }
        Stage::FetchOrder => Stage::DraftReply,
        Stage::DraftReply => Stage::Done,
        Stage::Done => Stage::Done,
    }
}

/// Extract the first order-id occurrence from ticket text
pub fn extract_order_id(ticket_text: &str) -> Option<String> {
    ORDER_ID_PATTERN
        .find(ticket_text)
        .map(|m| m.as_str().to_uppercase())
}

/// Stage 1: populate `order_id` from the ticket text
///
/// A caller-supplied id always takes precedence and is never overwritten.
pub fn ingest(state: &mut TriageState) {
    if state.order_id.is_none() {
        state.order_id = extract_order_id(&state.ticket_text);
    }

    debug!(order_id = ?state.order_id, "Ingested ticket");
}

/// Stage 2: assign `issue_type` and `evidence` from the keyword rules
pub fn classify_issue(state: &mut TriageState) {
    let (issue_type, evidence) = classifier::classify(&state.ticket_text);
    state.issue_type = Some(issue_type);
    state.evidence = evidence;

    let note = match &state.order_id {
        Some(id) => format!("Classified as {}. Looking up order {}...", issue_type, id),
        None => format!("Classified as {}. No order ID found to look up.", issue_type),
    };
    state.push_message(Message::assistant(note));

    debug!(issue_type = %issue_type, evidence = ?state.evidence, "Classified ticket");
}

/// Stage 4: render the reply and recommendation
///
/// `order` is the ephemeral lookup result from the fetch stage, if it ran
/// and hit.
pub fn draft_reply(state: &mut TriageState, order: Option<&Order>) {
    let issue_type = state.issue_type.unwrap_or(IssueType::Unclassified);
    let (reply_text, recommendation) =
        reply::render(issue_type, order, state.order_id.as_deref());

    state.push_message(Message::assistant(reply_text.clone()));
    state.draft_reply = Some(reply_text);
    state.recommendation = Some(recommendation);
}

/// The triage pipeline, bound to an order store
#[derive(Debug, Clone)]
pub struct TriagePipeline {
    store: Arc<dyn OrderStore>,
}

impl TriagePipeline {
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self { store }
    }

    /// Run the full pipeline through the state machine
    pub async fn run(&self, input: TriageInput) -> Result<TriageOutcome, DomainError> {
        let mut state = TriageState::new(input);
        let mut fetched: Option<Order> = None;
        let mut stage = Stage::Ingest;

        while stage != Stage::Done {
            match stage {
                Stage::Ingest => ingest(&mut state),
                Stage::Classify => classify_issue(&mut state),
                Stage::FetchOrder => fetched = self.fetch_order(&mut state).await,
                Stage::DraftReply => draft_reply(&mut state, fetched.as_ref()),
                Stage::Done => {}
            }
            stage = next(stage, &state);
        }

        Ok(into_outcome(state, fetched))
    }

    /// Run the stages in sequence without the state-machine loop
    ///
    /// Produces output equivalent to [`run`](Self::run) for equivalent
    /// input; exists so the direct-invocation route has a separate path
    /// through the same stage functions.
    pub async fn run_direct(&self, input: TriageInput) -> Result<TriageOutcome, DomainError> {
        let mut state = TriageState::new(input);

        ingest(&mut state);
        classify_issue(&mut state);

        let fetched = if state.order_id.is_some() {
            self.fetch_order(&mut state).await
        } else {
            None
        };

        draft_reply(&mut state, fetched.as_ref());

        Ok(into_outcome(state, fetched))
    }

    /// Stage 3: look up the order, recovering locally on any miss
    async fn fetch_order(&self, state: &mut TriageState) -> Option<Order> {
        let Some(order_id) = state.order_id.clone() else {
            return None;
        };

        match self.store.get(&order_id).await {
            Ok(Some(order)) => {
                let detail = serde_json::to_string(&order)
                    .unwrap_or_else(|_| format!("Order {} found", order.order_id));
                state.push_message(Message::tool(detail));
                Some(order)
            }
            Ok(None) => {
                debug!(order_id = %order_id, "Order not found, continuing without context");
                state.push_message(Message::tool(format!("Order {} not found", order_id)));
                None
            }
            Err(e) => {
                // Store failures are recovered the same way as a miss; the
                // pipeline has no fatal error condition.
                warn!(order_id = %order_id, error = %e, "Order lookup failed");
                state.push_message(Message::tool(format!("Order {} not found", order_id)));
                None
            }
        }
    }
}

fn into_outcome(state: TriageState, fetched: Option<Order>) -> TriageOutcome {
    TriageOutcome {
        order_id: state.order_id,
        issue_type: state.issue_type.unwrap_or(IssueType::Unclassified),
        evidence: state.evidence,
        order: fetched,
        recommendation: state.recommendation.unwrap_or_default(),
        draft_reply: state.draft_reply.unwrap_or_default(),
        conversation: state.conversation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{InMemoryOrderStore, LineItem, OrderStatus};
    use crate::domain::reply::{GENERIC_CUSTOMER, GENERIC_ORDER_REF};
    use crate::domain::triage::state::MessageRole;
    use chrono::NaiveDate;

    fn seed_order(id: &str, name: &str) -> Order {
        Order {
            order_id: id.to_string(),
            customer_name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            items: vec![LineItem {
                name: "Bluetooth Speaker".to_string(),
                quantity: 1,
            }],
            status: OrderStatus::Shipped,
            delivery_date: NaiveDate::from_ymd_opt(2024, 12, 5).unwrap(),
            total_amount: 49.99,
        }
    }

    fn pipeline_with(orders: Vec<Order>) -> TriagePipeline {
        TriagePipeline::new(Arc::new(InMemoryOrderStore::new(orders)))
    }

    fn input(text: &str, order_id: Option<&str>) -> TriageInput {
        TriageInput {
            ticket_text: text.to_string(),
            order_id: order_id.map(String::from),
        }
    }

    #[test]
    fn test_extract_first_occurrence() {
        assert_eq!(
            extract_order_id("refund ORD1234 not ORD5678 please"),
            Some("ORD1234".to_string())
        );
    }

    #[test]
    fn test_extract_normalizes_case() {
        assert_eq!(extract_order_id("my order ord1002"), Some("ORD1002".to_string()));
    }

    #[test]
    fn test_extract_requires_four_digits() {
        assert!(extract_order_id("ORD123 is too short").is_none());
        // Longer runs still match on the first four digits.
        assert_eq!(extract_order_id("ORD12345"), Some("ORD1234".to_string()));
    }

    #[test]
    fn test_extract_none_without_pattern() {
        assert!(extract_order_id("no identifier here").is_none());
    }

    #[test]
    fn test_transition_table() {
        let mut state = TriageState::new(input("text", None));
        assert_eq!(next(Stage::Ingest, &state), Stage::Classify);
        assert_eq!(next(Stage::Classify, &state), Stage::DraftReply);

        state.order_id = Some("ORD1001".to_string());
        assert_eq!(next(Stage::Classify, &state), Stage::FetchOrder);
        assert_eq!(next(Stage::FetchOrder, &state), Stage::DraftReply);
        assert_eq!(next(Stage::DraftReply, &state), Stage::Done);
        assert_eq!(next(Stage::Done, &state), Stage::Done);
    }

    #[tokio::test]
    async fn test_damaged_order_with_known_id() {
        let pipeline = pipeline_with(vec![seed_order("ORD1234", "Dana White")]);
        let outcome = pipeline
            .run(input("My order ORD1234 arrived damaged", None))
            .await
            .unwrap();

        assert_eq!(outcome.order_id.as_deref(), Some("ORD1234"));
        assert_eq!(outcome.issue_type, IssueType::DamagedItem);
        assert_eq!(outcome.evidence, vec!["damaged"]);
        assert!(outcome.order.is_some());
        assert!(outcome.draft_reply.contains("Dana White"));
        assert!(outcome.draft_reply.contains("ORD1234"));
    }

    #[tokio::test]
    async fn test_late_delivery_without_order_id() {
        let pipeline = pipeline_with(vec![seed_order("ORD1001", "Alice Johnson")]);
        let outcome = pipeline
            .run(input("Where is my package, it's late", None))
            .await
            .unwrap();

        assert_eq!(outcome.issue_type, IssueType::LateDelivery);
        assert!(outcome.order_id.is_none());
        assert!(outcome.order.is_none());
        assert!(outcome.draft_reply.contains(GENERIC_CUSTOMER));
        // Fetch never ran: user message, classify note, reply only.
        assert_eq!(outcome.conversation.len(), 3);
        assert!(outcome
            .conversation
            .iter()
            .all(|m| m.role != MessageRole::Tool));
    }

    #[tokio::test]
    async fn test_empty_ticket_text() {
        let pipeline = pipeline_with(vec![]);
        let outcome = pipeline.run(input("", None)).await.unwrap();

        assert_eq!(outcome.issue_type, IssueType::Unclassified);
        assert!(outcome.evidence.is_empty());
        assert!(outcome.draft_reply.contains("reviewing your request"));
        assert!(outcome.draft_reply.contains(GENERIC_ORDER_REF));
        assert_eq!(outcome.recommendation, "Escalate to human agent for review");
    }

    #[tokio::test]
    async fn test_unknown_order_id_is_not_fatal() {
        let pipeline = pipeline_with(vec![seed_order("ORD1001", "Alice Johnson")]);
        let outcome = pipeline
            .run(input("I want a refund for ORD9999", None))
            .await
            .unwrap();

        assert_eq!(outcome.order_id.as_deref(), Some("ORD9999"));
        assert_eq!(outcome.issue_type, IssueType::RefundRequest);
        assert!(outcome.order.is_none());
        assert!(outcome.draft_reply.contains(GENERIC_CUSTOMER));
        assert!(outcome.draft_reply.contains("ORD9999"));
        // The miss shows up in the log as a tool message.
        assert!(outcome
            .conversation
            .iter()
            .any(|m| m.role == MessageRole::Tool && m.text.contains("not found")));
    }

    #[tokio::test]
    async fn test_caller_supplied_id_takes_precedence() {
        let pipeline = pipeline_with(vec![
            seed_order("ORD0001", "Priya Patel"),
            seed_order("ORD0002", "Sam Lee"),
        ]);
        let outcome = pipeline
            .run(input("Please check ORD0002 for me", Some("ORD0001")))
            .await
            .unwrap();

        assert_eq!(outcome.order_id.as_deref(), Some("ORD0001"));
        assert_eq!(
            outcome.order.as_ref().map(|o| o.customer_name.as_str()),
            Some("Priya Patel")
        );
    }

    #[tokio::test]
    async fn test_fetched_order_feeds_reply() {
        let pipeline = pipeline_with(vec![seed_order("ORD1004", "Miguel Alvarez")]);
        let outcome = pipeline
            .run(input("I want a refund for ORD1004.", None))
            .await
            .unwrap();

        assert_eq!(outcome.issue_type, IssueType::RefundRequest);
        assert!(outcome.draft_reply.contains("Miguel Alvarez"));
        assert_eq!(outcome.recommendation, "Process refund for the customer");
    }

    #[tokio::test]
    async fn test_run_and_run_direct_are_equivalent() {
        let orders = vec![
            seed_order("ORD1001", "Alice Johnson"),
            seed_order("ORD1004", "Miguel Alvarez"),
        ];
        let cases = [
            ("Hi, my order ORD1001 arrived broken. I need help.", None),
            ("I want a refund for ORD1004.", None),
            ("My package is late, no idea what my order number is.", None),
            ("", None),
            ("ORD9999 never arrived", None),
            ("check this one", Some("ORD1001")),
        ];

        for (text, order_id) in cases {
            let pipeline = pipeline_with(orders.clone());
            let via_machine = pipeline.run(input(text, order_id)).await.unwrap();
            let direct = pipeline.run_direct(input(text, order_id)).await.unwrap();

            assert_eq!(via_machine.order_id, direct.order_id, "case: {:?}", text);
            assert_eq!(via_machine.issue_type, direct.issue_type);
            assert_eq!(via_machine.evidence, direct.evidence);
            assert_eq!(via_machine.order, direct.order);
            assert_eq!(via_machine.recommendation, direct.recommendation);
            assert_eq!(via_machine.draft_reply, direct.draft_reply);
            assert_eq!(via_machine.conversation, direct.conversation);
        }
    }

    #[tokio::test]
    async fn test_conversation_message_order() {
        let pipeline = pipeline_with(vec![seed_order("ORD1001", "Alice Johnson")]);
        let outcome = pipeline
            .run(input("ORD1001 arrived broken", None))
            .await
            .unwrap();

        let roles: Vec<MessageRole> = outcome.conversation.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::Tool,
                MessageRole::Assistant,
            ]
        );
        // The final assistant message is the drafted reply.
        assert_eq!(
            outcome.conversation.last().map(|m| m.text.as_str()),
            Some(outcome.draft_reply.as_str())
        );
    }
}
