//! Reply renderer - canned response templates and agent recommendations
//!
//! Rendering is plain string substitution over two fixed placeholders,
//! `{customer_name}` and `{order_id}`. The renderer is total: an unknown or
//! unclassified issue type falls back to the generic template and never
//! raises.

use once_cell::sync::Lazy;

use crate::domain::classifier::IssueType;
use crate::domain::order::Order;

/// Placeholder used when no order was resolved for the run
pub const GENERIC_CUSTOMER: &str = "valued customer";

/// Placeholder used when no order id is known
pub const GENERIC_ORDER_REF: &str = "your order";

/// A canned reply template with its fixed agent recommendation
#[derive(Debug, Clone)]
pub struct ReplyTemplate {
    pub issue_type: IssueType,
    pub template: &'static str,
    pub recommendation: &'static str,
}

/// Fallback template for unclassified or unknown issue types
pub static GENERIC_TEMPLATE: Lazy<ReplyTemplate> = Lazy::new(|| ReplyTemplate {
    issue_type: IssueType::Unclassified,
    template: "Hi {customer_name}, thanks for reaching out about {order_id}. \
               We are reviewing your request and will get back to you shortly.",
    recommendation: "Escalate to human agent for review",
});

/// Static template table, one entry per classifiable issue type
pub static REPLY_TEMPLATES: Lazy<Vec<ReplyTemplate>> = Lazy::new(|| {
    vec![
        ReplyTemplate {
            issue_type: IssueType::RefundRequest,
            template: "Hi {customer_name}, we're sorry to hear you'd like a refund for \
                       {order_id}. We've started the refund review and will confirm within \
                       2 business days.",
            recommendation: "Process refund for the customer",
        },
        ReplyTemplate {
            issue_type: IssueType::DamagedItem,
            template: "Hi {customer_name}, we're sorry that {order_id} arrived damaged. \
                       A replacement is being arranged and we'll send tracking details soon.",
            recommendation: "Send replacement item to customer",
        },
        ReplyTemplate {
            issue_type: IssueType::LateDelivery,
            template: "Hi {customer_name}, we apologize for the delay with {order_id}. \
                       We're tracking the package and will share an updated delivery \
                       estimate shortly.",
            recommendation: "Track package and provide updated ETA",
        },
        ReplyTemplate {
            issue_type: IssueType::MissingItem,
            template: "Hi {customer_name}, we're sorry something was missing from \
                       {order_id}. We're investigating with the warehouse and will ship \
                       the missing item as soon as possible.",
            recommendation: "Investigate and ship missing item",
        },
        ReplyTemplate {
            issue_type: IssueType::DuplicateCharge,
            template: "Hi {customer_name}, thanks for flagging the duplicate charge on \
                       {order_id}. The extra charge will be refunded to your original \
                       payment method within 3-5 business days.",
            recommendation: "Refund the duplicate charge",
        },
        ReplyTemplate {
            issue_type: IssueType::WrongItem,
            template: "Hi {customer_name}, we're sorry you received the wrong item in \
                       {order_id}. We'll email you a prepaid return label and send the \
                       correct item right away.",
            recommendation: "Arrange return and send correct item",
        },
        ReplyTemplate {
            issue_type: IssueType::DefectiveProduct,
            template: "Hi {customer_name}, we're sorry the product from {order_id} isn't \
                       working as expected. It's covered under warranty and we'll replace \
                       it at no cost.",
            recommendation: "Honor warranty and replace product",
        },
    ]
});

/// Render the reply and recommendation for an issue type
///
/// `order` supplies the customer name when the lookup succeeded; `order_id`
/// is the resolved identifier, if any. Both are optional and the renderer
/// substitutes generic placeholders when they are absent.
pub fn render(
    issue_type: IssueType,
    order: Option<&Order>,
    order_id: Option<&str>,
) -> (String, String) {
    let entry = REPLY_TEMPLATES
        .iter()
        .find(|t| t.issue_type == issue_type)
        .unwrap_or(&*GENERIC_TEMPLATE);

    let customer_name = order
        .map(|o| o.customer_name.as_str())
        .unwrap_or(GENERIC_CUSTOMER);

    let order_ref = order
        .map(|o| o.order_id.as_str())
        .or(order_id)
        .unwrap_or(GENERIC_ORDER_REF);

    let reply = entry
        .template
        .replace("{customer_name}", customer_name)
        .replace("{order_id}", order_ref);

    (reply, entry.recommendation.to_string())
}
