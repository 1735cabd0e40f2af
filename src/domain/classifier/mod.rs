//! Issue classifier - keyword-evidence mapping from ticket text to a category
//!
//! Matching is deliberately loose: case-insensitive substring containment
//! with no word boundaries, so "late" matches inside "lately". Correctness
//! is parity with this simple rule, not linguistic accuracy.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Issue category assigned to a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    RefundRequest,
    DamagedItem,
    LateDelivery,
    MissingItem,
    DuplicateCharge,
    WrongItem,
    DefectiveProduct,
    /// Designated category when no rule matches
    Unclassified,
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::RefundRequest => "refund_request",
            Self::DamagedItem => "damaged_item",
            Self::LateDelivery => "late_delivery",
            Self::MissingItem => "missing_item",
            Self::DuplicateCharge => "duplicate_charge",
            Self::WrongItem => "wrong_item",
            Self::DefectiveProduct => "defective_product",
            Self::Unclassified => "unclassified",
        };
        write!(f, "{}", label)
    }
}

impl IssueType {
    /// Parse a snake_case label; unknown labels yield `None`
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "refund_request" => Some(Self::RefundRequest),
            "damaged_item" => Some(Self::DamagedItem),
            "late_delivery" => Some(Self::LateDelivery),
            "missing_item" => Some(Self::MissingItem),
            "duplicate_charge" => Some(Self::DuplicateCharge),
            "wrong_item" => Some(Self::WrongItem),
            "defective_product" => Some(Self::DefectiveProduct),
            "unclassified" => Some(Self::Unclassified),
            _ => None,
        }
    }
}

/// A classification rule: category plus its trigger keywords
#[derive(Debug, Clone)]
pub struct IssueRule {
    pub issue_type: IssueType,
    pub keywords: &'static [&'static str],
}

/// Static rule table, in priority order (earliest rule wins ties)
pub static ISSUE_RULES: Lazy<Vec<IssueRule>> = Lazy::new(|| {
    vec![
        IssueRule {
            issue_type: IssueType::RefundRequest,
            keywords: &["refund", "money back", "return my money"],
        },
        IssueRule {
            issue_type: IssueType::DamagedItem,
            keywords: &["damaged", "broken", "cracked", "shattered", "dented"],
        },
        IssueRule {
            issue_type: IssueType::LateDelivery,
            keywords: &["late", "delayed", "hasn't arrived", "has not arrived", "where is my"],
        },
        IssueRule {
            issue_type: IssueType::MissingItem,
            keywords: &["missing", "not included", "incomplete", "only received"],
        },
        IssueRule {
            issue_type: IssueType::DuplicateCharge,
            keywords: &["charged twice", "double charged", "duplicate charge", "two charges"],
        },
        IssueRule {
            issue_type: IssueType::WrongItem,
            keywords: &["wrong item", "wrong product", "different item", "not what i ordered"],
        },
        IssueRule {
            issue_type: IssueType::DefectiveProduct,
            keywords: &["defective", "doesn't work", "does not work", "not working", "faulty"],
        },
    ]
});

/// Classify ticket text against the static rule table
///
/// Returns the winning category together with the matched keywords, in
/// rule-table order. The rule with the most matched keywords wins; ties go
/// to the earliest-defined rule. No match at all (including empty text)
/// yields `Unclassified` with empty evidence.
pub fn classify(ticket_text: &str) -> (IssueType, Vec<String>) {
    let text = ticket_text.to_lowercase();
    if text.trim().is_empty() {
        return (IssueType::Unclassified, Vec::new());
    }

    let mut best: Option<(IssueType, Vec<String>)> = None;

    for rule in ISSUE_RULES.iter() {
        let matched: Vec<String> = rule
            .keywords
            .iter()
            .filter(|kw| text.contains(&kw.to_lowercase()))
            .map(|kw| kw.to_string())
            .collect();

        if matched.is_empty() {
            continue;
        }

        // Strictly-greater keeps the earliest rule on ties.
        let better = match &best {
            Some((_, evidence)) => matched.len() > evidence.len(),
            None => true,
        };

        if better {
            best = Some((rule.issue_type, matched));
        }
    }

    best.unwrap_or((IssueType::Unclassified, Vec::new()))
}
