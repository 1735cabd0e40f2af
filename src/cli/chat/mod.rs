//! Chat command - conversational terminal front-end
//!
//! Reads ticket text line-by-line, runs the triage pipeline in-process, and
//! prints the classified issue, evidence, order context, recommendation,
//! and drafted reply after each turn.

use std::io::{self, BufRead, Write};

use crate::config::AppConfig;
use crate::domain::triage::{TriageInput, TriageOutcome};
use crate::infrastructure::logging;

/// Run the interactive chat loop
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    // Keep the terminal quiet unless asked otherwise.
    logging::init_logging(&logging::LoggingConfig {
        level: std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()),
        format: config.logging.format.clone(),
    });

    let state = crate::create_app_state(&config)?;

    println!("Ticket Triage Chat");
    println!("Describe your issue and include your order ID (e.g. ORD1001).");
    println!("Sample orders:");
    for order in state.order_store.list().await?.iter().take(6) {
        println!("  {}  {}", order.order_id, order.customer_name);
    }
    println!("Type 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        let ticket_text = line.trim();
        if ticket_text.eq_ignore_ascii_case("quit") || ticket_text.eq_ignore_ascii_case("exit") {
            break;
        }

        let outcome = state
            .pipeline
            .run(TriageInput {
                ticket_text: ticket_text.to_string(),
                order_id: None,
            })
            .await?;

        print_outcome(&outcome);
    }

    Ok(())
}

fn print_outcome(outcome: &TriageOutcome) {
    println!();
    println!("Issue classified: {}", outcome.issue_type);

    if outcome.evidence.is_empty() {
        println!("Evidence:         (no matching keywords)");
    } else {
        println!("Evidence:         {}", outcome.evidence.join(", "));
    }

    match (&outcome.order_id, &outcome.order) {
        (Some(id), Some(order)) => {
            println!(
                "Order:            {} - {} - {}",
                id, order.customer_name, order.status
            );
            let items: Vec<String> = order
                .items
                .iter()
                .map(|i| format!("{} (x{})", i.name, i.quantity))
                .collect();
            println!("Items:            {}", items.join(", "));
        }
        (Some(id), None) => {
            println!("Order:            {} - not found in dataset", id);
        }
        (None, _) => {
            println!("Order:            N/A - no order ID found in message");
        }
    }

    println!("Recommendation:   {}", outcome.recommendation);
    println!("Draft reply:");
    println!("  {}", outcome.draft_reply);
    println!();
}
