//! Triage domain - the pipeline state machine and its state record

pub mod pipeline;
pub mod state;

pub use pipeline::{extract_order_id, next, Stage, TriagePipeline};
pub use state::{Message, MessageRole, TriageInput, TriageOutcome, TriageState};
