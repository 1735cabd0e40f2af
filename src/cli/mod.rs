//! CLI module for the Ticket Triage API
//!
//! Provides subcommands for the two front-ends:
//! - `serve`: HTTP API server
//! - `chat`: conversational terminal front-end

pub mod chat;
pub mod serve;

use clap::{Parser, Subcommand};

/// Ticket Triage API - Classifies support tickets and drafts replies
#[derive(Parser)]
#[command(name = "ticket-triage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server
    Serve,

    /// Triage tickets interactively from the terminal
    Chat,
}
