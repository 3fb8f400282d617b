//! Command-line interface for tickdeck
//!
//! A thin presentation layer: commands parse arguments, drive the sync
//! layer, and print store/query output. No business logic lives here.

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for REST ticket trackers
#[derive(Parser)]
#[command(name = "tickdeck", version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (defaults to the per-user location)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Base URL of the ticket API, overriding config and environment
    #[arg(long, global = true, env = "TICKDECK_API__BASE_URL", value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List tickets, optionally filtered and searched
    List {
        /// Status filter: all, completed, or incomplete
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Case-insensitive substring to match against descriptions
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one ticket
    Show {
        /// Ticket id
        ticket: i64,
    },

    /// Create a new ticket
    New {
        /// Ticket description
        description: String,
    },

    /// Assign a ticket to a user
    Assign {
        /// Ticket id
        ticket: i64,
        /// User id
        user: i64,
    },

    /// Clear a ticket's assignee
    Unassign {
        /// Ticket id
        ticket: i64,
    },

    /// Mark a ticket completed
    Done {
        /// Ticket id
        ticket: i64,
    },

    /// Mark a completed ticket incomplete again
    Reopen {
        /// Ticket id
        ticket: i64,
    },

    /// List users
    Users,
}
