//! tickdeck - Command-line client for REST ticket trackers
//!
//! This is the main entry point for the tickdeck CLI application. It
//! handles command-line argument parsing, configuration loading, and
//! dispatches to the appropriate command handlers.

use clap::Parser;
use std::process;
use tickdeck::cli::{Cli, Commands, OutputFormatter, handlers};
use tickdeck::config::ClientConfig;
use tickdeck::error::{Result, TickdeckError};
use tickdeck::sync::AppContext;

/// Main entry point for the tickdeck CLI
///
/// Parses command-line arguments and executes the requested command.
/// Handles errors gracefully and provides helpful error messages to users.
#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Configure output formatter based on flags
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    // Execute the command and handle errors
    if let Err(e) = run(cli, &formatter).await {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
///
/// Loads configuration, builds the app context, and dispatches to the
/// handler for the parsed command.
///
/// # Errors
///
/// Returns any error that occurs during command execution
async fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    // Set up logging if verbose mode is enabled
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    // Load configuration, with the CLI flags taking precedence
    let mut config = match &cli.config {
        Some(path) => ClientConfig::load_from(Some(path))?,
        None => ClientConfig::load()?,
    };
    if let Some(api_url) = &cli.api_url {
        config.api.base_url.clone_from(api_url);
    }

    let ctx = AppContext::new(&config)?;

    dispatch_command(cli.command, &ctx, formatter).await
}

/// Dispatch to the handler for a parsed command
async fn dispatch_command(
    command: Commands,
    ctx: &AppContext,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::List { filter, search } => {
            handlers::handle_list(ctx, &filter, search.as_deref(), formatter).await
        },
        Commands::Show { ticket } => handlers::handle_show(ctx, ticket, formatter).await,
        Commands::New { description } => handlers::handle_new(ctx, &description, formatter).await,
        Commands::Assign { ticket, user } => {
            handlers::handle_assign(ctx, ticket, user, formatter).await
        },
        Commands::Unassign { ticket } => handlers::handle_unassign(ctx, ticket, formatter).await,
        Commands::Done { ticket } => handlers::handle_done(ctx, ticket, formatter).await,
        Commands::Reopen { ticket } => handlers::handle_reopen(ctx, ticket, formatter).await,
        Commands::Users => handlers::handle_users(ctx, formatter).await,
    }
}

/// Print an error to the user, with a hint for the common cases
fn handle_error(error: &TickdeckError, formatter: &OutputFormatter) {
    formatter.error(&error.to_string());

    match error {
        TickdeckError::Transport { .. } => {
            formatter.info("Is the ticket API reachable? Check --api-url or the config file.");
        },
        TickdeckError::ApiStatus { status: 404, .. } => {
            formatter.info("The requested resource does not exist on the server.");
        },
        _ => {},
    }
}
