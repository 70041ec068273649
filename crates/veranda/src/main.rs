// SPDX-FileCopyrightText: 2026 Veranda Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Veranda - guided-conversation lead capture for a real-estate development.
//!
//! This is the binary entry point for the Veranda CLI.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod chat;
mod doctor;
mod leads;

/// Veranda - guided-conversation lead capture.
#[derive(Parser, Debug)]
#[command(name = "veranda", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the guided conversation in the terminal.
    Chat,
    /// Work with stored leads (read side).
    Leads {
        #[command(subcommand)]
        command: LeadsCommands,
    },
    /// Run diagnostic checks against the configuration and collaborators.
    Doctor {
        /// Also run connectivity checks against the collaborators.
        #[arg(long)]
        deep: bool,
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
}

/// Subcommands under `veranda leads`.
#[derive(Subcommand, Debug)]
enum LeadsCommands {
    /// Fetch stored leads and print a summary table.
    List {
        /// Filter by name, email, or phone substring.
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Fetch stored leads and export them as CSV.
    Export {
        /// Filter by name, email, or phone substring.
        #[arg(long, default_value = "")]
        query: String,
        /// Output path (defaults to veranda-leads-<date>.csv).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match veranda_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            veranda_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.concierge.log_level);

    let result = match cli.command {
        Some(Commands::Chat) => chat::run_chat(config).await,
        Some(Commands::Leads { command }) => match command {
            LeadsCommands::List { query } => leads::run_list(&config, &query).await,
            LeadsCommands::Export { query, output } => {
                leads::run_export(&config, &query, output).await
            }
        },
        Some(Commands::Doctor { deep, plain }) => doctor::run_doctor(&config, deep, plain).await,
        None => {
            println!("veranda: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber from the configured log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("veranda={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
