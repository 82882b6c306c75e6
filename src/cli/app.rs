//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use super::commands;
use ticketgate::output::OutputMode;

/// ticketgate - Ticket references in commit messages, enforced by git hooks
#[derive(Parser, Debug)]
#[command(
    name = "ticketgate",
    version,
    about = "Reject commits whose messages do not reference the branch's ticket",
    long_about = "Enforce ticket references in commit messages via git hooks.\n\n\
                  A commit message must start with the ticket id of its branch\n\
                  (\"ABC-123: message\"), or with \"No-ticket\" on branches without one."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install ticketgate hooks in the current repository
    Init {
        /// Remove existing ticketgate hook sections before installing
        #[arg(short, long)]
        force: bool,

        /// Install the server-side pre-receive hook instead of commit-msg
        #[arg(long)]
        server: bool,
    },

    /// Classify a commit message against a branch name
    Classify {
        /// The commit message
        message: String,

        /// Branch name (defaults to the current branch)
        #[arg(short, long)]
        branch: Option<String>,
    },

    /// Check a commit message file (used by the commit-msg hook)
    #[command(hide = true)]
    CommitMsg {
        /// Path to commit message file
        commit_msg_file: PathBuf,

        /// Branch name (defaults to the current branch)
        #[arg(short, long)]
        branch: Option<String>,
    },

    /// Check the commits of a push read from stdin (used by the pre-receive hook)
    #[command(hide = true)]
    PreReceive,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Init { force, server }) => commands::init(force, server, output_mode),
        Some(Command::Classify { message, branch }) => {
            commands::classify(&message, branch.as_deref(), output_mode)
        },
        Some(Command::CommitMsg {
            commit_msg_file,
            branch,
        }) => commands::commit_msg(&commit_msg_file, branch.as_deref(), output_mode),
        Some(Command::PreReceive) => commands::pre_receive(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": ticketgate::VERSION
                    })
                );
            } else {
                println!("ticketgate v{}", ticketgate::VERSION);
            }
            Ok(ExitCode::SUCCESS)
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": ticketgate::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("ticketgate v{}", ticketgate::VERSION);
                println!("\nRun 'ticketgate --help' for usage");
                println!("Run 'ticketgate init' to install the commit-msg hook");
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
