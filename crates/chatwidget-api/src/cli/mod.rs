//! CLI command definitions for the `chatwidget` binary.
//!
//! The `chat`, `ask` and `quick` commands stand in for the widget panel and
//! drive the reply resolver; `serve` runs the reply service the widget posts to.

pub mod ask;
pub mod chat;
pub mod resolver;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use chatwidget_types::topic::Topic;

/// Restaurant chat widget and its reply service.
#[derive(Parser)]
#[command(name = "chatwidget", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Widget config file (TOML).
    #[arg(long, global = true, env = "CHATWIDGET_CONFIG", default_value = "chatwidget.toml")]
    pub config: PathBuf,

    /// Answer locally even if the config enables the remote backend.
    #[arg(long, global = true)]
    pub local: bool,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session.
    Chat,

    /// Ask a single question and print the reply.
    Ask {
        /// Question text.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Send a quick-reply topic (hours, menu, directions, vegetarian, call).
    Quick {
        /// Topic key.
        topic: Topic,
    },

    /// Start the reply service.
    Serve {
        /// Port to listen on (overrides the config).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides the config).
        #[arg(long)]
        host: Option<String>,

        /// Restaurant profile YAML (overrides the config).
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
