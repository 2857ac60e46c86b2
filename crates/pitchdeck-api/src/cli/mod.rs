//! CLI command definitions for the `pitchdeck` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod generate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pitchdeck_infra::config::DEFAULT_CONFIG_FILE;
use pitchdeck_types::idea::IdeaFields;

/// Turn a startup idea into an eight-slide pitch deck.
#[derive(Parser)]
#[command(name = "pitchdeck", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Export spans to stdout via OpenTelemetry.
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (JSON API plus the form and viewer pages).
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 3000)]
        port: u16,

        /// Host address to bind to.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Generate one deck and print it.
    Generate(GenerateArgs),
}

/// Idea fields for a one-off generation.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Startup name.
    #[arg(long)]
    pub name: String,

    /// One-liner / mission.
    #[arg(long)]
    pub oneliner: String,

    /// Problem you're solving.
    #[arg(long)]
    pub problem: String,

    /// Core features.
    #[arg(long)]
    pub features: String,

    /// Business model.
    #[arg(long)]
    pub business_model: String,

    /// Known competitors.
    #[arg(long)]
    pub competitors: Option<String>,
}

impl From<GenerateArgs> for IdeaFields {
    fn from(args: GenerateArgs) -> Self {
        IdeaFields {
            name: Some(args.name),
            oneliner: Some(args.oneliner),
            problem: Some(args.problem),
            features: Some(args.features),
            business_model: Some(args.business_model),
            competitors: args.competitors,
        }
    }
}
