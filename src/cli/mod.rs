//! CLI argument parsing for friends
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use friends_core::format::OutputFormat;
use parse::parse_format;

/// Friends - query a social graph for chains, cliques and connectors
#[derive(Parser, Debug)]
#[command(name = "friends")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file to load
    #[arg(long, short, global = true, env = "FRIENDS_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "FRIENDS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: human or json [default: human, or `format` from the config file]
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `trace`, `friends_core=debug`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest chain of acquaintances from one person to another
    Chain {
        /// Person the chain starts at
        from: String,

        /// Person the chain ends at
        to: String,
    },

    /// Cliques of students at a school
    Cliques {
        /// School name
        school: String,
    },

    /// People whose removal would split the graph
    Connectors,

    /// Show a person and their friends
    Show {
        /// Person name
        name: String,
    },
}
