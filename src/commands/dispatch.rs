//! Command dispatch logic for friends

use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::load::load_graph;
use friends_core::config::Config;
use friends_core::error::{FriendsError, Result};
use friends_core::format::OutputFormat;
use friends_core::graph::Graph;
use tracing::debug;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// Output format: `--format` wins over the config file
    pub fn format(&self) -> OutputFormat {
        self.cli.format.unwrap_or(self.config.format)
    }

    /// Graph file: `--graph` / `FRIENDS_GRAPH` wins over the config file
    pub fn graph_path(&self) -> Result<PathBuf> {
        self.cli
            .graph
            .clone()
            .or_else(|| self.config.graph.clone())
            .ok_or(FriendsError::GraphFileNotSet)
    }

    pub fn load_graph(&self) -> Result<Graph> {
        let path = self.graph_path()?;
        let graph = load_graph(&path, &self.config)?;
        debug!(elapsed = ?self.start.elapsed(), "load_graph");
        Ok(graph)
    }

    /// Normalize a name given on the command line the same way the loader does
    pub fn normalize(&self, name: &str) -> String {
        self.config.normalize(name)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("friends {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Query a social graph for chains, cliques and connectors.");
        println!();
        println!("Run `friends --help` for usage information.");
        Ok(())
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let graph = ctx.load_graph()?;
        match self {
            Commands::Chain { from, to } => super::chain::execute(ctx, &graph, from, to),
            Commands::Cliques { school } => super::cliques::execute(ctx, &graph, school),
            Commands::Connectors => super::connectors::execute(ctx, &graph),
            Commands::Show { name } => super::show::execute(ctx, &graph, name),
        }
    }
}
