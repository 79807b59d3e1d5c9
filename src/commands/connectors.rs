//! `friends connectors` command

use friends_core::error::Result;
use friends_core::format::OutputFormat;
use friends_core::graph::{connectors, ConnectorsResult, Graph};

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, graph: &Graph) -> Result<()> {
    let result = ConnectorsResult::new(connectors(graph));
    tracing::debug!(count = result.count, "connectors");

    match ctx.format() {
        OutputFormat::Human => {
            if result.connectors.is_empty() && !ctx.cli.quiet {
                println!("No connectors");
            }
            for name in &result.connectors {
                println!("{}", name);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}
