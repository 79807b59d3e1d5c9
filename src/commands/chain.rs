//! `friends chain` command

use friends_core::error::Result;
use friends_core::format::OutputFormat;
use friends_core::graph::{shortest_chain, ChainResult, Graph};

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let from = ctx.normalize(from);
    let to = ctx.normalize(to);

    let result = ChainResult::new(&from, &to, shortest_chain(graph, &from, &to));
    tracing::debug!(found = result.found, length = result.length, "chain");

    match ctx.format() {
        OutputFormat::Human => output_human(ctx, &result),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, result: &ChainResult) {
    if result.found {
        println!("{}", result.chain.join(" -> "));
        if !ctx.cli.quiet {
            println!("Length: {}", result.length);
        }
    } else if !ctx.cli.quiet {
        println!("No chain from {} to {}", result.from, result.to);
    }
}
