//! `friends cliques` command

use friends_core::error::Result;
use friends_core::format::OutputFormat;
use friends_core::graph::{cliques, CliquesResult, Graph};

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, graph: &Graph, school: &str) -> Result<()> {
    let school = ctx.normalize(school);
    let result = CliquesResult::new(&school, cliques(graph, &school));
    tracing::debug!(found = result.found, count = result.cliques.len(), "cliques");

    match ctx.format() {
        OutputFormat::Human => {
            if !result.found {
                if !ctx.cli.quiet {
                    println!("No students at {}", result.school);
                }
                return Ok(());
            }
            for (i, clique) in result.cliques.iter().enumerate() {
                println!("clique {}: {}", i + 1, clique.join(", "));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}
