//! `friends show` command

use friends_core::error::{FriendsError, Result};
use friends_core::format::OutputFormat;
use friends_core::graph::{Graph, PersonResult};

use super::dispatch::CommandContext;

pub fn execute(ctx: &CommandContext, graph: &Graph, name: &str) -> Result<()> {
    let name = ctx.normalize(name);
    let result =
        PersonResult::from_graph(graph, &name).ok_or_else(|| FriendsError::person_not_found(&name))?;

    match ctx.format() {
        OutputFormat::Human => {
            println!("{}", result.name);
            match &result.school {
                Some(school) => println!("School: {}", school),
                None => println!("School: -"),
            }
            if result.friends.is_empty() {
                println!("Friends: (none)");
            } else {
                println!("Friends: {}", result.friends.join(", "));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}
