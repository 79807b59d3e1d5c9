//! Graph file loading
//!
//! File layout:
//!
//! ```text
//! <number of people>
//! <name>|y|<school>     one line per person (students)
//! <name>|n              one line per person (non-students)
//! <name1>|<name2>       one line per friendship, until end of file
//! ```
//!
//! Blank lines are skipped everywhere.

mod parsers;

use std::fs;
use std::path::Path;
use std::time::Instant;

use friends_core::config::Config;
use friends_core::error::{FriendsError, Result};
use friends_core::graph::{Graph, GraphBuilder};

use parsers::{parse_count_line, parse_friendship_line, parse_person_line};

/// Load a graph file from disk
#[tracing::instrument(skip(path, config), fields(path = %path.display()))]
pub fn load_graph(path: &Path, config: &Config) -> Result<Graph> {
    let start = Instant::now();
    let content = fs::read_to_string(path).map_err(|source| FriendsError::GraphFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_graph(&content, path, config)?;
    tracing::debug!(people = graph.len(), elapsed = ?start.elapsed(), "load_graph");
    Ok(graph)
}

/// Parse graph file contents; `path` is only used in error messages
pub fn parse_graph(content: &str, path: &Path, config: &Config) -> Result<Graph> {
    let normalize = |s: &str| config.normalize(s);
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let Some((count_line_no, count_line)) = lines.next() else {
        return Ok(Graph::default());
    };
    let count = parse_count_line(count_line)
        .map_err(|reason| FriendsError::invalid_graph(path, count_line_no, reason))?;

    // the header is untrusted; never reserve more slots than there are lines
    let mut builder = GraphBuilder::with_capacity(count.min(content.lines().count()));
    let mut last_line_no = count_line_no;

    for _ in 0..count {
        let Some((line_no, line)) = lines.next() else {
            return Err(FriendsError::invalid_graph(
                path,
                last_line_no,
                format!(
                    "expected {} people, found {}",
                    count,
                    builder.people_count()
                ),
            ));
        };
        last_line_no = line_no;

        let person = parse_person_line(line, normalize)
            .map_err(|reason| FriendsError::invalid_graph(path, line_no, reason))?;
        builder
            .add_person(person.name, person.school)
            .map_err(|e| FriendsError::invalid_graph(path, line_no, e.to_string()))?;
    }

    for (line_no, line) in lines {
        let edge = parse_friendship_line(line, normalize)
            .map_err(|reason| FriendsError::invalid_graph(path, line_no, reason))?;
        builder
            .add_friendship(&edge.a, &edge.b)
            .map_err(|e| FriendsError::invalid_graph(path, line_no, e.to_string()))?;
    }

    Ok(builder.build())
}
