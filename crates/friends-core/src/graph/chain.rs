mod path;

use std::collections::VecDeque;
use std::time::Instant;

use crate::graph::Graph;
use crate::trace_time;

/// Breadth-first search from `source` that stops as soon as `target` is
/// discovered. Returns the predecessor table if `target` was reached.
fn bfs_search(graph: &Graph, source: usize, target: usize) -> Option<Vec<Option<usize>>> {
    let mut visited = vec![false; graph.len()];
    let mut predecessors: Vec<Option<usize>> = vec![None; graph.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[source] = true;
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(current) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            predecessors[neighbor] = Some(current);

            if neighbor == target {
                return Some(predecessors);
            }
            queue.push_back(neighbor);
        }
    }

    tracing::debug!(
        visited = visited.iter().filter(|v| **v).count(),
        "chain_frontier_exhausted"
    );
    None
}

/// Find the shortest chain of acquaintances from `p1` to `p2`.
///
/// The chain starts with `p1`, ends with `p2`, and every consecutive pair
/// in it is a friendship. Returns `None` when `p1 == p2`, when either name
/// is unknown, or when the two people are in different components.
///
/// The search runs backwards from `p2`, so walking predecessor links from
/// `p1` yields the chain already in `p1 -> p2` order.
#[tracing::instrument(skip(graph), fields(people = graph.len()))]
pub fn shortest_chain(graph: &Graph, p1: &str, p2: &str) -> Option<Vec<String>> {
    if p1 == p2 {
        return None;
    }

    let start = Instant::now();
    let target = graph.index_of(p1)?;
    let source = graph.index_of(p2)?;

    let predecessors = bfs_search(graph, source, target)?;
    let chain = path::reconstruct_chain(graph, target, source, &predecessors);

    trace_time!(start, "shortest_chain", length = chain.len());
    Some(chain)
}
