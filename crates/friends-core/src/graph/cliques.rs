//! Same-school cliques
//!
//! A clique here is a connected component of the subgraph induced by the
//! students of one school, not a complete subgraph.

use std::collections::VecDeque;
use std::time::Instant;

use crate::graph::Graph;
use crate::trace_time;

/// Breadth-first expansion from `start` that only steps onto students of
/// `school`. Every discovered person is marked in `visited`.
fn expand_clique(graph: &Graph, start: usize, school: &str, visited: &mut [bool]) -> Vec<String> {
    let mut group = vec![graph.person(start).name.clone()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(current) {
            if visited[neighbor] || !graph.person(neighbor).attends(school) {
                continue;
            }
            visited[neighbor] = true;
            group.push(graph.person(neighbor).name.clone());
            queue.push_back(neighbor);
        }
    }

    group
}

/// Find all cliques of students at `school`.
///
/// Groups are disjoint and together cover every student of `school`. Each
/// group lists its members in discovery order; groups are ordered by their
/// first member's position in the graph. Returns `None` if nobody attends
/// `school`.
#[tracing::instrument(skip(graph), fields(people = graph.len()))]
pub fn cliques(graph: &Graph, school: &str) -> Option<Vec<Vec<String>>> {
    let start = Instant::now();
    let mut visited = vec![false; graph.len()];
    let mut groups = Vec::new();

    for (idx, person) in graph.people().iter().enumerate() {
        if visited[idx] || !person.attends(school) {
            continue;
        }
        groups.push(expand_clique(graph, idx, school, &mut visited));
    }

    trace_time!(start, "cliques", groups = groups.len());

    if groups.is_empty() {
        tracing::debug!("no_students_at_school");
        None
    } else {
        Some(groups)
    }
}
