//! Chain reconstruction from a BFS predecessor table

use crate::graph::Graph;

/// Walk predecessor links from `from` until `to` is reached, collecting names.
///
/// `predecessors` must come from a search seeded at `to` that discovered
/// `from`, so every link on the walk is present.
pub(super) fn reconstruct_chain(
    graph: &Graph,
    from: usize,
    to: usize,
    predecessors: &[Option<usize>],
) -> Vec<String> {
    let mut chain = vec![graph.person(from).name.clone()];
    let mut current = from;

    while current != to {
        match predecessors[current] {
            Some(pred) => {
                chain.push(graph.person(pred).name.clone());
                current = pred;
            }
            None => break,
        }
    }

    chain
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::testing::path_graph;

    #[test]
    fn test_reconstruct_follows_links_to_source() {
        let graph = path_graph();
        // search seeded at d (3): c <- d, b <- c, a <- b
        let predecessors = vec![Some(1), Some(2), Some(3), None];
        let chain = reconstruct_chain(&graph, 0, 3, &predecessors);
        assert_eq!(chain, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_reconstruct_single_hop() {
        let graph = path_graph();
        let predecessors = vec![None, None, Some(1), None];
        assert_eq!(reconstruct_chain(&graph, 2, 1, &predecessors), vec!["c", "b"]);
    }
}
