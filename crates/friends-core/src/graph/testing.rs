//! Graph fixtures shared by the query tests

use crate::graph::{Graph, GraphBuilder};

/// Build a graph from `(name, school)` pairs and friendship pairs
pub(crate) fn graph_from(people: &[(&str, Option<&str>)], edges: &[(&str, &str)]) -> Graph {
    let mut builder = GraphBuilder::with_capacity(people.len());
    for (name, school) in people {
        builder
            .add_person(*name, school.map(str::to_string))
            .unwrap();
    }
    for (a, b) in edges {
        builder.add_friendship(a, b).unwrap();
    }
    builder.build()
}

/// Build a graph of non-students from friendship pairs alone
pub(crate) fn graph_of(names: &[&str], edges: &[(&str, &str)]) -> Graph {
    let people: Vec<(&str, Option<&str>)> = names.iter().map(|name| (*name, None)).collect();
    graph_from(&people, edges)
}

/// Path graph a - b - c - d
pub(crate) fn path_graph() -> Graph {
    graph_of(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "d")])
}

/// Triangle b - c - d with pendants a off b and e off d
pub(crate) fn chord_graph() -> Graph {
    graph_of(
        &["a", "b", "c", "d", "e"],
        &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("b", "d")],
    )
}

/// Consecutive names in `chain` are all friends in `graph`
pub(crate) fn is_valid_chain(graph: &Graph, chain: &[String]) -> bool {
    chain.windows(2).all(|pair| {
        graph
            .friend_names(&pair[0])
            .is_some_and(|friends| friends.contains(&pair[1].as_str()))
    })
}
