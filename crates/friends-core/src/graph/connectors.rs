//! Connectors (articulation points)
//!
//! A connector is a person whose removal splits part of the graph off from
//! the rest. Detection is the classic discovery-number / low-link depth-first
//! search, run iteratively over an explicit stack of frames so that deep
//! graphs cannot overflow the call stack.

use std::collections::BTreeSet;
use std::time::Instant;

use crate::graph::Graph;
use crate::trace_time;

/// One level of the depth-first descent
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    person: usize,
    /// Position of the next edge to examine in `person`'s adjacency list
    cursor: usize,
    /// Person we descended from, `None` for the search root
    parent: Option<usize>,
    /// Whether the edge back to `parent` matching the descending edge has
    /// been skipped. Any further edge to `parent` is a parallel edge and
    /// counts as a genuine back edge.
    parent_edge_consumed: bool,
}

impl Frame {
    fn new(person: usize, parent: Option<usize>) -> Self {
        Frame {
            person,
            cursor: 0,
            parent,
            parent_edge_consumed: false,
        }
    }
}

/// Outcome of examining the top frame once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// An edge was consumed without descending
    Continue,
    /// An unvisited person was discovered and pushed
    Descend(usize),
    /// The top frame ran out of edges and was popped
    Backtrack { child: usize, parent: Option<usize> },
    /// The stack is empty
    Done,
}

/// Per-call traversal state. Nothing here is ever written into the graph.
struct ConnectorSearch<'g> {
    graph: &'g Graph,
    disc: Vec<Option<usize>>,
    low: Vec<usize>,
    is_connector: Vec<bool>,
    stack: Vec<Frame>,
    next_disc: usize,
    /// Root of the component currently being explored
    root: usize,
    /// Number of tree children hanging off `root`
    root_children: usize,
}

impl<'g> ConnectorSearch<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.len();
        ConnectorSearch {
            graph,
            disc: vec![None; n],
            low: vec![0; n],
            is_connector: vec![false; n],
            stack: Vec::new(),
            next_disc: 0,
            root: 0,
            root_children: 0,
        }
    }

    fn is_visited(&self, person: usize) -> bool {
        self.disc[person].is_some()
    }

    /// Number `person` and push a frame for it
    fn discover(&mut self, person: usize, parent: Option<usize>) {
        self.disc[person] = Some(self.next_disc);
        self.low[person] = self.next_disc;
        self.next_disc += 1;
        self.stack.push(Frame::new(person, parent));
    }

    /// Examine the next edge of the top frame, or pop it if it has none left
    fn step(&mut self) -> Step {
        let Some(frame) = self.stack.last_mut() else {
            return Step::Done;
        };

        let graph = self.graph;
        let person = frame.person;
        let Some(friend) = graph.person(person).friends.get(frame.cursor) else {
            let parent = frame.parent;
            self.stack.pop();
            return Step::Backtrack {
                child: person,
                parent,
            };
        };
        frame.cursor += 1;

        let next = friend.target;
        if Some(next) == frame.parent && !frame.parent_edge_consumed {
            frame.parent_edge_consumed = true;
            return Step::Continue;
        }

        match self.disc[next] {
            Some(next_disc) => {
                // back edge
                self.low[person] = self.low[person].min(next_disc);
                Step::Continue
            }
            None => {
                self.discover(next, Some(person));
                Step::Descend(next)
            }
        }
    }

    /// Propagate `low` from a finished child and apply the connector rule
    fn backtrack(&mut self, child: usize, parent: usize) {
        self.low[parent] = self.low[parent].min(self.low[child]);

        if parent == self.root {
            self.root_children += 1;
        } else if self.disc[parent].is_some_and(|parent_disc| self.low[child] >= parent_disc) {
            self.is_connector[parent] = true;
        }
    }

    /// Explore the component containing `root`
    fn run_from(&mut self, root: usize) {
        self.root = root;
        self.root_children = 0;
        self.discover(root, None);

        loop {
            match self.step() {
                Step::Continue => {}
                Step::Descend(person) => tracing::trace!(person, "descend"),
                Step::Backtrack {
                    child,
                    parent: Some(parent),
                } => self.backtrack(child, parent),
                Step::Backtrack { parent: None, .. } | Step::Done => break,
            }
        }

        if self.root_children > 1 {
            self.is_connector[root] = true;
        }
    }

    fn run(mut self) -> BTreeSet<String> {
        let mut components = 0usize;
        for root in 0..self.graph.len() {
            if !self.is_visited(root) {
                components += 1;
                self.run_from(root);
            }
        }
        tracing::debug!(components, "connector_search_complete");

        self.is_connector
            .iter()
            .enumerate()
            .filter(|(_, is_connector)| **is_connector)
            .map(|(idx, _)| self.graph.person(idx).name.clone())
            .collect()
    }
}

/// Find every connector in the graph.
///
/// Each component is searched independently and all connectors go into one
/// set. An empty graph, or one without cut vertices, yields an empty set.
#[tracing::instrument(skip(graph), fields(people = graph.len()))]
pub fn connectors(graph: &Graph) -> BTreeSet<String> {
    let start = Instant::now();
    let result = ConnectorSearch::new(graph).run();
    trace_time!(start, "connectors", count = result.len());
    result
}
