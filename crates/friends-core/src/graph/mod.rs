//! Social graph and structural queries
//!
//! Provides the graph representation and the three queries run over it:
//! - `shortest_chain`: BFS shortest acquaintance chain between two people
//! - `cliques`: connected components restricted to one school
//! - `connectors`: articulation points (cut vertices) of the whole graph
//!
//! The graph is never mutated by a query. Every traversal keeps its own
//! visited sets, queues and stacks, so queries over a shared `&Graph` can run
//! concurrently and always return the same answer.

pub mod builder;
pub mod chain;
pub mod cliques;
pub mod connectors;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use builder::GraphBuilder;
pub use chain::shortest_chain;
pub use cliques::cliques;
pub use connectors::connectors;
pub use types::{
    ChainResult, CliquesResult, ConnectorsResult, Friend, Graph, Person, PersonResult,
};
