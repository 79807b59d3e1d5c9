//! Graph construction
//!
//! `GraphBuilder` owns the arena while it is being filled and hands out a
//! read-only `Graph` from `build`. Friendships are always inserted in both
//! directions, which keeps the symmetry invariant the queries rely on.

use std::collections::HashMap;

use crate::error::{FriendsError, Result};
use crate::graph::types::{Friend, Graph, Person};

#[derive(Debug, Default)]
pub struct GraphBuilder {
    members: Vec<Person>,
    index: HashMap<String, usize>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` people
    pub fn with_capacity(capacity: usize) -> Self {
        GraphBuilder {
            members: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Add a person and return their index
    pub fn add_person(&mut self, name: impl Into<String>, school: Option<String>) -> Result<usize> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(FriendsError::DuplicatePerson { name });
        }

        let idx = self.members.len();
        self.index.insert(name.clone(), idx);
        self.members.push(Person::new(name, school));
        Ok(idx)
    }

    /// Record a friendship between two existing people.
    ///
    /// One edge is appended to each endpoint's adjacency list. Repeated calls
    /// produce parallel edges; a self-friendship lands twice in the same list.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<()> {
        let a_idx = self.require(a)?;
        let b_idx = self.require(b)?;

        self.members[a_idx].friends.push(Friend { target: b_idx });
        self.members[b_idx].friends.push(Friend { target: a_idx });
        Ok(())
    }

    /// Number of people added so far
    pub fn people_count(&self) -> usize {
        self.members.len()
    }

    pub fn build(self) -> Graph {
        tracing::debug!(people = self.members.len(), "graph_built");
        Graph {
            members: self.members,
            index: self.index,
        }
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| FriendsError::person_not_found(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_person_assigns_sequential_indices() {
        let mut builder = GraphBuilder::new();
        assert_eq!(builder.add_person("sam", None).unwrap(), 0);
        assert_eq!(
            builder.add_person("jane", Some("rutgers".into())).unwrap(),
            1
        );
        assert_eq!(builder.people_count(), 2);

        let graph = builder.build();
        assert_eq!(graph.index_of("jane"), Some(1));
        assert_eq!(graph.person(1).school.as_deref(), Some("rutgers"));
    }

    #[test]
    fn test_duplicate_person_rejected() {
        let mut builder = GraphBuilder::new();
        builder.add_person("sam", None).unwrap();
        let err = builder.add_person("sam", None).unwrap_err();
        assert!(matches!(err, FriendsError::DuplicatePerson { ref name } if name == "sam"));
        assert_eq!(builder.people_count(), 1);
    }

    #[test]
    fn test_friendship_is_symmetric() {
        let mut builder = GraphBuilder::new();
        builder.add_person("sam", None).unwrap();
        builder.add_person("jane", None).unwrap();
        builder.add_friendship("sam", "jane").unwrap();

        let graph = builder.build();
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![0]);
    }

    #[test]
    fn test_friendship_with_unknown_person() {
        let mut builder = GraphBuilder::new();
        builder.add_person("sam", None).unwrap();
        let err = builder.add_friendship("sam", "ghost").unwrap_err();
        assert!(matches!(err, FriendsError::PersonNotFound { ref name } if name == "ghost"));

        // Nothing was half-inserted
        let graph = builder.build();
        assert!(graph.person(0).friends.is_empty());
    }

    #[test]
    fn test_self_friendship_appears_twice() {
        let mut builder = GraphBuilder::new();
        builder.add_person("sam", None).unwrap();
        builder.add_friendship("sam", "sam").unwrap();

        let graph = builder.build();
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![0, 0]);
    }
}
