use serde::Serialize;
use std::collections::HashMap;

/// A friendship edge, stored in the adjacency list of one endpoint and
/// pointing at the other endpoint by its index in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Friend {
    pub target: usize,
}

/// A person in the social graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    /// School attended, `None` for non-students
    pub school: Option<String>,
    /// Adjacency list in insertion order
    pub friends: Vec<Friend>,
}

impl Person {
    pub fn new(name: impl Into<String>, school: Option<String>) -> Self {
        Person {
            name: name.into(),
            school,
            friends: Vec::new(),
        }
    }

    /// Whether this person is a student at `school`
    pub fn attends(&self, school: &str) -> bool {
        self.school.as_deref() == Some(school)
    }
}

/// Undirected social graph stored as an arena of people.
///
/// Each friendship is stored twice, once in each endpoint's adjacency list.
/// Indices are stable for the lifetime of the graph and every edge target is
/// a valid index; `GraphBuilder` is the only way to construct one.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(crate) members: Vec<Person>,
    pub(crate) index: HashMap<String, usize>,
}

impl Graph {
    /// Number of people in the graph
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Look up a person by name
    pub fn lookup(&self, name: &str) -> Option<&Person> {
        self.index_of(name).map(|idx| &self.members[idx])
    }

    /// Index of a person by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Person at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn person(&self, index: usize) -> &Person {
        &self.members[index]
    }

    /// All people, in insertion order
    pub fn people(&self) -> &[Person] {
        &self.members
    }

    /// Indices of the friends of the person at `index`, in adjacency order
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        self.members[index].friends.iter().map(|friend| friend.target)
    }

    /// Names of the friends of `name`, in adjacency order
    pub fn friend_names(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.index_of(name)?;
        Some(
            self.neighbors(idx)
                .map(|target| self.members[target].name.as_str())
                .collect(),
        )
    }
}

/// Chain query result
#[derive(Debug, Clone, Serialize)]
pub struct ChainResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub chain: Vec<String>,
    /// Number of friendships along the chain
    pub length: usize,
}

impl ChainResult {
    pub fn new(from: &str, to: &str, chain: Option<Vec<String>>) -> Self {
        let chain = chain.unwrap_or_default();
        ChainResult {
            from: from.to_string(),
            to: to.to_string(),
            found: !chain.is_empty(),
            length: chain.len().saturating_sub(1),
            chain,
        }
    }
}

/// Cliques query result
#[derive(Debug, Clone, Serialize)]
pub struct CliquesResult {
    pub school: String,
    pub found: bool,
    pub cliques: Vec<Vec<String>>,
}

impl CliquesResult {
    pub fn new(school: &str, cliques: Option<Vec<Vec<String>>>) -> Self {
        CliquesResult {
            school: school.to_string(),
            found: cliques.is_some(),
            cliques: cliques.unwrap_or_default(),
        }
    }
}

/// Connectors query result
#[derive(Debug, Clone, Serialize)]
pub struct ConnectorsResult {
    pub count: usize,
    pub connectors: Vec<String>,
}

impl ConnectorsResult {
    pub fn new(connectors: impl IntoIterator<Item = String>) -> Self {
        let connectors: Vec<String> = connectors.into_iter().collect();
        ConnectorsResult {
            count: connectors.len(),
            connectors,
        }
    }
}

/// A single person with their friends
#[derive(Debug, Clone, Serialize)]
pub struct PersonResult {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school: Option<String>,
    pub friends: Vec<String>,
}

impl PersonResult {
    pub fn from_graph(graph: &Graph, name: &str) -> Option<Self> {
        let person = graph.lookup(name)?;
        let friends = graph
            .friend_names(name)?
            .into_iter()
            .map(str::to_string)
            .collect();
        Some(PersonResult {
            name: person.name.clone(),
            school: person.school.clone(),
            friends,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::testing::graph_from;

    fn sample() -> Graph {
        graph_from(
            &[("sam", Some("rutgers")), ("jane", Some("rutgers")), ("tom", None)],
            &[("sam", "jane"), ("jane", "tom")],
        )
    }

    #[test]
    fn test_lookup() {
        let graph = sample();
        let jane = graph.lookup("jane").unwrap();
        assert_eq!(jane.name, "jane");
        assert!(jane.attends("rutgers"));
        assert_eq!(jane.friends.len(), 2);
    }

    #[test]
    fn test_lookup_missing() {
        let graph = sample();
        assert!(graph.lookup("nobody").is_none());
        assert!(graph.index_of("nobody").is_none());
        assert!(graph.friend_names("nobody").is_none());
    }

    #[test]
    fn test_non_student_attends_nothing() {
        let graph = sample();
        let tom = graph.lookup("tom").unwrap();
        assert!(!tom.attends("rutgers"));
        assert!(!tom.attends(""));
    }

    #[test]
    fn test_friend_names_in_adjacency_order() {
        let graph = sample();
        assert_eq!(graph.friend_names("jane").unwrap(), vec!["sam", "tom"]);
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
        assert!(graph.lookup("sam").is_none());
    }

    #[test]
    fn test_chain_result_length() {
        let result = ChainResult::new(
            "sam",
            "tom",
            Some(vec!["sam".into(), "jane".into(), "tom".into()]),
        );
        assert!(result.found);
        assert_eq!(result.length, 2);

        let missing = ChainResult::new("sam", "sam", None);
        assert!(!missing.found);
        assert_eq!(missing.length, 0);
    }

    #[test]
    fn test_person_result() {
        let graph = sample();
        let result = PersonResult::from_graph(&graph, "tom").unwrap();
        assert_eq!(result.school, None);
        assert_eq!(result.friends, vec!["jane".to_string()]);
        assert!(PersonResult::from_graph(&graph, "nobody").is_none());
    }
}
