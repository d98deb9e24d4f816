//! Path search over the co-starring graph

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::{
    frontier::{Frontier, Node, QueueFrontier},
    graph::Graph,
};
use crate::identifiers::{MovieId, PersonId};

/// One hop of a path: the movie shared with the previous person, and the
/// person reached
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PathStep {
    pub movie: MovieId,
    pub person: PersonId,
}

impl PathStep {
    pub fn new(movie: impl Into<MovieId>, person: impl Into<PersonId>) -> Self {
        PathStep {
            movie: movie.into(),
            person: person.into(),
        }
    }
}

/// Result of a search with its bookkeeping
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Hops from source (exclusive) to target (inclusive); `None` when the
    /// two people are not connected
    pub path: Option<Vec<PathStep>>,
    /// Nodes taken off the frontier and expanded
    pub explored: usize,
}

/// Shortest path by number of hops, or `None` when not connected.
///
/// A source equal to the target yields an empty path.
pub fn shortest_path(
    graph: &Graph,
    source: &PersonId,
    target: &PersonId,
) -> Option<Vec<PathStep>> {
    find_path::<QueueFrontier>(graph, source, target).path
}

/// Run the frontier search with any frontier discipline.
///
/// With [`QueueFrontier`] this is breadth-first and the path is a shortest
/// one. Other frontiers still return a valid path, not necessarily shortest.
/// The goal test runs when a neighbor is generated, not when it is expanded.
pub fn find_path<F: Frontier + Default>(
    graph: &Graph,
    source: &PersonId,
    target: &PersonId,
) -> SearchOutcome {
    if source == target {
        return SearchOutcome {
            path: Some(Vec::new()),
            explored: 0,
        };
    }

    let mut frontier = F::default();
    frontier.add(Node::root(source.clone()));

    let mut explored: HashSet<PersonId> = HashSet::new();
    let mut expanded: Vec<Node> = Vec::new();

    while let Some(node) = frontier.remove() {
        explored.insert(node.state.clone());
        let parent = expanded.len();
        let state = node.state.clone();
        expanded.push(node);

        for (movie, person) in graph.neighbors_for_person(state.as_str()) {
            if explored.contains(person) || frontier.contains_state(person) {
                continue;
            }

            if person == target {
                let path = reconstruct(&expanded, parent, movie, person);
                debug!(
                    %source,
                    %target,
                    degrees = path.len(),
                    explored = expanded.len(),
                    "path found"
                );
                return SearchOutcome {
                    path: Some(path),
                    explored: expanded.len(),
                };
            }

            frontier.add(Node::child(person.clone(), parent, movie.clone()));
        }
    }

    debug!(%source, %target, explored = expanded.len(), "frontier exhausted, not connected");
    SearchOutcome {
        path: None,
        explored: expanded.len(),
    }
}

/// Walk parent links back to the root and return the hops in source order
fn reconstruct(
    expanded: &[Node],
    parent: usize,
    movie: &MovieId,
    person: &PersonId,
) -> Vec<PathStep> {
    let mut steps = vec![PathStep {
        movie: movie.clone(),
        person: person.clone(),
    }];

    let mut cursor = Some(parent);
    while let Some(index) = cursor {
        let node = &expanded[index];
        if let Some(action) = &node.action {
            steps.push(PathStep {
                movie: action.clone(),
                person: node.state.clone(),
            });
        }
        cursor = node.parent;
    }

    steps.reverse();
    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::degrees::frontier::StackFrontier;

    /// a -m1- b -m2- c, plus an isolated d and a shortcut-free tail c -m3- e
    fn chain() -> Graph {
        let mut graph = Graph::new();
        for (id, name) in [("a", "A"), ("b", "B"), ("c", "C"), ("d", "D"), ("e", "E")] {
            graph.add_person(id.into(), name, None);
        }
        for id in ["m1", "m2", "m3", "m4"] {
            graph.add_movie(id.into(), id, None);
        }
        graph.link("a", "m1");
        graph.link("b", "m1");
        graph.link("b", "m2");
        graph.link("c", "m2");
        graph.link("c", "m3");
        graph.link("e", "m3");
        graph.link("d", "m4");
        graph
    }

    fn id(s: &str) -> PersonId {
        PersonId::new(s)
    }

    #[test]
    fn test_two_hop_path() {
        let graph = chain();
        let path = shortest_path(&graph, &id("a"), &id("c")).unwrap();
        assert_eq!(path, vec![PathStep::new("m1", "b"), PathStep::new("m2", "c")]);
    }

    #[test]
    fn test_direct_costars() {
        let graph = chain();
        let path = shortest_path(&graph, &id("c"), &id("b")).unwrap();
        assert_eq!(path, vec![PathStep::new("m2", "b")]);
    }

    #[test]
    fn test_same_person_is_zero_degrees() {
        let graph = chain();
        assert_eq!(shortest_path(&graph, &id("a"), &id("a")), Some(Vec::new()));
    }

    #[test]
    fn test_disconnected_is_none() {
        let graph = chain();
        let outcome = find_path::<QueueFrontier>(&graph, &id("a"), &id("d"));
        assert_eq!(outcome.path, None);
        // a, b, c and e are reachable and all get expanded.
        assert_eq!(outcome.explored, 4);
    }

    #[test]
    fn test_unknown_source_is_none() {
        let graph = chain();
        assert_eq!(shortest_path(&graph, &id("zz"), &id("a")), None);
    }

    #[test]
    fn test_prefers_fewer_hops() {
        let mut graph = chain();
        // Shortcut: a and e share m5.
        graph.add_movie("m5".into(), "m5", None);
        graph.link("a", "m5");
        graph.link("e", "m5");

        let path = shortest_path(&graph, &id("a"), &id("e")).unwrap();
        assert_eq!(path, vec![PathStep::new("m5", "e")]);
    }

    #[test]
    fn test_stack_frontier_finds_a_valid_path() {
        let graph = chain();
        let path = find_path::<StackFrontier>(&graph, &id("a"), &id("e"))
            .path
            .unwrap();
        assert_eq!(path.last().unwrap().person, "e");

        // Each hop must be a real co-starring.
        let mut previous = id("a");
        for step in &path {
            let movie = graph.movie(step.movie.as_str()).unwrap();
            assert!(movie.stars.contains(&previous));
            assert!(movie.stars.contains(&step.person));
            previous = step.person.clone();
        }
    }
}
