//! Search nodes and frontiers.
//!
//! A [`Node`] points at its parent by index into the arena of expanded nodes
//! kept by the search, so the parent links form a tree rooted at the source
//! and can never be cyclic.

use std::collections::{HashMap, VecDeque};

use crate::identifiers::{MovieId, PersonId};

/// A discovered person and how the search reached them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub state: PersonId,
    /// Index of the parent in the expanded-node arena; `None` for the root
    pub parent: Option<usize>,
    /// Movie linking the parent to this person; `None` for the root
    pub action: Option<MovieId>,
}

impl Node {
    pub fn root(state: PersonId) -> Self {
        Node {
            state,
            parent: None,
            action: None,
        }
    }

    pub fn child(state: PersonId, parent: usize, action: MovieId) -> Self {
        Node {
            state,
            parent: Some(parent),
            action: Some(action),
        }
    }
}

/// Discovered-but-unexpanded nodes
pub trait Frontier {
    fn add(&mut self, node: Node);

    /// Take the next node to expand, `None` when empty
    fn remove(&mut self) -> Option<Node>;

    fn is_empty(&self) -> bool;

    /// Whether a node for this person is waiting in the frontier
    fn contains_state(&self, state: &PersonId) -> bool;
}

/// Multiset of pending states for constant-time membership checks
#[derive(Debug, Default)]
struct PendingStates(HashMap<PersonId, usize>);

impl PendingStates {
    fn insert(&mut self, state: &PersonId) {
        *self.0.entry(state.clone()).or_insert(0) += 1;
    }

    fn remove(&mut self, state: &PersonId) {
        if let Some(count) = self.0.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.0.remove(state);
            }
        }
    }

    fn contains(&self, state: &PersonId) -> bool {
        self.0.contains_key(state)
    }
}

/// First-in first-out frontier; expanding it is breadth-first search
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<Node>,
    pending: PendingStates,
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: Node) {
        self.pending.insert(&node.state);
        self.nodes.push_back(node);
    }

    fn remove(&mut self) -> Option<Node> {
        let node = self.nodes.pop_front()?;
        self.pending.remove(&node.state);
        Some(node)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.pending.contains(state)
    }
}

/// Last-in first-out frontier; expanding it is depth-first search
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<Node>,
    pending: PendingStates,
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: Node) {
        self.pending.insert(&node.state);
        self.nodes.push(node);
    }

    fn remove(&mut self) -> Option<Node> {
        let node = self.nodes.pop()?;
        self.pending.remove(&node.state);
        Some(node)
    }

    fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.pending.contains(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> Node {
        Node::root(PersonId::new(id))
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut frontier = QueueFrontier::default();
        assert!(frontier.is_empty());
        frontier.add(node("a"));
        frontier.add(node("b"));

        assert_eq!(frontier.remove().unwrap().state, "a");
        assert_eq!(frontier.remove().unwrap().state, "b");
        assert_eq!(frontier.remove(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut frontier = StackFrontier::default();
        frontier.add(node("a"));
        frontier.add(node("b"));

        assert_eq!(frontier.remove().unwrap().state, "b");
        assert_eq!(frontier.remove().unwrap().state, "a");
        assert!(frontier.remove().is_none());
    }

    #[test]
    fn test_contains_state_tracks_pending_nodes() {
        let mut frontier = QueueFrontier::default();
        let a = PersonId::new("a");
        frontier.add(node("a"));
        frontier.add(Node::child(PersonId::new("a"), 0, MovieId::new("m")));
        assert!(frontier.contains_state(&a));

        frontier.remove();
        assert!(frontier.contains_state(&a));
        frontier.remove();
        assert!(!frontier.contains_state(&a));
    }
}
