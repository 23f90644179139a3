//! Depth-first frontier

use crate::search::{frontiers::Frontier, GoalDescription, SearchNode, SearchState};
use std::collections::HashSet;

/// Depth-first frontier: the most recently added node is popped first.
#[derive(Debug)]
pub struct DepthFirstFrontier<S>
where
    S: SearchState,
{
    stack: Vec<SearchNode<S>>,
    index: HashSet<SearchNode<S>>,
}

impl<S> DepthFirstFrontier<S>
where
    S: SearchState,
{
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            index: HashSet::new(),
        }
    }
}

impl<S> Default for DepthFirstFrontier<S>
where
    S: SearchState,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for DepthFirstFrontier<S>
where
    S: SearchState,
{
    fn prepare(&mut self, _goal: &dyn GoalDescription<S>) {
        self.stack.clear();
        self.index.clear();
    }

    fn add(&mut self, node: SearchNode<S>) {
        self.index.insert(node.clone());
        self.stack.push(node);
    }

    fn pop(&mut self) -> SearchNode<S> {
        let node = self
            .stack
            .pop()
            .expect("Cannot pop from an empty frontier");
        self.index.remove(&node);
        node
    }

    fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn size(&self) -> usize {
        self.stack.len()
    }

    fn contains(&self, state: &S) -> bool {
        self.index.contains(state)
    }
}
