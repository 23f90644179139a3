//! Breadth-first frontier

use crate::search::{frontiers::Frontier, GoalDescription, SearchNode, SearchState};
use std::collections::{HashSet, VecDeque};

/// Breadth-first frontier: nodes are popped in the order they were added.
#[derive(Debug)]
pub struct BreadthFirstFrontier<S>
where
    S: SearchState,
{
    queue: VecDeque<SearchNode<S>>,
    index: HashSet<SearchNode<S>>,
}

impl<S> BreadthFirstFrontier<S>
where
    S: SearchState,
{
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            index: HashSet::new(),
        }
    }
}

impl<S> Default for BreadthFirstFrontier<S>
where
    S: SearchState,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Frontier<S> for BreadthFirstFrontier<S>
where
    S: SearchState,
{
    fn prepare(&mut self, _goal: &dyn GoalDescription<S>) {
        self.queue.clear();
        self.index.clear();
    }

    fn add(&mut self, node: SearchNode<S>) {
        self.index.insert(node.clone());
        self.queue.push_back(node);
    }

    fn pop(&mut self) -> SearchNode<S> {
        let node = self
            .queue
            .pop_front()
            .expect("Cannot pop from an empty frontier");
        self.index.remove(&node);
        node
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn size(&self) -> usize {
        self.queue.len()
    }

    fn contains(&self, state: &S) -> bool {
        self.index.contains(state)
    }
}
