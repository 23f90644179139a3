use crate::search::{
    frontiers::{BreadthFirstFrontier, DepthFirstFrontier},
    GoalDescription, SearchNode, SearchState,
};
use std::fmt::Debug;

/// The set of discovered but not yet expanded nodes. Implementations decide
/// the order in which nodes are popped, which is what distinguishes one
/// search strategy from another.
///
/// Every implementation keeps a hash index next to its ordered store so that
/// [`Frontier::contains`] does not depend on the traversal order.
pub trait Frontier<S>: Debug
where
    S: SearchState,
{
    /// Clear all internal storage. Called once at the beginning of every
    /// search, so a frontier can be reused across searches.
    fn prepare(&mut self, goal: &dyn GoalDescription<S>);

    /// Insert a node. The caller guarantees the node's state is not already in
    /// the frontier.
    fn add(&mut self, node: SearchNode<S>);

    /// Remove and return the next node according to the strategy.
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty.
    fn pop(&mut self) -> SearchNode<S>;

    fn is_empty(&self) -> bool;

    fn size(&self) -> usize;

    /// Whether a node for `state` is waiting in the frontier.
    fn contains(&self, state: &S) -> bool;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum FrontierName {
    /// Depth-first, last in first out
    Dfs,
    /// Breadth-first, first in first out
    Bfs,
}

impl FrontierName {
    pub fn create<S>(&self) -> Box<dyn Frontier<S>>
    where
        S: SearchState + 'static,
    {
        match self {
            FrontierName::Dfs => Box::new(DepthFirstFrontier::new()),
            FrontierName::Bfs => Box::new(BreadthFirstFrontier::new()),
        }
    }
}
