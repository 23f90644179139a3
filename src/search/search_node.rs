use crate::search::{JointAction, Plan, SearchState};
use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

struct NodeData<S>
where
    S: SearchState,
{
    /// The wrapped state
    state: S,
    /// Node this one was generated from, `None` for the root
    parent: Option<SearchNode<S>>,
    /// Joint action that led from the parent to this node
    joint_action: Option<JointAction<S::Action>>,
    /// Cost of the path from the root to this node
    path_cost: u64,
    /// Number of joint actions from the root to this node
    depth: usize,
}

impl<S> Drop for NodeData<S>
where
    S: SearchState,
{
    // Unlink the parent chain iteratively, a deep depth-first path would
    // otherwise overflow the stack through recursive drops.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Rc::try_unwrap(node.inner) {
                Ok(mut data) => next = data.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// A [`SearchNode`] wraps a state with the bookkeeping the search needs: the
/// parent node, the joint action that produced it and the path cost. Nodes are
/// reference counted, so cloning one is cheap and the frontier, the explored
/// set and the children of a node can all share it.
///
/// Equality and hashing only look at the wrapped state, which lets collections
/// of nodes be queried by state through [`Borrow`].
pub struct SearchNode<S>
where
    S: SearchState,
{
    inner: Rc<NodeData<S>>,
}

impl<S> SearchNode<S>
where
    S: SearchState,
{
    /// Create a root node for `state`. Every search builds its own root, so a
    /// state reused across searches never carries a stale parent.
    pub fn root(state: S) -> Self {
        Self {
            inner: Rc::new(NodeData {
                state,
                parent: None,
                joint_action: None,
                path_cost: 0,
                depth: 0,
            }),
        }
    }

    /// Create a child of this node, reached by applying `joint_action`.
    pub fn child(&self, joint_action: JointAction<S::Action>, state: S) -> Self {
        let path_cost = self.inner.path_cost + self.inner.state.action_cost(&joint_action);
        Self {
            inner: Rc::new(NodeData {
                state,
                parent: Some(self.clone()),
                joint_action: Some(joint_action),
                path_cost,
                depth: self.inner.depth + 1,
            }),
        }
    }

    pub fn state(&self) -> &S {
        &self.inner.state
    }

    pub fn parent(&self) -> Option<&SearchNode<S>> {
        self.inner.parent.as_ref()
    }

    pub fn joint_action(&self) -> Option<&JointAction<S::Action>> {
        self.inner.joint_action.as_ref()
    }

    pub fn path_cost(&self) -> u64 {
        self.inner.path_cost
    }

    pub fn depth(&self) -> usize {
        self.inner.depth
    }

    pub fn is_root(&self) -> bool {
        self.inner.parent.is_none()
    }

    /// Walk the parent links back to the root and return the joint actions
    /// along the way, in execution order.
    pub fn extract_plan(&self) -> Plan<S::Action> {
        let mut steps = Vec::with_capacity(self.depth());
        let mut current_node = self;
        while let Some(parent) = current_node.parent() {
            if let Some(joint_action) = current_node.joint_action() {
                steps.push(joint_action.clone());
            }
            current_node = parent;
        }
        steps.reverse();
        Plan::new(steps)
    }
}

impl<S> Clone for SearchNode<S>
where
    S: SearchState,
{
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<S> PartialEq for SearchNode<S>
where
    S: SearchState,
{
    fn eq(&self, other: &Self) -> bool {
        self.inner.state == other.inner.state
    }
}

impl<S> Eq for SearchNode<S> where S: SearchState {}

impl<S> Hash for SearchNode<S>
where
    S: SearchState,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.state.hash(state);
    }
}

impl<S> Borrow<S> for SearchNode<S>
where
    S: SearchState,
{
    fn borrow(&self) -> &S {
        &self.inner.state
    }
}

impl<S> fmt::Debug for SearchNode<S>
where
    S: SearchState,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchNode")
            .field("state", &self.inner.state)
            .field("joint_action", &self.inner.joint_action)
            .field("path_cost", &self.inner.path_cost)
            .field("depth", &self.inner.depth)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use smallvec::smallvec;
    use std::collections::HashSet;

    #[test]
    fn root_has_no_parent_and_zero_cost() {
        let graph = two_step_graph();
        let root = SearchNode::root(graph.state(0));

        assert!(root.is_root());
        assert_eq!(root.path_cost(), 0);
        assert_eq!(root.depth(), 0);
        assert!(root.extract_plan().is_empty());
    }

    #[test]
    fn children_accumulate_cost_and_plan() {
        let graph = two_step_graph();
        let root = SearchNode::root(graph.state(0));
        let a = root.child(smallvec!['a'], graph.state(1));
        let goal = a.child(smallvec!['b'], graph.state(2));

        assert_eq!(goal.path_cost(), 2);
        assert_eq!(goal.depth(), 2);
        assert_eq!(goal.parent(), Some(&a));

        let plan = goal.extract_plan();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan[0].as_slice(), &['a']);
        assert_eq!(plan[1].as_slice(), &['b']);
    }

    #[test]
    fn nodes_are_looked_up_by_state() {
        let graph = two_step_graph();
        let root = SearchNode::root(graph.state(0));
        let child = root.child(smallvec!['a'], graph.state(1));

        let mut set = HashSet::new();
        set.insert(child);

        assert!(set.contains(&graph.state(1)));
        assert!(!set.contains(&graph.state(0)));
        // A different path to the same state is the same entry.
        assert!(set.contains(&SearchNode::root(graph.state(1))));
    }

    #[test]
    fn dropping_a_long_chain_does_not_overflow() {
        let graph = line_graph(1);
        let mut node = SearchNode::root(graph.state(0));
        for _ in 0..200_000 {
            node = node.child(smallvec!['r'], graph.state(0));
        }
        assert_eq!(node.depth(), 200_000);
        drop(node);
    }
}
