//! The capabilities a domain must provide for its states to be searched.

use smallvec::SmallVec;
use std::{fmt::Debug, hash::Hash};

const TYPICAL_NUM_AGENTS: usize = 4;

/// One action per agent, all executed in the same step.
pub type JointAction<A> = SmallVec<[A; TYPICAL_NUM_AGENTS]>;

/// A world configuration that can be explored by the graph search.
///
/// States are compared and hashed by value; two states that compare equal are
/// treated as the same vertex of the search graph. The search never mutates a
/// state, it only wraps it in a [`crate::search::SearchNode`].
pub trait SearchState: Debug + Eq + Hash {
    type Action: Clone + Debug + PartialEq;

    /// Returns every joint action applicable in this state. `action_set` holds
    /// the candidate actions of each agent, indexed by agent.
    fn applicable_actions(&self, action_set: &[Vec<Self::Action>])
        -> Vec<JointAction<Self::Action>>;

    /// The state reached by applying `joint_action`. Only called with joint
    /// actions returned by [`SearchState::applicable_actions`].
    fn result(&self, joint_action: &JointAction<Self::Action>) -> Self;

    /// Cost of applying `joint_action`. Only recorded on search nodes, the
    /// search itself does not order by it.
    fn action_cost(&self, _joint_action: &JointAction<Self::Action>) -> u64 {
        1
    }
}
