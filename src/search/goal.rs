/// A goal predicate over states of type `S`.
pub trait GoalDescription<S> {
    /// Returns true if `state` satisfies the goal.
    fn is_goal(&self, state: &S) -> bool;
}
