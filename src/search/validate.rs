use crate::search::{GoalDescription, Plan, SearchState};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanValidationError {
    #[error("Joint action {action} at step {step} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        action: String,
        state: String,
    },
    #[error("Plan does not reach goal state, final state is: {0}")]
    GoalNotReached(String),
}

/// Replay `plan` from `initial_state`, checking that every joint action is
/// applicable where it is used and that the final state satisfies `goal`.
pub fn validate<S, G>(
    plan: &Plan<S::Action>,
    initial_state: &S,
    action_set: &[Vec<S::Action>],
    goal: &G,
) -> Result<(), PlanValidationError>
where
    S: SearchState,
    G: GoalDescription<S>,
{
    let mut current_state: Option<S> = None;
    for (step, joint_action) in plan.steps().iter().enumerate() {
        let state = current_state.as_ref().unwrap_or(initial_state);
        if !state.applicable_actions(action_set).contains(joint_action) {
            return Err(PlanValidationError::NotApplicable {
                step,
                action: format!("{:?}", joint_action.as_slice()),
                state: format!("{:?}", state),
            });
        }
        let next_state = state.result(joint_action);
        current_state = Some(next_state);
    }

    let final_state = current_state.as_ref().unwrap_or(initial_state);
    if !goal.is_goal(final_state) {
        return Err(PlanValidationError::GoalNotReached(format!(
            "{:?}",
            final_state
        )));
    }

    Ok(())
}
