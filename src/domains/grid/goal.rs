use crate::domains::grid::{GridState, Position};
use crate::search::GoalDescription;

/// Target cells of the agents. Agents without a target may end anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridGoal {
    targets: Vec<Option<Position>>,
}

impl GridGoal {
    pub fn new(targets: Vec<Option<Position>>) -> Self {
        Self { targets }
    }

    pub fn targets(&self) -> &[Option<Position>] {
        &self.targets
    }
}

impl GoalDescription<GridState> for GridGoal {
    fn is_goal(&self, state: &GridState) -> bool {
        self.targets
            .iter()
            .enumerate()
            .all(|(agent, target)| target.map_or(true, |t| state.agent_position(agent) == t))
    }
}
