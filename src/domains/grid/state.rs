use crate::domains::grid::{GridAction, Position, Walls};
use crate::search::{JointAction, SearchState};
use itertools::Itertools;
use std::{
    fmt,
    hash::{Hash, Hasher},
    rc::Rc,
};

/// Positions of all agents on a shared wall layout. Only the agent positions
/// take part in equality and hashing.
#[derive(Clone)]
pub struct GridState {
    walls: Rc<Walls>,
    agents: Vec<Position>,
}

impl GridState {
    pub fn new(walls: Rc<Walls>, agents: Vec<Position>) -> Self {
        Self { walls, agents }
    }

    pub fn num_agents(&self) -> usize {
        self.agents.len()
    }

    pub fn agent_position(&self, agent: usize) -> Position {
        self.agents[agent]
    }

    pub fn agents(&self) -> &[Position] {
        &self.agents
    }

    fn is_free(&self, position: Position) -> bool {
        !self.walls.is_wall(position) && !self.agents.contains(&position)
    }

    fn destination(&self, agent: usize, action: GridAction) -> Option<Position> {
        let position = self.agents[agent];
        match action {
            GridAction::NoOp => Some(position),
            GridAction::Move(direction) => position
                .step(direction)
                .filter(|&destination| self.is_free(destination)),
        }
    }

    /// Two moving agents heading for the same cell. Destinations of moves are
    /// free cells, so a move never collides with an agent that stays put.
    fn is_conflicting(&self, joint_action: &[GridAction]) -> bool {
        !joint_action
            .iter()
            .enumerate()
            .filter(|(_, action)| matches!(action, GridAction::Move(_)))
            .filter_map(|(agent, &action)| self.destination(agent, action))
            .all_unique()
    }
}

impl SearchState for GridState {
    type Action = GridAction;

    fn applicable_actions(&self, action_set: &[Vec<GridAction>]) -> Vec<JointAction<GridAction>> {
        debug_assert_eq!(
            action_set.len(),
            self.agents.len(),
            "Action set must list the actions of every agent"
        );
        action_set
            .iter()
            .enumerate()
            .map(|(agent, actions)| {
                actions
                    .iter()
                    .copied()
                    .filter(|&action| self.destination(agent, action).is_some())
                    .collect::<Vec<_>>()
            })
            .multi_cartesian_product()
            .filter(|joint_action| !self.is_conflicting(joint_action))
            .map(JointAction::from_vec)
            .collect()
    }

    fn result(&self, joint_action: &JointAction<GridAction>) -> Self {
        let agents = joint_action
            .iter()
            .enumerate()
            .map(|(agent, &action)| {
                self.destination(agent, action)
                    .unwrap_or_else(|| panic!("{} is not applicable for agent {}", action, agent))
            })
            .collect();
        Self {
            walls: Rc::clone(&self.walls),
            agents,
        }
    }
}

impl PartialEq for GridState {
    fn eq(&self, other: &Self) -> bool {
        self.agents == other.agents
    }
}

impl Eq for GridState {}

impl Hash for GridState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.agents.hash(state);
    }
}

impl fmt::Debug for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.agents.iter().map(|p| (p.row, p.col)))
            .finish()
    }
}
