use crate::domains::grid::{GridAction, GridGoal, GridState, Position};
use crate::parsers::{Cell, ParsedLevel, Parser};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    rc::Rc,
};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("Failed to read level file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse level: {0}")]
    Parse(String),
    #[error("Initial and goal grids disagree on the wall at row {row}, column {col}")]
    WallMismatch { row: usize, col: usize },
    #[error("Level has no agents")]
    NoAgents,
    #[error("Agent {0} appears more than once in the same grid")]
    DuplicateAgent(u8),
    #[error("Agents must be numbered from 0 without gaps, agent {0} is missing")]
    MissingAgent(u8),
    #[error("Goal grid mentions agent {0} which is not in the initial grid")]
    UnknownGoalAgent(u8),
}

/// The static wall layout of a level. Cells outside the grid count as walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walls {
    rows: usize,
    cols: usize,
    walls: Vec<bool>,
}

impl Walls {
    fn from_grid(grid: &[Vec<Cell>]) -> Self {
        let rows = grid.len();
        let cols = grid.iter().map(Vec::len).max().unwrap_or(0);
        let mut walls = vec![true; rows * cols];
        for (row, cells) in grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                walls[row * cols + col] = *cell == Cell::Wall;
            }
        }
        Self { rows, cols, walls }
    }

    pub fn is_wall(&self, position: Position) -> bool {
        if position.row >= self.rows || position.col >= self.cols {
            return true;
        }
        self.walls[position.row * self.cols + position.col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

/// A fully loaded grid level: everything [`crate::search::search_engines::graph_search`]
/// needs to solve it.
#[derive(Debug)]
pub struct GridProblem {
    pub initial_state: GridState,
    pub goal: GridGoal,
    /// Candidate actions of each agent
    pub action_set: Vec<Vec<GridAction>>,
}

impl GridProblem {
    pub fn from_path(path: &Path) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, LevelError> {
        let level =
            ParsedLevel::from_str(text).map_err(|e| LevelError::Parse(e.to_string()))?;

        let walls = Walls::from_grid(&level.initial);
        let goal_walls = Walls::from_grid(&level.goal);
        let rows = walls.rows().max(goal_walls.rows());
        let cols = walls.cols().max(goal_walls.cols());
        for row in 0..rows {
            for col in 0..cols {
                let position = Position::new(row, col);
                if walls.is_wall(position) != goal_walls.is_wall(position) {
                    return Err(LevelError::WallMismatch { row, col });
                }
            }
        }

        let initial_agents = agent_positions(&level.initial)?;
        if initial_agents.is_empty() {
            return Err(LevelError::NoAgents);
        }
        for (expected, &agent) in initial_agents.keys().enumerate() {
            if usize::from(agent) != expected {
                return Err(LevelError::MissingAgent(expected as u8));
            }
        }
        let num_agents = initial_agents.len();

        let mut targets = vec![None; num_agents];
        for (agent, position) in agent_positions(&level.goal)? {
            match targets.get_mut(usize::from(agent)) {
                Some(target) => *target = Some(position),
                None => return Err(LevelError::UnknownGoalAgent(agent)),
            }
        }

        info!(
            rows = walls.rows(),
            cols = walls.cols(),
            num_agents = num_agents,
            "loaded level"
        );

        Ok(Self {
            initial_state: GridState::new(Rc::new(walls), initial_agents.into_values().collect()),
            goal: GridGoal::new(targets),
            action_set: vec![GridAction::all(); num_agents],
        })
    }

    pub fn num_agents(&self) -> usize {
        self.initial_state.num_agents()
    }
}

fn agent_positions(grid: &[Vec<Cell>]) -> Result<BTreeMap<u8, Position>, LevelError> {
    let mut agents = BTreeMap::new();
    for (row, cells) in grid.iter().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if let Cell::Agent(agent) = *cell {
                if agents.insert(agent, Position::new(row, col)).is_some() {
                    return Err(LevelError::DuplicateAgent(agent));
                }
            }
        }
    }
    Ok(agents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::GoalDescription;
    use crate::test_utils::*;
    use std::io::Write;

    #[test]
    fn loads_corridor_level() {
        let problem = GridProblem::from_text(CORRIDOR_LEVEL_TEXT).unwrap();

        assert_eq!(problem.num_agents(), 1);
        assert_eq!(problem.action_set.len(), 1);
        assert_eq!(problem.action_set[0].len(), 5);
        assert_eq!(problem.initial_state.agent_position(0), Position::new(1, 1));
        assert!(!problem.goal.is_goal(&problem.initial_state));
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CORRIDOR_LEVEL_TEXT.as_bytes()).unwrap();

        let problem = GridProblem::from_path(file.path()).unwrap();
        assert_eq!(problem.num_agents(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = GridProblem::from_path(Path::new("/nonexistent/level.lvl"));
        assert!(matches!(result, Err(LevelError::Io { .. })));
    }

    #[test]
    fn outside_cells_are_walls() {
        let problem = GridProblem::from_text(CORRIDOR_LEVEL_TEXT).unwrap();
        let walls = Walls::from_grid(&ParsedLevel::from_str(CORRIDOR_LEVEL_TEXT).unwrap().initial);

        assert!(walls.is_wall(Position::new(0, 0)));
        assert!(!walls.is_wall(problem.initial_state.agent_position(0)));
        assert!(walls.is_wall(Position::new(100, 100)));
    }

    #[test]
    fn rejects_malformed_text() {
        let result = GridProblem::from_text("+++\n+0+\n+++\n");
        assert!(matches!(result, Err(LevelError::Parse(_))));
    }

    #[test]
    fn whitespace_only_lines_do_not_change_the_level() {
        let plain = GridProblem::from_text("+++\n+0+\n+++\n\n+++\n+0+\n+++\n").unwrap();
        for text in [
            "+++\n+0+\n+++\n\n+++\n+0+\n+++\n \n",
            "+++\n+0+\n+++\n \n+++\n+0+\n+++\n",
        ] {
            let problem = GridProblem::from_text(text).unwrap();
            assert_eq!(problem.initial_state, plain.initial_state);
            assert!(problem.goal.is_goal(&problem.initial_state));
        }
    }

    #[test]
    fn rejects_wall_mismatch() {
        let result = GridProblem::from_text("++++\n+0 +\n++++\n\n++++\n+0++\n++++\n");
        assert!(matches!(
            result,
            Err(LevelError::WallMismatch { row: 1, col: 2 })
        ));
    }

    #[test]
    fn rejects_levels_without_agents() {
        let result = GridProblem::from_text("+++\n+ +\n+++\n\n+++\n+ +\n+++\n");
        assert!(matches!(result, Err(LevelError::NoAgents)));
    }

    #[test]
    fn rejects_duplicate_agents() {
        let result = GridProblem::from_text("++++\n+00+\n++++\n\n++++\n+  +\n++++\n");
        assert!(matches!(result, Err(LevelError::DuplicateAgent(0))));
    }

    #[test]
    fn rejects_gaps_in_agent_numbers() {
        let result = GridProblem::from_text("++++\n+02+\n++++\n\n++++\n+  +\n++++\n");
        assert!(matches!(result, Err(LevelError::MissingAgent(1))));
    }

    #[test]
    fn rejects_unknown_goal_agents() {
        let result = GridProblem::from_text("++++\n+0 +\n++++\n\n++++\n+ 1+\n++++\n");
        assert!(matches!(result, Err(LevelError::UnknownGoalAgent(1))));
    }

    #[test]
    fn goal_may_leave_agents_unconstrained() {
        let problem = GridProblem::from_text("+++++\n+0 1+\n+++++\n\n+++++\n+  1+\n+++++\n").unwrap();
        assert!(problem.goal.is_goal(&problem.initial_state));
    }
}
