//! A grid world shared by several agents. Agents move one cell per step in one
//! of the four compass directions or stay put, all agents acting at once. A
//! move is only possible into a free cell, and no two agents may move into the
//! same cell in the same step.

mod action;
mod goal;
mod problem;
mod state;

pub use action::{Direction, GridAction, Position};
pub use goal::GridGoal;
pub use problem::{GridProblem, LevelError, Walls};
pub use state::GridState;
