//! The generic search core: the capabilities a domain provides, the search
//! nodes and plans built on top of them, the frontiers that order the search,
//! and the graph search itself.

pub mod frontiers;
mod goal;
mod plan;
pub mod search_engines;
mod search_node;
mod state;
mod validate;
mod verbosity;

pub use goal::GoalDescription;
pub use plan::Plan;
pub use search_node::SearchNode;
pub use state::{JointAction, SearchState};
pub use validate::{validate, PlanValidationError};
pub use verbosity::Verbosity;
