mod bfs;
mod dfs;
mod frontier;

pub use bfs::BreadthFirstFrontier;
pub use dfs::DepthFirstFrontier;
pub use frontier::{Frontier, FrontierName};
