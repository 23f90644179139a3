mod graph_search;
mod memory_probe;
mod search_engine;
mod search_statistics;

pub use graph_search::{graph_search, GraphSearch, DEFAULT_STATUS_INTERVAL};
pub use memory_probe::{MemoryProbe, ProcessMemoryProbe};
pub use search_engine::{SearchOutcome, SearchResult};
pub use search_statistics::{SearchStatus, StatusReporter};
