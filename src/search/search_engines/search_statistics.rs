use crate::search::search_engines::MemoryProbe;
use std::{
    fmt,
    time::{Duration, Instant},
};
use tracing::info;

const BYTES_PER_MB: f64 = 1024. * 1024.;

/// A snapshot of the search progress. All values are kept numeric, text is
/// only produced by the [`fmt::Display`] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchStatus {
    /// Number of nodes popped from the frontier
    expanded_nodes: usize,
    /// Number of nodes waiting in the frontier
    frontier_size: usize,
    /// Time since the search started
    elapsed: Duration,
    /// Resident memory of the process, if known
    memory_usage_bytes: Option<u64>,
}

impl SearchStatus {
    pub fn new(
        expanded_nodes: usize,
        frontier_size: usize,
        elapsed: Duration,
        memory_usage_bytes: Option<u64>,
    ) -> Self {
        Self {
            expanded_nodes,
            frontier_size,
            elapsed,
            memory_usage_bytes,
        }
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn frontier_size(&self) -> usize {
        self.frontier_size
    }

    /// Generated nodes are those expanded plus those still in the frontier.
    pub fn generated_nodes(&self) -> usize {
        self.expanded_nodes + self.frontier_size
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn memory_usage_bytes(&self) -> Option<u64> {
        self.memory_usage_bytes
    }

    pub fn memory_usage_mb(&self) -> Option<f64> {
        self.memory_usage_bytes
            .map(|bytes| bytes as f64 / BYTES_PER_MB)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#Expanded: {:>8}, #Frontier: {:>8}, #Generated: {:>8}, Time: {:.3} s",
            self.expanded_nodes,
            self.frontier_size,
            self.generated_nodes(),
            self.elapsed.as_secs_f64(),
        )?;
        match self.memory_usage_mb() {
            Some(memory_usage_mb) => write!(f, ", Memory: {:.2} MB", memory_usage_mb),
            None => write!(f, ", Memory: unknown"),
        }
    }
}

/// Measures and logs the progress of a single search.
#[derive(Debug)]
pub struct StatusReporter<'a> {
    /// Time when the search started
    start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
    /// Minimum time between two periodic logs
    log_interval: Duration,
    memory_probe: &'a dyn MemoryProbe,
    peak_memory_usage_bytes: Option<u64>,
}

impl<'a> StatusReporter<'a> {
    pub fn new(log_interval: Duration, memory_probe: &'a dyn MemoryProbe) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            memory_probe,
            peak_memory_usage_bytes: None,
        }
    }

    /// Compute the current status. A call with no expanded nodes marks the
    /// start of a search and resets the timing baseline.
    pub fn status(&mut self, expanded_nodes: usize, frontier_size: usize) -> SearchStatus {
        if expanded_nodes == 0 {
            self.start_time = Instant::now();
            self.last_log_time = self.start_time;
        }
        let memory_usage_bytes = self.memory_probe.usage_bytes();
        self.peak_memory_usage_bytes = self.peak_memory_usage_bytes.max(memory_usage_bytes);
        SearchStatus::new(
            expanded_nodes,
            frontier_size,
            self.start_time.elapsed(),
            memory_usage_bytes,
        )
    }

    pub fn log_if_needed(&mut self, expanded_nodes: usize, frontier_size: usize) {
        if self.last_log_time.elapsed() > self.log_interval {
            self.log(expanded_nodes, frontier_size);
        }
    }

    pub fn log(&mut self, expanded_nodes: usize, frontier_size: usize) -> SearchStatus {
        let status = self.status(expanded_nodes, frontier_size);
        self.last_log_time = Instant::now();
        info!(
            expanded_nodes = status.expanded_nodes(),
            frontier_size = status.frontier_size(),
            generated_nodes = status.generated_nodes(),
            time_elapsed = status.elapsed().as_secs_f64(),
            memory_usage_mb = status.memory_usage_mb(),
        );
        status
    }

    /// Log the final status of the search together with the peak memory
    /// usage seen while it ran.
    pub fn finalise(&mut self, expanded_nodes: usize, frontier_size: usize) -> SearchStatus {
        info!("finalising search");
        let status = self.log(expanded_nodes, frontier_size);
        info!(
            peak_recorded_memory_usage_mb = self
                .peak_memory_usage_bytes
                .map(|bytes| bytes as f64 / BYTES_PER_MB),
            search_duration = status.elapsed().as_secs_f64(),
        );
        status
    }

    pub fn peak_memory_usage_bytes(&self) -> Option<u64> {
        self.peak_memory_usage_bytes
    }
}
