use memory_stats::memory_stats;
use std::fmt::Debug;

/// Reports how much memory the process currently uses.
pub trait MemoryProbe: Debug {
    /// Resident memory in bytes, or `None` if the platform cannot tell.
    fn usage_bytes(&self) -> Option<u64>;
}

/// Reads the physical memory of the current process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessMemoryProbe;

impl MemoryProbe for ProcessMemoryProbe {
    fn usage_bytes(&self) -> Option<u64> {
        memory_stats().map(|usage| usage.physical_mem as u64)
    }
}
