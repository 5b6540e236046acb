//! Resource sampling.
//!
//! One-shot, best-effort readings of the current process:
//! - CPU utilization summed over all non-idle threads, in percent
//! - resident memory against total physical memory, in bytes
//!
//! The platform specifics live behind [`ResourceSampler`]; the rest of the
//! engine never touches OS APIs directly. Readings are cheap but not free and
//! are meant to be taken once per report cycle, never per frame.

mod error;
mod system;

pub use error::SampleError;
pub use system::SystemSampler;

/// Resident memory of the process against total physical memory.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MemoryUsage {
    /// Resident set size in bytes.
    pub used: u64,
    /// Total physical memory in bytes.
    pub total: u64,
}

/// Source of process resource readings.
pub trait ResourceSampler {
    /// CPU usage of the process in percent, summed over its threads.
    ///
    /// May exceed 100 on multi-core machines.
    fn sample_cpu(&mut self) -> Result<f64, SampleError>;

    /// Resident and total memory.
    fn sample_memory(&mut self) -> Result<MemoryUsage, SampleError>;

    /// Total physical memory, obtainable even when `sample_memory` fails.
    fn total_memory(&mut self) -> u64;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;

    use super::{MemoryUsage, ResourceSampler, SampleError};

    /// Sampler that replays scripted results, then repeats a fallback.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedSampler {
        pub cpu: VecDeque<Result<f64, SampleError>>,
        pub memory: VecDeque<Result<MemoryUsage, SampleError>>,
        pub total: u64,
        pub cpu_calls: usize,
    }

    impl ScriptedSampler {
        pub(crate) fn steady(cpu: f64, used: u64, total: u64) -> Self {
            let mut s = Self { total, ..Self::default() };
            s.cpu.push_back(Ok(cpu));
            s.memory.push_back(Ok(MemoryUsage { used, total }));
            s
        }

        pub(crate) fn failing(total: u64) -> Self {
            let mut s = Self { total, ..Self::default() };
            s.cpu.push_back(Err(SampleError::kernel("cpu")));
            s.memory.push_back(Err(SampleError::kernel("memory")));
            s
        }
    }

    fn next<T: Clone>(queue: &mut VecDeque<T>) -> T {
        // The last entry is sticky.
        if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            queue.front().cloned().unwrap()
        }
    }

    impl ResourceSampler for ScriptedSampler {
        fn sample_cpu(&mut self) -> Result<f64, SampleError> {
            self.cpu_calls += 1;
            next(&mut self.cpu)
        }

        fn sample_memory(&mut self) -> Result<MemoryUsage, SampleError> {
            next(&mut self.memory)
        }

        fn total_memory(&mut self) -> u64 {
            self.total
        }
    }
}
