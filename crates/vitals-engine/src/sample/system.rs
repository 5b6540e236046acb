use sysinfo::{Pid, ProcessesToUpdate, System};

use super::error::SampleError;
use super::{MemoryUsage, ResourceSampler};

/// `sysinfo`-backed sampler for the current process.
///
/// CPU usage is the process total across all of its threads, so it ranges
/// over `0..100 * cores` and is deliberately left unclamped. `sysinfo` derives
/// it from the time elapsed since the previous refresh, which makes each
/// reading the average over one report interval when sampled once per cycle.
pub struct SystemSampler {
    system: System,
    pid: Option<Pid>,
}

impl SystemSampler {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(err) => {
                log::warn!("unable to resolve current pid: {err}");
                None
            }
        };

        let mut system = System::new();
        // Baseline refresh so the first cycle has something to diff against.
        if let Some(pid) = pid {
            system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        }
        system.refresh_memory();

        Self { system, pid }
    }

    fn refresh_self(&mut self, query: &'static str) -> Result<Pid, SampleError> {
        let pid = self.pid.ok_or(SampleError::kernel(query))?;
        let updated = self
            .system
            .refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
        if updated == 0 {
            return Err(SampleError::kernel(query));
        }
        Ok(pid)
    }
}

impl Default for SystemSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceSampler for SystemSampler {
    fn sample_cpu(&mut self) -> Result<f64, SampleError> {
        let pid = self.refresh_self("cpu")?;
        let usage = self
            .system
            .process(pid)
            .map(|p| f64::from(p.cpu_usage()))
            .ok_or(SampleError::kernel("cpu"))?;

        if !usage.is_finite() || usage < 0.0 {
            return Err(SampleError::kernel("cpu"));
        }
        Ok(usage)
    }

    fn sample_memory(&mut self) -> Result<MemoryUsage, SampleError> {
        let pid = self.refresh_self("memory")?;
        let used = self
            .system
            .process(pid)
            .map(|p| p.memory())
            .ok_or(SampleError::kernel("memory"))?;

        Ok(MemoryUsage {
            used,
            total: self.total_memory(),
        })
    }

    fn total_memory(&mut self) -> u64 {
        self.system.refresh_memory();
        self.system.total_memory()
    }
}
