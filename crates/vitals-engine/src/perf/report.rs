/// CPU reading used when the sampler could not produce one.
pub const CPU_UNAVAILABLE: f64 = -1.0;

/// One aggregation window's worth of measurements.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PerformanceReport {
    /// Refresh callbacks counted during the window.
    pub fps: u32,
    /// Process CPU usage in percent, or [`CPU_UNAVAILABLE`].
    pub cpu_percent: f64,
    /// Resident memory in bytes; 0 when the reading failed.
    pub memory_used: u64,
    /// Total physical memory in bytes.
    pub memory_total: u64,
}

impl PerformanceReport {
    /// Whether `cpu_percent` holds a real reading.
    pub fn cpu_available(&self) -> bool {
        self.cpu_percent >= 0.0
    }

    /// Resident memory as a fraction of total memory.
    pub fn memory_fraction(&self) -> f64 {
        if self.memory_total == 0 {
            return 0.0;
        }
        self.memory_used as f64 / self.memory_total as f64
    }
}
