//! Vitals engine crate.
//!
//! Live FPS, CPU and memory statistics for an application's UI loop. The host
//! forwards its display-refresh callbacks and lifecycle signals; the engine
//! hands back one report per interval and the overlay text to draw.

pub mod time;
pub mod sample;
pub mod perf;
pub mod monitor;

pub mod logging;

pub use monitor::{MonitorConfig, PerformanceMonitor, PerformanceMonitorDelegate};
pub use perf::{CalculatorConfig, PerformanceCalculator, PerformanceReport};
pub use sample::{MemoryUsage, ResourceSampler, SampleError, SystemSampler};
