//! Overlay monitor.
//!
//! Host-facing wrapper around the calculator: start/pause/hide/stop intent,
//! foreground/background signals injected by the host, overlay text and a
//! report delegate. Drawing the text is left to the host.

mod config;
mod overlay;
mod text;

pub use config::MonitorConfig;
pub use overlay::{PerformanceMonitor, PerformanceMonitorDelegate};
pub use text::{VersionInfo, format_bytes, format_report};
