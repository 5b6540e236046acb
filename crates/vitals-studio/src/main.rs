use anyhow::Result;

use vitals_engine::logging::{LoggingConfig, init_logging};
use vitals_engine::monitor::{MonitorConfig, VersionInfo};
use vitals_engine::{PerformanceMonitor, PerformanceReport};

mod runtime;

use runtime::{Runtime, RuntimeConfig};

/// Reference host: a small window whose title carries the live statistics.
///
/// Usage: `vitals-studio [config.json]`. Space pauses/resumes monitoring.
fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut config = match std::env::args_os().nth(1) {
        Some(path) => MonitorConfig::load(path)?,
        None => MonitorConfig::default(),
    };
    if config.versions == VersionInfo::default() {
        config.versions = VersionInfo::detect()
            .with_app(env!("CARGO_PKG_VERSION"), option_env!("VITALS_BUILD").unwrap_or("dev"));
    }

    let mut monitor = PerformanceMonitor::new(config);
    monitor.set_delegate(|report: &PerformanceReport, text: &str| {
        if report.fps == 0 {
            log::warn!("no frames delivered during the last interval");
        }
        log::info!("{}", text.replace('\n', " | "));
    });
    monitor.start_monitoring();

    Runtime::run(RuntimeConfig::default(), monitor)
}
