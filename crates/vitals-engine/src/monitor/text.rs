use serde::Deserialize;
use sysinfo::System;

use crate::perf::PerformanceReport;

const MISSING: &str = "<null>";

/// Application and OS versions shown under the statistics line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VersionInfo {
    pub app_version: Option<String>,
    pub app_build:   Option<String>,
    pub os_name:     Option<String>,
    pub os_version:  Option<String>,
}

impl VersionInfo {
    /// Fills the OS fields from the running system; app fields stay unset.
    pub fn detect() -> Self {
        Self {
            os_name: System::name(),
            os_version: System::os_version(),
            ..Self::default()
        }
    }

    /// Sets the application version and build.
    pub fn with_app(mut self, version: impl Into<String>, build: impl Into<String>) -> Self {
        self.app_version = Some(version.into());
        self.app_build = Some(build.into());
        self
    }

    fn app_part(&self) -> String {
        format!(
            "app v{} ({})",
            self.app_version.as_deref().unwrap_or(MISSING),
            self.app_build.as_deref().unwrap_or(MISSING),
        )
    }

    fn os_part(&self) -> String {
        format!(
            "{} v{}",
            self.os_name.as_deref().unwrap_or("OS"),
            self.os_version.as_deref().unwrap_or(MISSING),
        )
    }

    /// Second overlay line, or `None` when both parts are hidden.
    pub fn line(&self, app_hidden: bool, device_hidden: bool) -> Option<String> {
        match (app_hidden, device_hidden) {
            (false, false) => Some(format!("{}; {}", self.app_part(), self.os_part())),
            (false, true) => Some(self.app_part()),
            (true, false) => Some(self.os_part()),
            (true, true) => None,
        }
    }
}

/// Renders a report as overlay text, optionally followed by a versions line.
pub fn format_report(report: &PerformanceReport, versions: Option<&str>) -> String {
    let cpu = if report.cpu_available() {
        format!("CPU {:.1}%", report.cpu_percent)
    } else {
        "CPU --".to_string()
    };

    let mut text = format!(
        "{cpu}   FPS {}   Mem {} of {} ({:.0}%)",
        report.fps,
        format_bytes(report.memory_used),
        format_bytes(report.memory_total),
        report.memory_fraction() * 100.0,
    );

    if let Some(versions) = versions {
        text.push('\n');
        text.push_str(versions);
    }
    text
}

/// Binary-unit byte count with one decimal (`"1.5 GB"`).
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perf::CPU_UNAVAILABLE;

    fn versions() -> VersionInfo {
        VersionInfo {
            app_version: Some("1.2".into()),
            app_build:   Some("34".into()),
            os_name:     Some("macOS".into()),
            os_version:  Some("14.1".into()),
        }
    }

    fn report(cpu_percent: f64) -> PerformanceReport {
        PerformanceReport {
            fps: 60,
            cpu_percent,
            memory_used: 128 << 20,
            memory_total: 4 << 30,
        }
    }

    // ── versions line ─────────────────────────────────────────────────────

    #[test]
    fn versions_line_visibility() {
        let v = versions();
        assert_eq!(v.line(false, false).as_deref(), Some("app v1.2 (34); macOS v14.1"));
        assert_eq!(v.line(false, true).as_deref(), Some("app v1.2 (34)"));
        assert_eq!(v.line(true, false).as_deref(), Some("macOS v14.1"));
        assert_eq!(v.line(true, true), None);
    }

    #[test]
    fn missing_versions_render_null() {
        let v = VersionInfo::default();
        assert_eq!(v.line(false, false).as_deref(), Some("app v<null> (<null>); OS v<null>"));
    }

    #[test]
    fn with_app_sets_both_fields() {
        let v = VersionInfo::default().with_app("0.3.0", "7");
        assert_eq!(v.line(false, true).as_deref(), Some("app v0.3.0 (7)"));
    }

    // ── report text ───────────────────────────────────────────────────────

    #[test]
    fn formats_report_line() {
        assert_eq!(
            format_report(&report(12.34), None),
            "CPU 12.3%   FPS 60   Mem 128.0 MB of 4.0 GB (3%)"
        );
    }

    #[test]
    fn failed_memory_reading_shows_zero_share() {
        let r = PerformanceReport { memory_used: 0, ..report(1.0) };
        assert!(format_report(&r, None).ends_with("Mem 0 B of 4.0 GB (0%)"));
    }

    #[test]
    fn unavailable_cpu_renders_placeholder() {
        let text = format_report(&report(CPU_UNAVAILABLE), None);
        assert!(text.starts_with("CPU --   FPS 60"));
    }

    #[test]
    fn appends_versions_line() {
        let text = format_report(&report(1.0), Some("app v1 (1)"));
        assert_eq!(text.lines().nth(1), Some("app v1 (1)"));
    }

    #[test]
    fn byte_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(3 << 30), "3.0 GB");
    }
}
