use crate::perf::{CalculatorPhase, PerformanceCalculator, PerformanceReport};
use crate::sample::{ResourceSampler, SystemSampler};
use crate::time::{Clock, MonotonicClock};

use super::config::MonitorConfig;
use super::text::{VersionInfo, format_report};

/// Receiver for monitor reports.
///
/// Implemented for any `FnMut(&PerformanceReport, &str)` closure.
pub trait PerformanceMonitorDelegate {
    /// Called once per report with the rendered overlay text.
    fn performance_monitor_did_report(&mut self, report: &PerformanceReport, text: &str);
}

impl<F> PerformanceMonitorDelegate for F
where
    F: FnMut(&PerformanceReport, &str),
{
    fn performance_monitor_did_report(&mut self, report: &PerformanceReport, text: &str) {
        self(report, text)
    }
}

/// Host-facing coordinator around a `PerformanceCalculator`.
///
/// Separates two kinds of pause:
/// - user intent (`pause_monitoring`, `stop_monitoring`), which sticks until
///   `start_monitoring`
/// - application lifecycle (`app_will_resign_active`), which is undone by
///   `app_did_become_active` unless the user paused in the meantime
///
/// Hosts forward every display refresh to [`PerformanceMonitor::on_frame`] and
/// draw [`PerformanceMonitor::overlay_text`] when it is `Some`.
pub struct PerformanceMonitor<S = SystemSampler, C = MonotonicClock>
where
    S: ResourceSampler,
    C: Clock,
{
    calculator: PerformanceCalculator<S, C>,
    delegate:   Option<Box<dyn PerformanceMonitorDelegate>>,

    app_version_hidden:    bool,
    device_version_hidden: bool,
    versions:              VersionInfo,
    versions_line:         Option<String>,

    paused:     bool,
    hidden:     bool,
    stopped:    bool,
    app_active: bool,

    last_text: Option<String>,
}

impl PerformanceMonitor {
    /// Monitor over the current process.
    pub fn new(config: MonitorConfig) -> Self {
        Self::with_parts(config, SystemSampler::new(), MonotonicClock::new())
    }
}

impl<S, C> PerformanceMonitor<S, C>
where
    S: ResourceSampler,
    C: Clock,
{
    /// Builds a monitor around the given sampler and clock.
    ///
    /// The monitor starts idle; call [`start_monitoring`](Self::start_monitoring).
    pub fn with_parts(config: MonitorConfig, sampler: S, clock: C) -> Self {
        let calculator = PerformanceCalculator::with_parts(config.calculator, sampler, clock);
        let versions_line = config
            .versions
            .line(config.app_version_hidden, config.device_version_hidden);

        Self {
            calculator,
            delegate: None,
            app_version_hidden: config.app_version_hidden,
            device_version_hidden: config.device_version_hidden,
            versions: config.versions,
            versions_line,
            paused: false,
            hidden: false,
            stopped: true,
            app_active: true,
            last_text: None,
        }
    }

    pub fn set_delegate<D>(&mut self, delegate: D)
    where
        D: PerformanceMonitorDelegate + 'static,
    {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn set_app_version_hidden(&mut self, hidden: bool) {
        self.app_version_hidden = hidden;
        self.refresh_versions_line();
    }

    pub fn set_device_version_hidden(&mut self, hidden: bool) {
        self.device_version_hidden = hidden;
        self.refresh_versions_line();
    }

    pub fn calculator(&self) -> &PerformanceCalculator<S, C> {
        &self.calculator
    }

    /// Whether frames are currently being measured.
    pub fn is_running(&self) -> bool {
        self.calculator.phase() == CalculatorPhase::Running
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Text the host should draw, or `None` when nothing should be shown.
    pub fn overlay_text(&self) -> Option<&str> {
        if self.hidden || self.paused || self.stopped || !self.app_active {
            return None;
        }
        self.last_text.as_deref()
    }

    // ── user intent ───────────────────────────────────────────────────────

    /// Starts or resumes monitoring and shows the overlay.
    pub fn start_monitoring(&mut self) {
        self.paused = false;
        self.hidden = false;
        self.stopped = false;
        self.resume();
    }

    /// Pauses measuring and hides the overlay until `start_monitoring`.
    pub fn pause_monitoring(&mut self) {
        self.paused = true;
        self.calculator.pause();
    }

    /// Hides the overlay; measuring and delegate reports continue.
    pub fn hide_monitoring(&mut self) {
        self.hidden = true;
    }

    /// Stops monitoring and forgets the last report.
    pub fn stop_monitoring(&mut self) {
        self.stopped = true;
        self.calculator.pause();
        self.last_text = None;
        log::debug!("monitoring stopped");
    }

    // ── application lifecycle ─────────────────────────────────────────────

    /// The host application came to the foreground.
    pub fn app_did_become_active(&mut self) {
        self.app_active = true;
        if self.paused {
            return;
        }
        self.resume();
    }

    /// The host application is about to leave the foreground.
    ///
    /// Measuring stops and the overlay is hidden until the app is active again.
    pub fn app_will_resign_active(&mut self) {
        self.app_active = false;
        self.calculator.pause();
    }

    // ── frames ────────────────────────────────────────────────────────────

    /// Forwards one display refresh to the calculator.
    ///
    /// On a report, updates the overlay text and notifies the delegate.
    pub fn on_frame(&mut self, timestamp: f64) -> Option<PerformanceReport> {
        if self.stopped {
            return None;
        }
        let report = self.calculator.on_frame(timestamp)?;

        let text = format_report(&report, self.versions_line.as_deref());
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.performance_monitor_did_report(&report, &text);
        }
        self.last_text = Some(text);

        Some(report)
    }

    fn resume(&mut self) {
        if self.stopped || !self.app_active || self.is_running() {
            return;
        }
        self.calculator.start();
    }

    fn refresh_versions_line(&mut self) {
        self.versions_line = self
            .versions
            .line(self.app_version_hidden, self.device_version_hidden);
    }
}
