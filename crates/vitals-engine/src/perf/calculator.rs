use crate::sample::{ResourceSampler, SystemSampler};
use crate::time::{Clock, FrameTimestampWindow, MonotonicClock};

use super::config::CalculatorConfig;
use super::report::{CPU_UNAVAILABLE, PerformanceReport};

/// Lifecycle phase of a calculator.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CalculatorPhase {
    /// Constructed but never started.
    Stopped,
    Running,
    Paused,
}

/// Mutable per-run bookkeeping.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CalculatorState {
    pub is_paused: bool,
    /// Clock reading taken by the last `start()`; `None` while not running.
    pub start_timestamp: Option<f64>,
    /// Set once the warm-up period has elapsed; stays set until paused.
    pub warmup_complete: bool,
}

type ReportCallback = Box<dyn FnMut(&PerformanceReport)>;

/// Derives FPS, CPU and memory reports from the host's refresh signal.
///
/// FPS is the number of `on_frame` calls counted during one report interval.
/// Frames older than one interval before the current frame are not counted,
/// so a host stall cannot stretch the count over several seconds.
/// CPU and memory are sampled once per interval, never per frame. Failed
/// samples are replaced by sentinels so a report is still emitted.
///
/// Precondition: the calculator is driven from a single thread (the host's
/// UI/refresh loop). It holds no locks and is not reentrant; the report
/// callback must not call back into the calculator.
///
/// Timestamps given to `on_frame` must come from the same time base as the
/// calculator's clock.
pub struct PerformanceCalculator<S = SystemSampler, C = MonotonicClock>
where
    S: ResourceSampler,
    C: Clock,
{
    config:      CalculatorConfig,
    sampler:     S,
    clock:       C,
    window:      FrameTimestampWindow,
    state:       CalculatorState,
    phase:       CalculatorPhase,
    /// Start of the current accumulation cycle.
    cycle_start: Option<f64>,
    on_report:   Option<ReportCallback>,
}

impl PerformanceCalculator {
    /// Calculator over the current process with the default timings.
    pub fn new() -> Self {
        Self::with_parts(CalculatorConfig::default(), SystemSampler::new(), MonotonicClock::new())
    }
}

impl Default for PerformanceCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, C> PerformanceCalculator<S, C>
where
    S: ResourceSampler,
    C: Clock,
{
    pub fn with_parts(config: CalculatorConfig, sampler: S, clock: C) -> Self {
        Self {
            config,
            sampler,
            clock,
            window: FrameTimestampWindow::new(),
            state: CalculatorState { is_paused: true, ..CalculatorState::default() },
            phase: CalculatorPhase::Stopped,
            cycle_start: None,
            on_report: None,
        }
    }

    /// Registers the report callback, replacing any previous one.
    pub fn set_on_report<F>(&mut self, callback: F)
    where
        F: FnMut(&PerformanceReport) + 'static,
    {
        self.on_report = Some(Box::new(callback));
    }

    pub fn clear_on_report(&mut self) {
        self.on_report = None;
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn phase(&self) -> CalculatorPhase {
        self.phase
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Frames counted in the current cycle.
    pub fn pending_frames(&self) -> usize {
        self.window.count()
    }

    /// Starts (or restarts) a run at the clock's current reading.
    pub fn start(&mut self) {
        let now = self.clock.now();
        self.start_at(now);
    }

    /// Starts (or restarts) a run at `now`.
    ///
    /// Frames and warm-up progress from any previous run are discarded.
    pub fn start_at(&mut self, now: f64) {
        self.phase = CalculatorPhase::Running;
        self.state = CalculatorState {
            is_paused: false,
            start_timestamp: Some(now),
            warmup_complete: false,
        };
        self.window.reset();
        self.cycle_start = Some(now);
        log::debug!("performance calculator started at {now:.3}s");
    }

    /// Stops consuming frames until the next `start()`.
    ///
    /// Frames counted in the interrupted cycle are never reported.
    pub fn pause(&mut self) {
        if self.phase != CalculatorPhase::Running {
            return;
        }
        self.phase = CalculatorPhase::Paused;
        self.state = CalculatorState {
            is_paused: true,
            start_timestamp: None,
            warmup_complete: false,
        };
        self.window.reset();
        self.cycle_start = None;
        log::debug!("performance calculator paused");
    }

    /// Consumes one display-refresh callback.
    ///
    /// Returns the report when this frame closes a report interval after
    /// warm-up; the registered callback has already received it by then.
    /// Ignored unless running.
    pub fn on_frame(&mut self, timestamp: f64) -> Option<PerformanceReport> {
        if self.phase != CalculatorPhase::Running {
            return None;
        }
        let start = self.state.start_timestamp?;

        let interval = self.config.report_interval.as_secs_f64();
        self.window.append(timestamp);
        self.window.prune_older_than(timestamp - interval);

        if !self.state.warmup_complete
            && timestamp - start >= self.config.warmup.as_secs_f64()
        {
            self.state.warmup_complete = true;
            log::debug!("performance calculator warm-up complete");
        }

        let cycle_start = *self.cycle_start.get_or_insert(start);
        if timestamp - cycle_start < interval {
            return None;
        }

        // Cycles closing during warm-up are discarded.
        if !self.state.warmup_complete {
            self.rotate(timestamp);
            return None;
        }

        let fps = u32::try_from(self.window.count()).unwrap_or(u32::MAX);
        self.rotate(timestamp);

        let report = self.build_report(fps);
        log::debug!(
            "report: fps={} cpu={:.1}% mem={}/{}",
            report.fps,
            report.cpu_percent,
            report.memory_used,
            report.memory_total
        );

        if let Some(callback) = self.on_report.as_mut() {
            callback(&report);
        }
        Some(report)
    }

    fn rotate(&mut self, timestamp: f64) {
        self.window.reset();
        self.cycle_start = Some(timestamp);
    }

    fn build_report(&mut self, fps: u32) -> PerformanceReport {
        let cpu_percent = match self.sampler.sample_cpu() {
            Ok(cpu) => cpu,
            Err(err) => {
                log::warn!("{err}; reporting cpu as unavailable");
                CPU_UNAVAILABLE
            }
        };

        let (memory_used, memory_total) = match self.sampler.sample_memory() {
            Ok(mem) => (mem.used, mem.total),
            Err(err) => {
                log::warn!("{err}; reporting resident memory as 0");
                (0, self.sampler.total_memory())
            }
        };

        PerformanceReport { fps, cpu_percent, memory_used, memory_total }
    }
}
