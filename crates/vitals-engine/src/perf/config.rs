use std::time::Duration;

/// Default length of both the warm-up and the report interval.
pub const DEFAULT_ACCUMULATION: Duration = Duration::from_secs(1);

/// Timing configuration for `PerformanceCalculator`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CalculatorConfig {
    /// Delay after `start()` before frame counts are considered stable.
    pub warmup: Duration,
    /// Length of one aggregation window, measured from the previous report.
    pub report_interval: Duration,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            warmup: DEFAULT_ACCUMULATION,
            report_interval: DEFAULT_ACCUMULATION,
        }
    }
}

impl CalculatorConfig {
    /// Builds a config from seconds, replacing unusable values with defaults.
    ///
    /// A zero warm-up is allowed; a zero report interval is not, since it
    /// would report on every frame.
    pub fn from_secs(warmup_secs: f64, report_interval_secs: f64) -> Self {
        let warmup = match duration_from_secs(warmup_secs, true) {
            Some(d) => d,
            None => {
                log::warn!("invalid warmup {warmup_secs}s; falling back to default");
                DEFAULT_ACCUMULATION
            }
        };

        let report_interval = match duration_from_secs(report_interval_secs, false) {
            Some(d) => d,
            None => {
                log::warn!(
                    "invalid report interval {report_interval_secs}s; falling back to default"
                );
                DEFAULT_ACCUMULATION
            }
        };

        Self { warmup, report_interval }
    }
}

fn duration_from_secs(secs: f64, allow_zero: bool) -> Option<Duration> {
    if !secs.is_finite() || secs < 0.0 || (secs == 0.0 && !allow_zero) {
        return None;
    }
    Duration::try_from_secs_f64(secs).ok()
}
