//! Performance calculation.
//!
//! Turns the host's display-refresh callbacks into periodic reports:
//! - frames are counted per report interval (no per-frame arithmetic)
//! - CPU and memory are sampled once per interval
//! - failed samples degrade to sentinel values, never to a missing report

mod calculator;
mod config;
mod report;

pub use calculator::{CalculatorPhase, CalculatorState, PerformanceCalculator};
pub use config::{CalculatorConfig, DEFAULT_ACCUMULATION};
pub use report::{CPU_UNAVAILABLE, PerformanceReport};
