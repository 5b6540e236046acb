use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::perf::CalculatorConfig;

use super::text::VersionInfo;

/// Monitor configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonitorConfig {
    pub calculator: CalculatorConfig,
    pub app_version_hidden: bool,
    pub device_version_hidden: bool,
    pub versions: VersionInfo,
}

impl MonitorConfig {
    /// Parses a JSON config. Missing keys take their defaults.
    ///
    /// ```json
    /// { "warmup_secs": 1.0, "report_interval_secs": 0.5,
    ///   "device_version_hidden": true,
    ///   "versions": { "app_version": "1.2", "app_build": "34" } }
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(json).context("invalid monitor config")?;
        Ok(Self::from_raw(raw))
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json_str(&json).with_context(|| format!("in {}", path.display()))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let defaults = CalculatorConfig::default();
        let calculator = CalculatorConfig::from_secs(
            raw.warmup_secs.unwrap_or(defaults.warmup.as_secs_f64()),
            raw.report_interval_secs
                .unwrap_or(defaults.report_interval.as_secs_f64()),
        );

        Self {
            calculator,
            app_version_hidden: raw.app_version_hidden,
            device_version_hidden: raw.device_version_hidden,
            versions: raw.versions,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    warmup_secs: Option<f64>,
    report_interval_secs: Option<f64>,
    app_version_hidden: bool,
    device_version_hidden: bool,
    versions: VersionInfo,
}
