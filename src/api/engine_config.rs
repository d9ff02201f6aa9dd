use std::time::Duration;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::error::{RebaseError, RebaseResult};

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load engine setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebaseEngineConfig {
    /// A window bound closer than this to the matching extent bound counts as full range.
    #[serde(default = "default_full_range_tolerance_ms")]
    pub full_range_tolerance_ms: i64,
    /// Quiet period a chart's latest range request must observe before it runs.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
    /// Default for charts registered without explicit [`ChartOptions`].
    #[serde(default = "default_rebase_on_zoom")]
    pub rebase_on_zoom: bool,
}

impl Default for RebaseEngineConfig {
    fn default() -> Self {
        Self {
            full_range_tolerance_ms: default_full_range_tolerance_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            rebase_on_zoom: default_rebase_on_zoom(),
        }
    }
}

impl RebaseEngineConfig {
    #[must_use]
    pub fn with_full_range_tolerance_ms(mut self, tolerance_ms: i64) -> Self {
        self.full_range_tolerance_ms = tolerance_ms;
        self
    }

    #[must_use]
    pub fn with_settle_delay_ms(mut self, settle_delay_ms: u64) -> Self {
        self.settle_delay_ms = settle_delay_ms;
        self
    }

    #[must_use]
    pub fn with_rebase_on_zoom(mut self, enabled: bool) -> Self {
        self.rebase_on_zoom = enabled;
        self
    }

    pub fn validate(self) -> RebaseResult<Self> {
        self.full_range_tolerance()?;
        Ok(self)
    }

    pub fn full_range_tolerance(self) -> RebaseResult<TimeDelta> {
        if self.full_range_tolerance_ms <= 0 {
            return Err(RebaseError::InvalidData(
                "full range tolerance must be > 0 ms".to_owned(),
            ));
        }
        TimeDelta::try_milliseconds(self.full_range_tolerance_ms).ok_or_else(|| {
            RebaseError::InvalidData("full range tolerance is out of range".to_owned())
        })
    }

    #[must_use]
    pub fn settle_delay(self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }

    #[must_use]
    pub fn default_chart_options(self) -> ChartOptions {
        ChartOptions {
            rebase_on_zoom: self.rebase_on_zoom,
        }
    }

    pub fn from_json_str(input: &str) -> RebaseResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            RebaseError::InvalidData(format!("failed to parse engine config json: {e}"))
        })?;
        config.validate()
    }

    pub fn to_json_pretty(self) -> RebaseResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            RebaseError::InvalidData(format!("failed to serialize engine config json: {e}"))
        })
    }
}

/// Per-chart behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartOptions {
    /// When `false` the chart stays absolute regardless of range requests.
    #[serde(default = "default_rebase_on_zoom")]
    pub rebase_on_zoom: bool,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            rebase_on_zoom: default_rebase_on_zoom(),
        }
    }
}

fn default_full_range_tolerance_ms() -> i64 {
    86_400_000
}

fn default_settle_delay_ms() -> u64 {
    300
}

fn default_rebase_on_zoom() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::RebaseEngineConfig;

    #[test]
    fn zero_tolerance_is_rejected() {
        let err = RebaseEngineConfig::default()
            .with_full_range_tolerance_ms(0)
            .validate()
            .expect_err("zero tolerance must fail");
        assert!(format!("{err}").contains("full range tolerance"));
    }

    #[test]
    fn default_tolerance_is_one_day() {
        let tolerance = RebaseEngineConfig::default()
            .full_range_tolerance()
            .expect("tolerance");
        assert_eq!(tolerance.num_hours(), 24);
    }
}
