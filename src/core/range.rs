use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::core::TimeExtent;
use crate::core::primitives::parse_timestamp;

/// A requested visible window, or the explicit "show everything" sentinel.
///
/// Window bounds are optional because the charting layer can hand over labels
/// that fail to parse; such a bound takes no part in classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeRequest {
    All,
    Window {
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    },
}

impl RangeRequest {
    #[must_use]
    pub fn window(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::Window {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Builds a window from boundary labels, keeping unparsed bounds as `None`.
    #[must_use]
    pub fn from_labels(start: &str, end: &str) -> Self {
        Self::Window {
            start: parse_timestamp(start),
            end: parse_timestamp(end),
        }
    }

    /// Swaps reversed bounds so `start <= end` whenever both are present.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::Window {
                start: Some(start),
                end: Some(end),
            } if start > end => Self::window(end, start),
            other => other,
        }
    }
}

/// Outcome of [`classify_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeClass {
    FullRange,
    SubRange {
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    },
}

/// Default full-range tolerance, one day.
#[must_use]
pub fn default_full_range_tolerance() -> TimeDelta {
    TimeDelta::days(1)
}

/// Decides whether a request covers the dataset's full extent.
///
/// A window is full when both bounds are present and each lies strictly less
/// than `tolerance` away from the matching extent bound. Re-evaluated on every
/// call; nothing is cached.
#[must_use]
pub fn classify_range(
    request: RangeRequest,
    extent: Option<TimeExtent>,
    tolerance: TimeDelta,
) -> RangeClass {
    let (start, end) = match request.normalized() {
        RangeRequest::All => return RangeClass::FullRange,
        RangeRequest::Window { start, end } => (start, end),
    };

    if let (Some(extent), Some(start), Some(end)) = (extent, start, end) {
        let start_matches = (start - extent.min).abs() < tolerance;
        let end_matches = (end - extent.max).abs() < tolerance;
        if start_matches && end_matches {
            return RangeClass::FullRange;
        }
    }

    RangeClass::SubRange { start, end }
}

/// Preset range buttons offered by the chart toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangePreset {
    Months(u32),
    Years(u32),
    All,
}

impl RangePreset {
    /// The toolbar's standard buttons, in display order.
    pub const STANDARD: [RangePreset; 5] = [
        RangePreset::Months(1),
        RangePreset::Months(3),
        RangePreset::Months(6),
        RangePreset::Years(1),
        RangePreset::All,
    ];

    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Months(count) => format!("{count}M"),
            Self::Years(count) => format!("{count}Y"),
            Self::All => "All".to_owned(),
        }
    }

    /// Parses labels such as `1M`, `6M`, `1Y` or `All` (case-insensitive).
    #[must_use]
    pub fn parse_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Some(Self::All);
        }
        let unit = trimmed.chars().last()?;
        let count: u32 = trimmed[..trimmed.len() - unit.len_utf8()].parse().ok()?;
        if count == 0 {
            return None;
        }
        match unit.to_ascii_uppercase() {
            'M' => Some(Self::Months(count)),
            'Y' => Some(Self::Years(count)),
            _ => None,
        }
    }

    /// Resolves the preset against a dataset extent, stepping backward from
    /// the latest timestamp by calendar months. Without an extent every preset
    /// is `All`.
    #[must_use]
    pub fn to_request(self, extent: Option<TimeExtent>) -> RangeRequest {
        let Some(extent) = extent else {
            return RangeRequest::All;
        };
        let months = match self {
            Self::All => return RangeRequest::All,
            Self::Months(count) => count,
            Self::Years(count) => count.saturating_mul(12),
        };
        let start = extent
            .max
            .checked_sub_months(chrono::Months::new(months))
            .unwrap_or(extent.min);
        RangeRequest::window(start, extent.max)
    }
}
