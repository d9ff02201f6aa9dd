use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::core::TimeAxis;

/// Where a sub-range anchor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorResolution {
    /// First axis index whose timestamp lies inside the window.
    InRange(usize),
    /// No index inside the window; nearest index to the window start.
    Nearest(usize),
    NoAnchor,
}

impl AnchorResolution {
    #[must_use]
    pub fn index(self) -> Option<usize> {
        match self {
            Self::InRange(index) | Self::Nearest(index) => Some(index),
            Self::NoAnchor => None,
        }
    }
}

/// Finds the axis index pinned to 1.0 for a sub-range.
///
/// Scans in increasing index order and returns the first parsed timestamp in
/// `[start, end]` (inclusive). Without a hit, falls back to the parsed
/// timestamp with the smallest absolute distance to `start`, lowest index on
/// ties. Unparsed axis slots are skipped. The window scan needs both bounds;
/// the fallback needs `start`.
#[must_use]
pub fn resolve_anchor(
    axis: &TimeAxis,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
) -> AnchorResolution {
    let (start, end) = match (start, end) {
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        bounds => bounds,
    };
    let window = start.zip(end);
    let mut nearest: Option<(usize, TimeDelta)> = None;

    for (index, time) in axis.parsed() {
        if let Some((lo, hi)) = window {
            if time >= lo && time <= hi {
                return AnchorResolution::InRange(index);
            }
        }

        if let Some(start) = start {
            let distance = (time - start).abs();
            // strict comparison keeps the lowest index on ties
            if nearest.is_none_or(|(_, best)| distance < best) {
                nearest = Some((index, distance));
            }
        }
    }

    nearest.map_or(AnchorResolution::NoAnchor, |(index, _)| {
        AnchorResolution::Nearest(index)
    })
}
