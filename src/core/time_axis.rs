use chrono::{DateTime, TimeDelta, Utc};

use crate::core::primitives::parse_timestamp;

/// Inclusive `[min, max]` bounds of the parsed timestamps of an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeExtent {
    pub min: DateTime<Utc>,
    pub max: DateTime<Utc>,
}

impl TimeExtent {
    #[must_use]
    pub fn span(self) -> TimeDelta {
        self.max - self.min
    }

    #[must_use]
    pub fn contains(self, time: DateTime<Utc>) -> bool {
        time >= self.min && time <= self.max
    }
}

/// Shared ordered timestamp axis of one chart.
///
/// Slots whose upstream label could not be parsed are kept as `None` so the
/// axis stays index-aligned with every line; those slots are skipped by anchor
/// search and extent computation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeAxis {
    stamps: Vec<Option<DateTime<Utc>>>,
}

impl TimeAxis {
    #[must_use]
    pub fn new(stamps: Vec<Option<DateTime<Utc>>>) -> Self {
        Self { stamps }
    }

    #[must_use]
    pub fn from_timestamps(stamps: impl IntoIterator<Item = DateTime<Utc>>) -> Self {
        Self {
            stamps: stamps.into_iter().map(Some).collect(),
        }
    }

    /// Parses upstream labels, keeping an unparsed slot for each bad label.
    #[must_use]
    pub fn parse<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            stamps: labels
                .iter()
                .map(|label| parse_timestamp(label.as_ref()))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<DateTime<Utc>> {
        self.stamps.get(index).copied().flatten()
    }

    #[must_use]
    pub fn stamps(&self) -> &[Option<DateTime<Utc>>] {
        &self.stamps
    }

    /// Iterates parsed slots in index order.
    pub fn parsed(&self) -> impl Iterator<Item = (usize, DateTime<Utc>)> + '_ {
        self.stamps
            .iter()
            .enumerate()
            .filter_map(|(index, stamp)| stamp.map(|time| (index, time)))
    }

    #[must_use]
    pub fn unparsed_count(&self) -> usize {
        self.stamps.iter().filter(|stamp| stamp.is_none()).count()
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool {
        let mut previous: Option<DateTime<Utc>> = None;
        for (_, time) in self.parsed() {
            if previous.is_some_and(|prev| time < prev) {
                return false;
            }
            previous = Some(time);
        }
        true
    }

    /// Returns `None` when no slot parsed.
    #[must_use]
    pub fn extent(&self) -> Option<TimeExtent> {
        self.parsed().fold(None, |acc, (_, time)| {
            Some(match acc {
                None => TimeExtent {
                    min: time,
                    max: time,
                },
                Some(extent) => TimeExtent {
                    min: extent.min.min(time),
                    max: extent.max.max(time),
                },
            })
        })
    }
}
