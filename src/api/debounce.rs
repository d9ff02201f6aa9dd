use std::time::{Duration, Instant};

use indexmap::IndexMap;
use tracing::trace;

use crate::core::RangeRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingRequest {
    request: RangeRequest,
    last_update: Instant,
}

/// Coalesces bursts of range-change notifications per chart.
///
/// Only the latest request of each chart is retained; it becomes due once no
/// newer request arrived for `settle_delay`. Time is supplied by the caller so
/// stepping stays deterministic.
#[derive(Debug, Clone)]
pub struct RangeDebouncer {
    settle_delay: Duration,
    pending: IndexMap<String, PendingRequest>,
}

impl RangeDebouncer {
    #[must_use]
    pub fn new(settle_delay: Duration) -> Self {
        Self {
            settle_delay,
            pending: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Queues `request` for `chart_id`. Returns `true` when it replaced an
    /// earlier pending request.
    pub fn submit(&mut self, chart_id: &str, request: RangeRequest, at: Instant) -> bool {
        let pending = PendingRequest {
            request,
            last_update: at,
        };
        let superseded = self.pending.insert(chart_id.to_owned(), pending).is_some();
        trace!(chart_id, superseded, "queued range request");
        superseded
    }

    /// Removes and returns every request that has been quiet for the settle delay.
    pub fn take_settled(&mut self, at: Instant) -> Vec<(String, RangeRequest)> {
        let settle_delay = self.settle_delay;
        let mut settled = Vec::new();
        self.pending.retain(|chart_id, pending| {
            let due = at.saturating_duration_since(pending.last_update) >= settle_delay;
            if due {
                settled.push((chart_id.clone(), pending.request));
            }
            !due
        });
        settled
    }

    /// Removes and returns every pending request regardless of settling.
    pub fn drain(&mut self) -> Vec<(String, RangeRequest)> {
        self.pending
            .drain(..)
            .map(|(chart_id, pending)| (chart_id, pending.request))
            .collect()
    }

    pub fn cancel(&mut self, chart_id: &str) -> Option<RangeRequest> {
        self.pending
            .shift_remove(chart_id)
            .map(|pending| pending.request)
    }

    #[must_use]
    pub fn pending(&self, chart_id: &str) -> Option<RangeRequest> {
        self.pending.get(chart_id).map(|pending| pending.request)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
