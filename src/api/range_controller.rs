use std::time::Instant;

use serde_json::Value;
use tracing::{debug, trace, warn};

use crate::core::{RangePreset, RangeRequest};
use crate::error::{RebaseError, RebaseResult};
use crate::extensions::ViewEvent;

use super::{ChartId, RebaseEngine, RebaseOutcome, decode_relayout_event};

impl RebaseEngine {
    /// Applies `request` to a chart immediately and returns what to render.
    ///
    /// Full ranges restore the original arrays, sub-ranges rebase at the
    /// resolved anchor, and a sub-range without anchor keeps the current
    /// display and reports [`super::RebaseNotice::NoAnchor`]. Any request still
    /// queued for the chart is discarded: the latest issued request wins.
    pub fn rebase_or_restore(
        &mut self,
        chart_id: &str,
        request: RangeRequest,
    ) -> RebaseResult<RebaseOutcome> {
        let tolerance = self.tolerance;
        let chart = self
            .charts
            .get_mut(chart_id)
            .ok_or_else(|| RebaseError::UnknownChart(chart_id.to_owned()))?;

        if self.debouncer.cancel(chart_id).is_some() {
            trace!(chart_id, "dropped queued request in favor of direct request");
        }

        let transition = chart.controller.apply(&chart.series, request, tolerance);
        let outcome = RebaseOutcome::from_controller(&chart.controller, transition);
        debug!(chart_id, ?transition, mode = ?outcome.mode, "applied range request");

        self.emit_transition(chart_id, transition);
        Ok(outcome)
    }

    /// Resolves a toolbar preset against the chart's extent and applies it.
    pub fn apply_preset(
        &mut self,
        chart_id: &str,
        preset: RangePreset,
    ) -> RebaseResult<RebaseOutcome> {
        let request = preset.to_request(self.extent(chart_id)?);
        self.rebase_or_restore(chart_id, request)
    }

    /// Queues a range change for settling. Replaces any earlier pending
    /// request of the same chart.
    pub fn notify_range_change(
        &mut self,
        chart_id: &str,
        request: RangeRequest,
        at: Instant,
    ) -> RebaseResult<()> {
        self.chart(chart_id)?;
        let superseded = self.debouncer.submit(chart_id, request, at);
        if superseded {
            self.emit_view_event(chart_id, ViewEvent::RequestSuperseded);
        }
        self.emit_view_event(chart_id, ViewEvent::RequestQueued);
        Ok(())
    }

    /// Decodes a relayout payload and queues it. Returns `false` when the
    /// payload carried no x-axis range and was ignored.
    pub fn handle_relayout(
        &mut self,
        chart_id: &str,
        event: &Value,
        layout_range: Option<&Value>,
        at: Instant,
    ) -> RebaseResult<bool> {
        self.chart(chart_id)?;
        let Some(request) = decode_relayout_event(event, layout_range) else {
            trace!(chart_id, "relayout without x range ignored");
            return Ok(false);
        };
        self.notify_range_change(chart_id, request, at)?;
        Ok(true)
    }

    /// Runs every queued request that has been quiet for the settle delay.
    pub fn poll_settled(&mut self, at: Instant) -> Vec<(ChartId, RebaseOutcome)> {
        let settled = self.debouncer.take_settled(at);
        self.run_requests(settled)
    }

    /// Runs every queued request now, settled or not.
    pub fn flush(&mut self) -> Vec<(ChartId, RebaseOutcome)> {
        let pending = self.debouncer.drain();
        self.run_requests(pending)
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.debouncer.pending_count()
    }

    fn run_requests(&mut self, requests: Vec<(ChartId, RangeRequest)>) -> Vec<(ChartId, RebaseOutcome)> {
        let mut outcomes = Vec::with_capacity(requests.len());
        for (chart_id, request) in requests {
            match self.rebase_or_restore(&chart_id, request) {
                Ok(outcome) => outcomes.push((chart_id, outcome)),
                Err(err) => warn!(chart_id = %chart_id, error = %err, "skipping settled request"),
            }
        }
        outcomes
    }
}
