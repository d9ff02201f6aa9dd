use tracing::debug;

use crate::core::{ChartSeriesSet, Line, SeriesArrays, TimeAxis, TimeExtent};
use crate::error::{RebaseError, RebaseResult};

use super::{ChartId, ChartInstance, ChartOptions, RebaseEngine, ViewState, ViewStateController};

impl RebaseEngine {
    /// Loads a chart with the engine's default [`ChartOptions`].
    pub fn register_chart(
        &mut self,
        chart_id: impl Into<ChartId>,
        axis: TimeAxis,
        lines: Vec<Line>,
    ) -> RebaseResult<()> {
        let options = self.config.default_chart_options();
        self.register_chart_with_options(chart_id, axis, lines, options)
    }

    /// Loads a chart; the view starts `Absolute`.
    pub fn register_chart_with_options(
        &mut self,
        chart_id: impl Into<ChartId>,
        axis: TimeAxis,
        lines: Vec<Line>,
        options: ChartOptions,
    ) -> RebaseResult<()> {
        let chart_id = chart_id.into();
        if chart_id.is_empty() {
            return Err(RebaseError::InvalidData(
                "chart id must not be empty".to_owned(),
            ));
        }
        if self.charts.contains_key(&chart_id) {
            return Err(RebaseError::DuplicateChart(chart_id));
        }

        let series = ChartSeriesSet::load(axis, lines)?;
        let controller = ViewStateController::new(&series, options.rebase_on_zoom);
        debug!(
            chart_id = %chart_id,
            lines = series.lines_len(),
            rebase_on_zoom = options.rebase_on_zoom,
            "registered chart"
        );
        self.charts
            .insert(chart_id, ChartInstance { series, controller });
        Ok(())
    }

    /// Drops a chart together with its view state and any pending request.
    pub fn unregister_chart(&mut self, chart_id: &str) -> bool {
        self.debouncer.cancel(chart_id);
        self.charts.shift_remove(chart_id).is_some()
    }

    #[must_use]
    pub fn has_chart(&self, chart_id: &str) -> bool {
        self.charts.contains_key(chart_id)
    }

    #[must_use]
    pub fn chart_ids(&self) -> Vec<&str> {
        self.charts.keys().map(String::as_str).collect()
    }

    /// Original absolute arrays, bypassing the view state.
    pub fn get_original(&self, chart_id: &str) -> RebaseResult<SeriesArrays> {
        Ok(self.chart(chart_id)?.series.snapshot().clone())
    }

    /// Arrays currently on display.
    pub fn displayed(&self, chart_id: &str) -> RebaseResult<&SeriesArrays> {
        Ok(self.chart(chart_id)?.controller.displayed())
    }

    pub fn view_state(&self, chart_id: &str) -> RebaseResult<ViewState> {
        Ok(self.chart(chart_id)?.controller.state())
    }

    pub fn extent(&self, chart_id: &str) -> RebaseResult<Option<TimeExtent>> {
        Ok(self.chart(chart_id)?.series.extent())
    }

    pub fn series(&self, chart_id: &str) -> RebaseResult<&ChartSeriesSet> {
        Ok(&self.chart(chart_id)?.series)
    }

    pub(super) fn chart(&self, chart_id: &str) -> RebaseResult<&ChartInstance> {
        self.charts
            .get(chart_id)
            .ok_or_else(|| RebaseError::UnknownChart(chart_id.to_owned()))
    }
}
