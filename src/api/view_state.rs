use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    AnchorResolution, ChartSeriesSet, RangeClass, RangeRequest, SeriesArrays, classify_range,
    rebase_series, resolve_anchor,
};

/// Display mode of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ViewState {
    #[default]
    Absolute,
    Rebased {
        anchor: usize,
    },
}

impl ViewState {
    #[must_use]
    pub fn mode(self) -> ViewMode {
        match self {
            Self::Absolute => ViewMode::Absolute,
            Self::Rebased { .. } => ViewMode::Rebased,
        }
    }

    #[must_use]
    pub fn anchor(self) -> Option<usize> {
        match self {
            Self::Absolute => None,
            Self::Rebased { anchor } => Some(anchor),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    Absolute,
    Rebased,
}

/// What a single applied request did to the displayed arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewTransition {
    /// Full range while rebased: originals were put back.
    Restored,
    /// Sub-range with a resolvable anchor: arrays were recomputed.
    Rebased { resolution: AnchorResolution },
    /// Sub-range without anchor: prior display left intact.
    NoAnchor,
    /// Full range while absolute, or rebasing disabled for the chart.
    Unchanged,
}

/// Owns a chart's [`ViewState`] and the arrays currently handed to the renderer.
///
/// Displayed arrays are only ever written here, always as a whole: either a
/// fresh rebase of the original snapshot or a copy of it.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewStateController {
    state: ViewState,
    displayed: SeriesArrays,
    rebase_enabled: bool,
}

impl ViewStateController {
    #[must_use]
    pub fn new(series: &ChartSeriesSet, rebase_enabled: bool) -> Self {
        Self {
            state: ViewState::Absolute,
            displayed: series.snapshot().clone(),
            rebase_enabled,
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn displayed(&self) -> &SeriesArrays {
        &self.displayed
    }

    #[must_use]
    pub fn rebase_enabled(&self) -> bool {
        self.rebase_enabled
    }

    /// Classifies `request` and transitions accordingly.
    pub fn apply(
        &mut self,
        series: &ChartSeriesSet,
        request: RangeRequest,
        tolerance: TimeDelta,
    ) -> ViewTransition {
        if !self.rebase_enabled {
            return ViewTransition::Unchanged;
        }

        match classify_range(request, series.extent(), tolerance) {
            RangeClass::FullRange => self.restore(series),
            RangeClass::SubRange { start, end } => {
                let resolution = resolve_anchor(series.axis(), start, end);
                let Some(anchor) = resolution.index() else {
                    warn!(?start, ?end, "no anchor for requested range; keeping display");
                    return ViewTransition::NoAnchor;
                };
                self.displayed = rebase_series(series, anchor);
                self.state = ViewState::Rebased { anchor };
                debug!(anchor, ?resolution, "rebased chart");
                ViewTransition::Rebased { resolution }
            }
        }
    }

    /// Puts the original snapshot back on display when rebased.
    pub fn restore(&mut self, series: &ChartSeriesSet) -> ViewTransition {
        if self.state == ViewState::Absolute {
            return ViewTransition::Unchanged;
        }
        self.displayed = series.snapshot().clone();
        self.state = ViewState::Absolute;
        debug!("restored original values");
        ViewTransition::Restored
    }
}
