use crate::extensions::{ViewContext, ViewEvent};

use super::{RebaseEngine, ViewTransition};

impl RebaseEngine {
    pub(super) fn emit_view_event(&mut self, chart_id: &str, event: ViewEvent) {
        let Some(chart) = self.charts.get(chart_id) else {
            return;
        };
        let context = ViewContext {
            chart_id,
            state: chart.controller.state(),
            axis_len: chart.series.axis().len(),
            lines_len: chart.series.lines_len(),
            pending_requests: self.debouncer.pending_count(),
        };
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }

    pub(super) fn emit_transition(&mut self, chart_id: &str, transition: ViewTransition) {
        let event = match transition {
            ViewTransition::Restored => ViewEvent::Restored,
            ViewTransition::NoAnchor => ViewEvent::NoAnchor,
            ViewTransition::Rebased { resolution } => match resolution.index() {
                Some(anchor) => ViewEvent::Rebased { anchor },
                None => return,
            },
            ViewTransition::Unchanged => return,
        };
        self.emit_view_event(chart_id, event);
    }
}
