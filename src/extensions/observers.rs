use serde::{Deserialize, Serialize};

use crate::api::ViewState;

/// Read-only chart state passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewContext<'a> {
    pub chart_id: &'a str,
    pub state: ViewState,
    pub axis_len: usize,
    pub lines_len: usize,
    pub pending_requests: usize,
}

/// Event stream exposed to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewEvent {
    Rebased { anchor: usize },
    Restored,
    NoAnchor,
    RequestQueued,
    RequestSuperseded,
}

/// Extension hook interface for chart view changes.
///
/// Observers see events and read chart context without mutating engine state.
pub trait ChartObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: ViewEvent, context: ViewContext<'_>);
}
