//! Stateful engine facade over the pure rebasing core.
//!
//! One [`RebaseEngine`] tracks any number of chart instances. Each chart owns
//! its immutable original series and a [`ViewStateController`]; nothing is
//! shared for writing across charts.

mod chart_registry;
mod debounce;
mod engine_config;
mod json_contract;
mod observer_dispatch;
mod observer_registry;
mod range_controller;
mod relayout_event;
mod view_state;

use chrono::TimeDelta;
use indexmap::IndexMap;

use crate::core::ChartSeriesSet;
use crate::error::RebaseResult;
use crate::extensions::ChartObserver;

pub use debounce::RangeDebouncer;
pub use engine_config::{ChartOptions, RebaseEngineConfig};
pub use json_contract::{
    REBASE_OUTCOME_JSON_SCHEMA_V1, RebaseNotice, RebaseOutcome, RebaseOutcomeJsonContractV1,
};
pub use relayout_event::decode_relayout_event;
pub use view_state::{ViewMode, ViewState, ViewStateController, ViewTransition};

pub type ChartId = String;

struct ChartInstance {
    series: ChartSeriesSet,
    controller: ViewStateController,
}

/// Entry point for host applications: registers charts and turns range
/// requests into arrays for the rendering layer.
pub struct RebaseEngine {
    config: RebaseEngineConfig,
    tolerance: TimeDelta,
    charts: IndexMap<ChartId, ChartInstance>,
    debouncer: RangeDebouncer,
    observers: Vec<Box<dyn ChartObserver>>,
}

impl RebaseEngine {
    pub fn new(config: RebaseEngineConfig) -> RebaseResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            tolerance: config.full_range_tolerance()?,
            charts: IndexMap::new(),
            debouncer: RangeDebouncer::new(config.settle_delay()),
            observers: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> RebaseEngineConfig {
        self.config
    }
}
