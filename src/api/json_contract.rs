use serde::{Deserialize, Serialize};

use crate::core::SeriesArrays;
use crate::error::{RebaseError, RebaseResult};

use super::{ViewMode, ViewState, ViewStateController, ViewTransition};

pub const REBASE_OUTCOME_JSON_SCHEMA_V1: u32 = 1;

/// Recoverable conditions reported alongside an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebaseNotice {
    /// The requested range had no usable timestamp in or near it; the
    /// previously displayed arrays were kept.
    NoAnchor,
}

/// Data handed to the rendering layer after a range request.
///
/// `arrays` always holds every line of the chart, in declaration order, with
/// missing cells as `None` (`null` in JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebaseOutcome {
    pub mode: ViewMode,
    pub anchor: Option<usize>,
    pub arrays: SeriesArrays,
    #[serde(default)]
    pub notice: Option<RebaseNotice>,
}

impl RebaseOutcome {
    pub(super) fn from_controller(
        controller: &ViewStateController,
        transition: ViewTransition,
    ) -> Self {
        let state: ViewState = controller.state();
        Self {
            mode: state.mode(),
            anchor: state.anchor(),
            arrays: controller.displayed().clone(),
            notice: matches!(transition, ViewTransition::NoAnchor).then_some(RebaseNotice::NoAnchor),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebaseOutcomeJsonContractV1 {
    pub schema_version: u32,
    pub outcome: RebaseOutcome,
}

impl RebaseOutcome {
    pub fn to_json_contract_v1_pretty(&self) -> RebaseResult<String> {
        let payload = RebaseOutcomeJsonContractV1 {
            schema_version: REBASE_OUTCOME_JSON_SCHEMA_V1,
            outcome: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RebaseError::InvalidData(format!("failed to serialize outcome contract v1: {e}"))
        })
    }

    /// Accepts either a bare outcome or a v1 contract envelope.
    pub fn from_json_compat_str(input: &str) -> RebaseResult<Self> {
        if let Ok(outcome) = serde_json::from_str::<RebaseOutcome>(input) {
            return Ok(outcome);
        }
        let payload: RebaseOutcomeJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            RebaseError::InvalidData(format!("failed to parse outcome json payload: {e}"))
        })?;
        if payload.schema_version != REBASE_OUTCOME_JSON_SCHEMA_V1 {
            return Err(RebaseError::InvalidData(format!(
                "unsupported outcome schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.outcome)
    }
}
