//! chart-rebase: range-relative rebasing engine for indicator line charts.
//!
//! When a chart is zoomed to a sub-range, every line is recomputed as a chain
//! of relative returns reading 1.0 at the first visible point; returning to
//! the full range restores the original absolute values exactly. The `core`
//! module holds the pure algorithms, `api` the per-chart stateful facade.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod telemetry;

pub use api::{RebaseEngine, RebaseEngineConfig, RebaseOutcome};
pub use error::{RebaseError, RebaseResult};
