//! Hooks for host code that reacts to view changes.

pub mod observers;

pub use observers::{ChartObserver, ViewContext, ViewEvent};
