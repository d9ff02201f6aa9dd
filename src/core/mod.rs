pub mod anchor;
pub mod primitives;
pub mod range;
pub mod rebaser;
pub mod series_store;
pub mod time_axis;

pub use anchor::{AnchorResolution, resolve_anchor};
pub use primitives::{parse_timestamp, timestamp_from_unix_millis};
pub use range::{
    RangeClass, RangePreset, RangeRequest, classify_range, default_full_range_tolerance,
};
pub use rebaser::{rebase_series, rebase_values};
pub use series_store::{ChartSeriesSet, Line, SeriesArrays};
pub use time_axis::{TimeAxis, TimeExtent};
