use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::core::primitives::{decimal_to_f64, finite_or_missing};
use crate::core::{TimeAxis, TimeExtent};
use crate::error::{RebaseError, RebaseResult};

/// Per-line value arrays keyed by display name, in declaration order.
pub type SeriesArrays = IndexMap<String, Vec<Option<f64>>>;

/// One named indicator line, index-aligned with its chart's [`TimeAxis`].
///
/// Missing cells are `None`; non-finite inputs are normalized to missing and
/// are never coerced to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    name: String,
    values: Vec<Option<f64>>,
}

impl Line {
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|value| value.and_then(finite_or_missing))
                .collect(),
        }
    }

    /// Builds a line from raw JSON cells as delivered by ingestion.
    ///
    /// Numbers and numeric strings are values; `null`, blank or non-numeric
    /// strings, booleans and nested values are missing.
    #[must_use]
    pub fn from_json_cells(name: impl Into<String>, cells: &[Value]) -> Self {
        Self {
            name: name.into(),
            values: cells.iter().map(json_cell_to_value).collect(),
        }
    }

    /// Builds a line from exact-decimal cells. Decimals that cannot be
    /// represented as a finite `f64` become missing.
    #[must_use]
    pub fn from_decimals(name: impl Into<String>, cells: &[Option<Decimal>]) -> Self {
        Self {
            name: name.into(),
            values: cells
                .iter()
                .map(|cell| cell.and_then(decimal_to_f64))
                .collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn defined_count(&self) -> usize {
        self.values.iter().filter(|value| value.is_some()).count()
    }
}

fn json_cell_to_value(cell: &Value) -> Option<f64> {
    match cell {
        Value::Number(number) => number.as_f64().and_then(finite_or_missing),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(finite_or_missing),
        _ => None,
    }
}

/// Immutable original data of one chart: the shared axis plus every line.
///
/// The original arrays are never mutated after [`ChartSeriesSet::load`]; every
/// transformation produces new arrays.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeriesSet {
    axis: TimeAxis,
    original: SeriesArrays,
    extent: Option<TimeExtent>,
}

impl ChartSeriesSet {
    /// Validates shapes and captures the original snapshot.
    ///
    /// Fails with [`RebaseError::ShapeMismatch`] when any line length differs
    /// from the axis length, and with [`RebaseError::DuplicateLine`] when two
    /// lines share a name.
    pub fn load(axis: TimeAxis, lines: Vec<Line>) -> RebaseResult<Self> {
        let expected = axis.len();
        let mut original = SeriesArrays::with_capacity(lines.len());
        for line in lines {
            if line.len() != expected {
                return Err(RebaseError::ShapeMismatch {
                    line: line.name,
                    expected,
                    actual: line.values.len(),
                });
            }
            if original.contains_key(&line.name) {
                return Err(RebaseError::DuplicateLine(line.name));
            }
            original.insert(line.name, line.values);
        }

        let extent = axis.extent();
        debug!(
            axis_len = expected,
            unparsed = axis.unparsed_count(),
            lines = original.len(),
            sorted = axis.is_sorted(),
            "loaded chart series set"
        );

        Ok(Self {
            axis,
            original,
            extent,
        })
    }

    #[must_use]
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Extent derived once at load time; `None` when no timestamp parsed.
    #[must_use]
    pub fn extent(&self) -> Option<TimeExtent> {
        self.extent
    }

    /// Borrowed view of the immutable original arrays.
    #[must_use]
    pub fn snapshot(&self) -> &SeriesArrays {
        &self.original
    }

    #[must_use]
    pub fn line(&self, name: &str) -> Option<&[Option<f64>]> {
        self.original.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn line_names(&self) -> Vec<&str> {
        self.original.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn lines_len(&self) -> usize {
        self.original.len()
    }
}
