#[cfg(feature = "parallel-rebase")]
use rayon::prelude::*;

use crate::core::{ChartSeriesSet, SeriesArrays};

/// Rebases one line so the anchor reads 1.0, chaining day-over-day ratios of
/// the original values forward and backward through the whole series.
///
/// Returns `None` when the anchor is out of bounds or the line has no value at
/// the anchor; such a line is left with its original values by callers.
///
/// A step needs the current value, its neighbor toward the anchor, and the
/// neighbor's rebased value, with a non-zero neighbor. Otherwise the cell is
/// `None` and so is every cell further from the anchor in that direction.
/// A step that overflows to a non-finite value breaks the chain the same way.
#[must_use]
pub fn rebase_values(values: &[Option<f64>], anchor: usize) -> Option<Vec<Option<f64>>> {
    values.get(anchor).copied().flatten()?;

    let mut rebased = vec![None; values.len()];
    rebased[anchor] = Some(1.0);

    for index in anchor + 1..values.len() {
        rebased[index] = chain_step(values[index], values[index - 1], rebased[index - 1]);
        if rebased[index].is_none() {
            break;
        }
    }

    for index in (0..anchor).rev() {
        rebased[index] = chain_step(values[index], values[index + 1], rebased[index + 1]);
        if rebased[index].is_none() {
            break;
        }
    }

    Some(rebased)
}

fn chain_step(
    current: Option<f64>,
    neighbor: Option<f64>,
    neighbor_rebased: Option<f64>,
) -> Option<f64> {
    match (current, neighbor, neighbor_rebased) {
        (Some(current), Some(neighbor), Some(neighbor_rebased)) if neighbor != 0.0 => {
            let value = neighbor_rebased * (current / neighbor);
            value.is_finite().then_some(value)
        }
        _ => None,
    }
}

/// Rebases every line of a chart at `anchor`, always from the original
/// snapshot. Lines without a value at the anchor keep their original arrays.
///
/// Output preserves line declaration order.
#[must_use]
pub fn rebase_series(series: &ChartSeriesSet, anchor: usize) -> SeriesArrays {
    #[cfg(feature = "parallel-rebase")]
    {
        series
            .snapshot()
            .par_iter()
            .map(|(name, values)| (name.clone(), rebase_or_keep(values, anchor)))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }

    #[cfg(not(feature = "parallel-rebase"))]
    {
        series
            .snapshot()
            .iter()
            .map(|(name, values)| (name.clone(), rebase_or_keep(values, anchor)))
            .collect()
    }
}

fn rebase_or_keep(values: &[Option<f64>], anchor: usize) -> Vec<Option<f64>> {
    rebase_values(values, anchor).unwrap_or_else(|| values.to_vec())
}
