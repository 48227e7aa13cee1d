//! Cross-series aggregation: equal-length padding, stacked prefix sums,
//! percent normalization, and waterfall running totals.
//!
//! Everything here runs before any per-series geometry build so index-wise
//! aggregation is always defined.

use crate::core::series::Series;
use crate::core::value::SeriesValue;

/// Pads every value list with zero placeholders so all lists share the group
/// maximum length. Never shortens a series.
#[must_use]
pub fn pad_to_equal_length(series: &[Series]) -> Vec<Vec<SeriesValue>> {
    let target = series.iter().map(Series::len).max().unwrap_or(0);
    series
        .iter()
        .map(|s| {
            let mut values = s.values().to_vec();
            values.resize(target, SeriesValue::placeholder());
            values
        })
        .collect()
}

/// Plain numeric matrix of the padded group, one row per series.
#[must_use]
pub fn padded_plain_matrix(series: &[Series]) -> Vec<Vec<f64>> {
    pad_to_equal_length(series)
        .iter()
        .map(|row| row.iter().map(SeriesValue::plain).collect())
        .collect()
}

/// Plain cumulative stacking: row `k` becomes `Σ_{j<=k} raw[j][i]`.
///
/// The first series is returned unchanged.
#[must_use]
pub fn stacked_prefix_sums(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let Some(first) = matrix.first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(matrix.len());
    let mut running = vec![0.0; first.len()];
    for row in matrix {
        for (total, value) in running.iter_mut().zip(row) {
            *total += value;
        }
        out.push(running.clone());
    }
    out
}

/// Signed stack base for series `k` at index `i`: the cumulative extent of
/// prior same-sign series at that index.
///
/// Column/bar stacking anchors each rectangle at this base so positive and
/// negative stacks grow independently from the zero line.
#[must_use]
pub fn signed_stack_bases(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let Some(first) = matrix.first() else {
        return Vec::new();
    };

    let width = first.len();
    let mut positive = vec![0.0; width];
    let mut negative = vec![0.0; width];
    let mut out = Vec::with_capacity(matrix.len());
    for row in matrix {
        let mut bases = Vec::with_capacity(width);
        for (i, value) in row.iter().enumerate() {
            if *value >= 0.0 {
                bases.push(positive[i]);
                positive[i] += value;
            } else {
                bases.push(negative[i]);
                negative[i] += value;
            }
        }
        out.push(bases);
    }
    out
}

/// Extents reached by signed stacking, flattened across the whole group.
///
/// This is the value set the axis resolver must cover for stacked styles:
/// every intermediate same-sign cumulative sum at every index.
#[must_use]
pub fn signed_stack_extents(matrix: &[Vec<f64>]) -> Vec<f64> {
    let Some(first) = matrix.first() else {
        return Vec::new();
    };

    let width = first.len();
    let mut positive = vec![0.0; width];
    let mut negative = vec![0.0; width];
    let mut extents = Vec::with_capacity(matrix.len() * width);
    for row in matrix {
        for (i, value) in row.iter().enumerate() {
            if *value >= 0.0 {
                positive[i] += value;
                extents.push(positive[i]);
            } else {
                negative[i] += value;
                extents.push(negative[i]);
            }
        }
    }
    extents
}

/// Percent normalization for full-stacked styles.
///
/// Each value becomes `sign(v) * |v| / Σ_j |raw[j][i]| * 100`, where the sum
/// runs over the same-sign subset at that index only: positive and negative
/// stacks are independent percent scales. An index whose same-sign sum is
/// zero yields exactly 0% for every series there, never NaN.
#[must_use]
pub fn full_stacked_percents(matrix: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let Some(first) = matrix.first() else {
        return Vec::new();
    };

    let width = first.len();
    let mut positive_totals = vec![0.0; width];
    let mut negative_totals = vec![0.0; width];
    for row in matrix {
        for (i, value) in row.iter().enumerate() {
            if *value >= 0.0 {
                positive_totals[i] += value.abs();
            } else {
                negative_totals[i] += value.abs();
            }
        }
    }

    matrix
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, value)| {
                    let total = if *value >= 0.0 {
                        positive_totals[i]
                    } else {
                        negative_totals[i]
                    };
                    if total == 0.0 {
                        0.0
                    } else {
                        value.signum() * (value.abs() * 100.0 / total)
                    }
                })
                .collect()
        })
        .collect()
}

/// Prefix-sum sequence of a waterfall series.
#[must_use]
pub fn waterfall_prefix_sums(values: &[f64]) -> Vec<f64> {
    let mut running = 0.0;
    values
        .iter()
        .map(|value| {
            running += value;
            running
        })
        .collect()
}

/// `(max, min)` of the waterfall running-total sequence.
///
/// Feeds the axis resolver directly in place of raw min/max.
#[must_use]
pub fn waterfall_running_total(values: &[f64]) -> (f64, f64) {
    let totals = waterfall_prefix_sums(values);
    let mut max = f64::NEG_INFINITY;
    let mut min = f64::INFINITY;
    for total in &totals {
        max = max.max(*total);
        min = min.min(*total);
    }
    if totals.is_empty() {
        (0.0, 0.0)
    } else {
        (max, min)
    }
}
