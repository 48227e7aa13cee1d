//! Axis range resolution: "nice" max/min, tick-line count, and step search
//! under a minimum readable spacing constraint.
//!
//! The resolver is total: it never errors and always terminates with
//! `line_count >= 1` and an integer step (in fraction-scaled units), because
//! every fallback path monotonically enlarges the search space under an
//! explicit iteration cap.

use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::PlotPoint;

/// Extra pixels beyond the label height required between adjacent ticks.
pub const MIN_SPACING_PADDING_PX: f64 = 4.0;

/// Range used when no usable data is present.
pub const DEFAULT_AXIS_MAX: f64 = 100.0;

const MAX_RANGE_ITERATIONS: usize = 32;
const MAX_FRACTION_POWER: u32 = 6;

/// Pixel direction the value axis grows in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// Values grow upward (pixel y decreases). Column, line, area, radar.
    Vertical,
    /// Values grow rightward. Bar family in left-to-right flow.
    Horizontal,
    /// Values grow leftward. Bar family in right-to-left flow.
    HorizontalReversed,
}

impl AxisOrientation {
    /// Moves `offset_px` along the axis from `origin`, toward larger values.
    #[must_use]
    pub fn offset(self, origin: PlotPoint, offset_px: f64) -> PlotPoint {
        match self {
            AxisOrientation::Vertical => PlotPoint::new(origin.x, origin.y - offset_px),
            AxisOrientation::Horizontal => PlotPoint::new(origin.x + offset_px, origin.y),
            AxisOrientation::HorizontalReversed => PlotPoint::new(origin.x - offset_px, origin.y),
        }
    }
}

/// Everything the resolver needs besides the value set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisContext {
    /// Usable pixel length of the value axis.
    pub radius: f64,
    /// Host-measured label height driving the minimum tick spacing.
    pub font_height: f64,
    /// Pixel position of the axis minimum end.
    pub origin: PlotPoint,
    pub orientation: AxisOrientation,
    /// Two-sided bar/line layouts: search the dominant side alone and expand
    /// the other side to the resolved step.
    pub split_sides: bool,
    /// Radar layouts: the zero crossing must land exactly on a tick.
    pub zero_on_tick: bool,
    /// Fixed positive-side maximum when auto range adjustment is off.
    pub explicit_max: Option<f64>,
}

/// Pixel location of data value zero and how many ticks sit below it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZeroPoint {
    pub pixel: PlotPoint,
    pub level: u32,
}

/// Resolved axis layout, computed fresh per pass and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisMeasure {
    pub max: f64,
    pub min: f64,
    pub line_count: u32,
    pub step_value: f64,
    pub step_pixel_length: f64,
    pub units_per_value: f64,
    pub zero: ZeroPoint,
}

impl AxisMeasure {
    /// Tick values from `min` to `max` inclusive, one per line boundary.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        (0..=self.line_count)
            .map(|i| self.min + f64::from(i) * self.step_value)
            .collect()
    }

    /// Pixel offset of a data value from the axis minimum end.
    #[must_use]
    pub fn value_to_axis_offset(&self, value: f64) -> f64 {
        (value - self.min) * self.units_per_value
    }
}

/// Resolves the axis layout for one value set.
#[must_use]
pub fn resolve_axis(values: &[f64], ctx: &AxisContext) -> AxisMeasure {
    let radius = if ctx.radius.is_finite() && ctx.radius > 0.0 {
        ctx.radius
    } else {
        0.0
    };
    let min_spacing = ctx.font_height.max(0.0) + MIN_SPACING_PADDING_PX;

    let (raw_min, raw_max) = raw_range(values, ctx.explicit_max);

    if raw_min == 0.0 && raw_max == 0.0 {
        // Zero range: units-per-value is pinned to 0 instead of dividing by
        // the empty span.
        return AxisMeasure {
            max: 0.0,
            min: 0.0,
            line_count: 1,
            step_value: 0.0,
            step_pixel_length: radius,
            units_per_value: 0.0,
            zero: ZeroPoint {
                pixel: ctx.origin,
                level: 0,
            },
        };
    }

    let fraction = fraction_power(values).min(MAX_FRACTION_POWER);
    let scale = 10f64.powi(fraction as i32);

    let sides = if raw_min >= 0.0 {
        resolve_min_is_zero(
            ceil_units(raw_max * scale),
            radius,
            min_spacing,
            ctx.explicit_max.is_some(),
        )
    } else if raw_max <= 0.0 {
        let layout = resolve_min_is_zero(ceil_units(-raw_min * scale), radius, min_spacing, false);
        ResolvedSides {
            positive_units: 0,
            negative_units: layout.positive_units,
            line_count: layout.line_count,
            step_units: layout.step_units,
        }
    } else {
        resolve_complex(
            ceil_units(raw_max * scale),
            ceil_units(-raw_min * scale),
            radius,
            min_spacing,
            ctx,
        )
    };

    finish_measure(sides, scale, radius, ctx)
}

struct ResolvedSides {
    positive_units: i64,
    negative_units: i64,
    line_count: u32,
    step_units: i64,
}

fn finish_measure(sides: ResolvedSides, scale: f64, radius: f64, ctx: &AxisContext) -> AxisMeasure {
    let max = sides.positive_units as f64 / scale;
    let min = -(sides.negative_units as f64) / scale;
    let step_value = sides.step_units as f64 / scale;
    let diff = max - min;
    let units_per_value = if diff > 0.0 { radius / diff } else { 0.0 };
    let step_pixel_length = radius / f64::from(sides.line_count.max(1));

    // Walk the zero point up from `min` one step per tick until the running
    // value reaches zero; in scaled integer units that is a ceiling division.
    let level = if sides.step_units > 0 {
        ceil_div(sides.negative_units, sides.step_units)
    } else {
        0
    } as u32;
    let zero_offset_px = f64::from(level) * step_value * units_per_value;

    AxisMeasure {
        max,
        min,
        line_count: sides.line_count.max(1),
        step_value,
        step_pixel_length,
        units_per_value,
        zero: ZeroPoint {
            pixel: ctx.orientation.offset(ctx.origin, zero_offset_px),
            level,
        },
    }
}

fn raw_range(values: &[f64], explicit_max: Option<f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        if value.is_finite() {
            min = min.min(*value);
            max = max.max(*value);
        }
    }

    if min > max {
        // Empty or non-finite input degenerates to the documented default.
        min = 0.0;
        max = explicit_max.unwrap_or(DEFAULT_AXIS_MAX);
    }

    if let Some(explicit) = explicit_max {
        max = explicit;
        if min > 0.0 {
            min = 0.0;
        }
    }

    (min.min(0.0).max(-1e15), max.max(0.0).min(1e15))
}

/// Case "min-is-zero": all values non-negative; search the positive side.
///
/// Enumerates step candidates `m * 10^p` that divide the ceiled max, keeps
/// the largest line count still spaced at least `min_spacing` apart, and
/// otherwise enlarges max to the next multiple of `10^power` and retries.
fn resolve_min_is_zero(
    mut max_units: i64,
    radius: f64,
    min_spacing: f64,
    pinned_max: bool,
) -> ResolvedSides {
    for _ in 0..MAX_RANGE_ITERATIONS {
        if let Some((line_count, step_units)) =
            best_divisor_layout(max_units, radius, min_spacing, |_| true)
        {
            return ResolvedSides {
                positive_units: max_units,
                negative_units: 0,
                line_count,
                step_units,
            };
        }

        if pinned_max {
            // An explicit maximum is never enlarged; a single full-range
            // step is the defensive floor.
            break;
        }

        let block = 10i64.pow(decimal_power(max_units));
        max_units = round_up_multiple(max_units + 1, block);
    }

    ResolvedSides {
        positive_units: max_units,
        negative_units: 0,
        line_count: 1,
        step_units: max_units,
    }
}

/// Case "complex": mixed-sign range around zero.
fn resolve_complex(
    positive: i64,
    negative: i64,
    radius: f64,
    min_spacing: f64,
    ctx: &AxisContext,
) -> ResolvedSides {
    let pinned_max = ctx.explicit_max.is_some();
    let mut a = if pinned_max {
        positive
    } else {
        coerce_even_or_five(positive)
    };
    let mut b = coerce_even_or_five(negative);

    // Exact-fit shortcut: a small dominant side lays the axis out with unit
    // steps, one tick line per whole unit on either side of zero.
    let dominant = a.max(b);
    if dominant < 10 && a != b {
        let line_count = (a + b) as u32;
        if radius / f64::from(line_count) >= min_spacing {
            return ResolvedSides {
                positive_units: a,
                negative_units: b,
                line_count,
                step_units: 1,
            };
        }
    }

    for _ in 0..MAX_RANGE_ITERATIONS {
        let layout = if ctx.split_sides {
            best_split_layout(a, b, radius, min_spacing)
        } else if ctx.zero_on_tick {
            best_divisor_layout(a + b, radius, min_spacing, |step| {
                a % step == 0 && b % step == 0
            })
            .map(|(line_count, step_units)| (a, b, line_count, step_units))
        } else {
            best_divisor_layout(a + b, radius, min_spacing, |_| true)
                .map(|(line_count, step_units)| (a, b, line_count, step_units))
        };

        if let Some((pos, neg, line_count, step_units)) = layout {
            return ResolvedSides {
                positive_units: pos,
                negative_units: neg,
                line_count,
                step_units,
            };
        }

        // Re-derive with one side enlarged; the diff gains divisors while
        // the covered range only ever grows. A pinned explicit maximum is
        // never enlarged.
        if pinned_max || b <= a {
            b += 1;
        } else {
            a += 1;
        }
    }

    // Safe default: symmetric two-step layout, zero centered on a tick.
    let step_units = a.max(b);
    ResolvedSides {
        positive_units: step_units,
        negative_units: step_units,
        line_count: 2,
        step_units,
    }
}

/// Split-side search: resolve the dominant side alone, then expand the other
/// side up to a multiple of the chosen step so both sides stay tick-aligned.
fn best_split_layout(
    a: i64,
    b: i64,
    radius: f64,
    min_spacing: f64,
) -> Option<(i64, i64, u32, i64)> {
    let dominant = a.max(b);
    let power = decimal_power(dominant);
    let mut best: Option<(i64, i64, u32, i64)> = None;

    for p in 0..=power {
        let base = 10i64.pow(p);
        for m in 1..=9i64 {
            let step = m * base;
            if step > dominant {
                break;
            }
            if dominant % step != 0 {
                continue;
            }

            let pos = round_up_multiple(a, step);
            let neg = round_up_multiple(b, step);
            let line_count = ((pos + neg) / step) as u32;
            if radius / f64::from(line_count) < min_spacing {
                continue;
            }
            if best.is_none_or(|(_, _, count, _)| line_count > count) {
                best = Some((pos, neg, line_count, step));
            }
        }
    }

    best
}

/// Enumerates integer steps `m * 10^p` dividing `total` and accepted by the
/// extra predicate, returning the largest line count whose pixel spacing
/// stays readable.
fn best_divisor_layout(
    total: i64,
    radius: f64,
    min_spacing: f64,
    accept: impl Fn(i64) -> bool,
) -> Option<(u32, i64)> {
    let power = decimal_power(total);
    let mut candidates: SmallVec<[(u32, i64); 24]> = SmallVec::new();
    for p in 0..=power {
        let base = 10i64.pow(p);
        for m in 1..=9i64 {
            let step = m * base;
            if step > total {
                break;
            }
            if total % step != 0 || !accept(step) {
                continue;
            }
            candidates.push(((total / step) as u32, step));
        }
    }

    candidates
        .into_iter()
        .filter(|(line_count, _)| radius / f64::from(*line_count) >= min_spacing)
        .max_by_key(|(line_count, _)| *line_count)
}

/// Maximum number of decimal places across the value set, detected through
/// exact decimal conversion so 0.1 counts as one place, not seventeen.
#[must_use]
pub fn fraction_power(values: &[f64]) -> u32 {
    values
        .iter()
        .filter(|value| value.is_finite())
        .filter_map(|value| Decimal::from_f64(*value))
        .map(|decimal| decimal.normalize().scale())
        .max()
        .unwrap_or(0)
        .min(MAX_FRACTION_POWER)
}

/// Selects the larger absolute value, ignoring non-finite input.
#[must_use]
pub fn dominant_abs(values: &[f64]) -> f64 {
    values
        .iter()
        .filter(|value| value.is_finite())
        .map(|value| OrderedFloat(value.abs()))
        .max()
        .map(|value| value.0)
        .unwrap_or(0.0)
}

fn ceil_units(scaled: f64) -> i64 {
    let clamped = scaled.clamp(0.0, 1e15);
    (clamped.ceil() as i64).max(1)
}

fn decimal_power(units: i64) -> u32 {
    if units > 0 { units.ilog10() } else { 0 }
}

fn round_up_multiple(value: i64, multiple: i64) -> i64 {
    if multiple <= 0 {
        return value;
    }
    value.div_euclid(multiple) * multiple + if value % multiple == 0 { 0 } else { multiple }
}

fn coerce_even_or_five(mut value: i64) -> i64 {
    while value % 2 != 0 && value % 5 != 0 {
        value += 1;
    }
    value
}

fn ceil_div(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator - 1) / denominator
}
