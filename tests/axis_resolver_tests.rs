use plotgrid::core::axis::{AxisContext, AxisOrientation, resolve_axis};
use plotgrid::core::types::PlotPoint;

fn vertical_context(radius: f64, font_height: f64) -> AxisContext {
    AxisContext {
        radius,
        font_height,
        origin: PlotPoint::new(0.0, radius),
        orientation: AxisOrientation::Vertical,
        split_sides: false,
        zero_on_tick: false,
        explicit_max: None,
    }
}

#[test]
fn positive_values_resolve_with_zero_min() {
    let measure = resolve_axis(&[1.0, 2.0, 3.0, 4.0, 5.0], &vertical_context(300.0, 12.0));

    assert_eq!(measure.min, 0.0);
    assert_eq!(measure.max, 5.0);
    assert_eq!(measure.line_count, 5);
    assert_eq!(measure.step_value, 1.0);
    assert_eq!(measure.units_per_value, 60.0);
    assert_eq!(measure.step_pixel_length, 60.0);
    assert_eq!(measure.zero.level, 0);
    assert_eq!(measure.zero.pixel, PlotPoint::new(0.0, 300.0));
}

#[test]
fn negative_values_resolve_with_zero_max_and_shifted_zero_point() {
    let measure = resolve_axis(&[-1.0, -2.0, -3.0], &vertical_context(300.0, 12.0));

    assert_eq!(measure.max, 0.0);
    assert_eq!(measure.min, -3.0);
    assert_eq!(measure.line_count, 3);
    assert_eq!(measure.step_value, 1.0);
    // Zero sits at the very top of the drawable axis, one level per tick.
    assert_eq!(measure.zero.level, 3);
    assert_eq!(measure.zero.pixel, PlotPoint::new(0.0, 0.0));
}

#[test]
fn fractional_values_scale_into_integer_steps() {
    let measure = resolve_axis(&[0.5, 1.25, 2.0], &vertical_context(300.0, 12.0));

    assert_eq!(measure.min, 0.0);
    assert_eq!(measure.max, 2.0);
    assert_eq!(measure.line_count, 10);
    assert!((measure.step_value - 0.2).abs() <= 1e-12);
}

#[test]
fn step_times_line_count_spans_the_resolved_range() {
    for values in [
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![0.5, 1.25, 2.0],
        vec![-3.5, 7.25],
        vec![13.0],
        vec![-0.75, -42.0],
    ] {
        let measure = resolve_axis(&values, &vertical_context(480.0, 14.0));
        let span = measure.max - measure.min;
        let stepped = measure.step_value * f64::from(measure.line_count);
        assert!(
            (span - stepped).abs() <= span.abs() * 1e-9 + 1e-9,
            "span {span} != step*count {stepped} for {values:?}"
        );
    }
}

#[test]
fn line_count_is_largest_candidate_meeting_minimum_spacing() {
    // radius 100 and font 16 allow at most 100 / 20 = 5 lines; max 10 has
    // candidate counts 10, 5, 2, 1.
    let measure = resolve_axis(&[10.0], &vertical_context(100.0, 16.0));

    assert_eq!(measure.line_count, 5);
    assert_eq!(measure.step_value, 2.0);
}

#[test]
fn awkward_max_is_enlarged_to_the_next_power_multiple() {
    // max 42 offers counts {42, 21, 14, 7, 6}, none fitting 5 readable
    // lines; the fallback enlarges to 50 and retries.
    let measure = resolve_axis(&[42.0], &vertical_context(100.0, 16.0));

    assert_eq!(measure.max, 50.0);
    assert_eq!(measure.line_count, 5);
    assert_eq!(measure.step_value, 10.0);
}

#[test]
fn mixed_sign_small_dominant_side_uses_unit_steps() {
    let measure = resolve_axis(&[6.0, -2.0], &vertical_context(300.0, 12.0));

    assert_eq!(measure.max, 6.0);
    assert_eq!(measure.min, -2.0);
    assert_eq!(measure.line_count, 8);
    assert_eq!(measure.step_value, 1.0);
    assert_eq!(measure.zero.level, 2);
    // min end at y=300, two unit ticks of 37.5px each above it.
    assert_eq!(measure.zero.pixel.y, 225.0);
}

#[test]
fn mixed_sign_sides_are_coerced_even_or_multiple_of_five() {
    let measure = resolve_axis(&[7.0, -3.0], &vertical_context(300.0, 12.0));

    // 7 coerces to 8 and 3 to 4 before the search.
    assert_eq!(measure.max, 8.0);
    assert_eq!(measure.min, -4.0);
    assert_eq!(measure.zero.level, 4);
}

#[test]
fn zero_on_tick_layout_divides_both_sides() {
    let mut ctx = vertical_context(300.0, 12.0);
    ctx.zero_on_tick = true;
    let measure = resolve_axis(&[19.5, -9.5], &ctx);

    assert!(measure.step_value > 0.0);
    let below = -measure.min / measure.step_value;
    assert!(
        (below - below.round()).abs() <= 1e-9,
        "zero crossing must land on a tick, got {below} steps below zero"
    );
}

#[test]
fn split_sides_expands_the_smaller_side_to_the_step() {
    let mut ctx = vertical_context(300.0, 12.0);
    ctx.split_sides = true;
    let measure = resolve_axis(&[40.0, -7.0], &ctx);

    assert!(measure.step_value > 0.0);
    let positive_steps = measure.max / measure.step_value;
    let negative_steps = -measure.min / measure.step_value;
    assert!((positive_steps - positive_steps.round()).abs() <= 1e-9);
    assert!((negative_steps - negative_steps.round()).abs() <= 1e-9);
}

#[test]
fn empty_input_degenerates_to_default_range() {
    let measure = resolve_axis(&[], &vertical_context(300.0, 12.0));

    assert_eq!(measure.min, 0.0);
    assert_eq!(measure.max, 100.0);
    assert_eq!(measure.line_count, 10);
    assert_eq!(measure.step_value, 10.0);
}

#[test]
fn all_zero_input_pins_units_per_value_to_zero() {
    let measure = resolve_axis(&[0.0, 0.0, 0.0], &vertical_context(300.0, 12.0));

    assert_eq!(measure.max, 0.0);
    assert_eq!(measure.min, 0.0);
    assert_eq!(measure.units_per_value, 0.0);
    assert_eq!(measure.line_count, 1);
}

#[test]
fn explicit_max_is_never_enlarged() {
    let mut ctx = vertical_context(300.0, 12.0);
    ctx.explicit_max = Some(60.0);
    let measure = resolve_axis(&[5.0, 55.0], &ctx);

    assert_eq!(measure.max, 60.0);
    assert_eq!(measure.min, 0.0);
    assert_eq!(measure.line_count, 15);
    assert_eq!(measure.step_value, 4.0);
}

#[test]
fn unreadable_radius_still_terminates_with_one_line() {
    let measure = resolve_axis(&[7.0], &vertical_context(10.0, 12.0));

    assert_eq!(measure.line_count, 1);
    assert_eq!(measure.step_value, measure.max);
}

#[test]
fn tick_values_walk_from_min_to_max() {
    let measure = resolve_axis(&[6.0, -2.0], &vertical_context(300.0, 12.0));
    let ticks = measure.tick_values();

    assert_eq!(ticks.len(), 9);
    assert_eq!(ticks[0], -2.0);
    assert_eq!(ticks[8], 6.0);
    assert_eq!(ticks[2], 0.0);
}

#[test]
fn waterfall_envelope_feeds_min_is_zero_case() {
    // Running totals of [10, -3, 5] are [10, 7, 12]; max 12 and min 7 are
    // both non-negative so the axis starts at zero.
    let measure = resolve_axis(&[12.0, 7.0], &vertical_context(300.0, 12.0));

    assert_eq!(measure.min, 0.0);
    assert_eq!(measure.max, 12.0);
    assert_eq!(measure.line_count, 12);
}
