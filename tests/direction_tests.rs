use plotgrid::core::direction::{Direction, classify_direction};
use plotgrid::core::style::ChartStyle;

#[test]
fn non_negative_values_grow_north_east() {
    assert_eq!(
        classify_direction(&[1.0, 2.0, 0.0], ChartStyle::Lines),
        Direction::NorthEast
    );
}

#[test]
fn negative_values_grow_south_east_for_vertical_styles() {
    assert_eq!(
        classify_direction(&[-1.0, -2.0], ChartStyle::Columns),
        Direction::SouthEast
    );
}

#[test]
fn negative_values_grow_north_west_for_bar_styles() {
    assert_eq!(
        classify_direction(&[-1.0, -2.0], ChartStyle::Bars),
        Direction::NorthWest
    );
}

#[test]
fn mixed_values_split_vertically_or_horizontally_by_family() {
    assert_eq!(
        classify_direction(&[1.0, -2.0], ChartStyle::Columns),
        Direction::NorthEastSouthEast
    );
    assert_eq!(
        classify_direction(&[1.0, -2.0], ChartStyle::StackedBars),
        Direction::NorthEastNorthWest
    );
}

#[test]
fn single_value_classifies_by_its_sign() {
    assert_eq!(
        classify_direction(&[3.0], ChartStyle::Lines),
        Direction::NorthEast
    );
    assert_eq!(
        classify_direction(&[-3.0], ChartStyle::Lines),
        Direction::SouthEast
    );
}

#[test]
fn funnel_always_grows_north_east() {
    assert_eq!(
        classify_direction(&[-5.0, -1.0], ChartStyle::Funnel),
        Direction::NorthEast
    );
}

#[test]
fn waterfall_classifies_the_running_total_not_raw_values() {
    // Totals of [10, -3, 5] stay positive even though a raw value is
    // negative.
    assert_eq!(
        classify_direction(&[10.0, -3.0, 5.0], ChartStyle::Waterfall),
        Direction::NorthEast
    );
    assert_eq!(
        classify_direction(&[5.0, -10.0], ChartStyle::Waterfall),
        Direction::NorthEastSouthEast
    );
    assert_eq!(
        classify_direction(&[-5.0, -1.0], ChartStyle::Waterfall),
        Direction::SouthEast
    );
}

#[test]
fn empty_input_defaults_to_north_east() {
    assert_eq!(classify_direction(&[], ChartStyle::Lines), Direction::NorthEast);
}
