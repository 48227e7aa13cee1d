use plotgrid::core::aggregate::{
    full_stacked_percents, pad_to_equal_length, padded_plain_matrix, signed_stack_bases,
    signed_stack_extents, stacked_prefix_sums, waterfall_prefix_sums, waterfall_running_total,
};
use plotgrid::core::series::SeriesSet;
use plotgrid::core::value::SeriesValue;

fn series_set(groups: &[&[f64]]) -> SeriesSet {
    let mut set = SeriesSet::new();
    for (k, values) in groups.iter().enumerate() {
        let values = values
            .iter()
            .map(|v| SeriesValue::new(*v).expect("finite value"))
            .collect();
        set.add(format!("series-{k}"), values).expect("add series");
    }
    set
}

#[test]
fn padding_extends_to_group_maximum_without_shortening() {
    let set = series_set(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0, 7.0, 8.0]]);
    let padded = pad_to_equal_length(set.all());

    assert_eq!(padded.len(), 2);
    assert_eq!(padded[0].len(), 5);
    assert_eq!(padded[1].len(), 5);
    // Original samples survive untouched; placeholders contribute zero.
    assert_eq!(padded[0][2].plain(), 3.0);
    assert_eq!(padded[0][3].plain(), 0.0);
    assert_eq!(padded[0][4].plain(), 0.0);
    assert_eq!(padded[1][4].plain(), 8.0);
}

#[test]
fn padding_of_empty_group_is_empty() {
    let set = SeriesSet::new();
    assert!(pad_to_equal_length(set.all()).is_empty());
}

#[test]
fn stacked_prefix_sum_of_first_series_is_identity() {
    let matrix = vec![vec![1.0, 2.0, 3.0]];
    let stacked = stacked_prefix_sums(&matrix);

    assert_eq!(stacked, vec![vec![1.0, 2.0, 3.0]]);
}

#[test]
fn stacked_prefix_sums_accumulate_per_index() {
    let matrix = vec![vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]];
    let stacked = stacked_prefix_sums(&matrix);

    assert_eq!(stacked[0], vec![1.0, 2.0, 3.0]);
    assert_eq!(stacked[1], vec![11.0, 22.0, 33.0]);
}

#[test]
fn signed_stack_bases_split_positive_and_negative_runs() {
    let matrix = vec![vec![1.0, 2.0, 3.0], vec![-1.0, 4.0, -2.0]];
    let bases = signed_stack_bases(&matrix);

    assert_eq!(bases[0], vec![0.0, 0.0, 0.0]);
    // Index 0: the negative value starts its own stack at zero.
    // Index 1: the positive value stacks on top of the prior 2.0.
    assert_eq!(bases[1], vec![0.0, 2.0, 0.0]);
}

#[test]
fn signed_stack_extents_cover_every_intermediate_sum() {
    let matrix = vec![vec![1.0, 2.0, 3.0], vec![-1.0, 4.0, -2.0]];
    let extents = signed_stack_extents(&matrix);

    let max = extents.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = extents.iter().copied().fold(f64::INFINITY, f64::min);
    assert_eq!(max, 6.0);
    assert_eq!(min, -2.0);
}

#[test]
fn full_stacked_percents_normalize_same_sign_subsets_independently() {
    let matrix = vec![vec![50.0], vec![-50.0]];
    let percents = full_stacked_percents(&matrix);

    assert_eq!(percents[0], vec![100.0]);
    assert_eq!(percents[1], vec![-100.0]);
}

#[test]
fn full_stacked_percents_share_out_mixed_magnitudes() {
    let matrix = vec![vec![30.0, 10.0], vec![70.0, 30.0]];
    let percents = full_stacked_percents(&matrix);

    assert_eq!(percents[0], vec![30.0, 25.0]);
    assert_eq!(percents[1], vec![70.0, 75.0]);
}

#[test]
fn full_stacked_percent_of_all_zero_index_is_zero() {
    let matrix = vec![vec![30.0, 0.0], vec![70.0, 0.0]];
    let percents = full_stacked_percents(&matrix);

    assert_eq!(percents[0][1], 0.0);
    assert_eq!(percents[1][1], 0.0);
    assert!(percents.iter().flatten().all(|p| p.is_finite()));
}

#[test]
fn waterfall_running_totals_track_the_prefix_sum_envelope() {
    assert_eq!(waterfall_prefix_sums(&[10.0, -3.0, 5.0]), vec![10.0, 7.0, 12.0]);
    assert_eq!(waterfall_running_total(&[10.0, -3.0, 5.0]), (12.0, 7.0));
    assert_eq!(waterfall_running_total(&[]), (0.0, 0.0));
    assert_eq!(waterfall_running_total(&[-5.0, -1.0]), (-5.0, -6.0));
}

#[test]
fn padded_plain_matrix_mirrors_padding() {
    let set = series_set(&[&[1.0], &[2.0, 3.0]]);
    let matrix = padded_plain_matrix(set.all());

    assert_eq!(matrix, vec![vec![1.0, 0.0], vec![2.0, 3.0]]);
}
