// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Annospan-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Annospan and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::{fixture, rstest};

use super::{ClickEffect, SelectionRange, NEAR_WINDOW};
use crate::model::SelectionInterval;

#[fixture]
fn ten_to_twenty() -> SelectionRange {
    let mut range = SelectionRange::default();
    range.restore(10, 20);
    range
}

#[test]
fn first_click_starts_single_token_interval() {
    let mut range = SelectionRange::default();
    assert!(range.is_empty());
    assert_eq!(range.click(42), SelectionInterval::single(42));
    assert_eq!(range.interval(), Some(SelectionInterval::new(42, 42)));
}

#[rstest]
#[case::tie_moves_end(15, (10, 15), ClickEffect::MovedEnd)]
#[case::far_before(4, (4, 4), ClickEffect::Reset)]
#[case::far_after(26, (26, 26), ClickEffect::Reset)]
#[case::near_before(7, (7, 20), ClickEffect::ExtendedStart)]
#[case::window_edge_before(5, (5, 20), ClickEffect::ExtendedStart)]
#[case::window_edge_after(25, (10, 25), ClickEffect::ExtendedEnd)]
#[case::near_after(22, (10, 22), ClickEffect::ExtendedEnd)]
#[case::interior_closer_to_start(12, (12, 20), ClickEffect::MovedStart)]
#[case::interior_closer_to_end(18, (10, 18), ClickEffect::MovedEnd)]
fn click_merges_into_ten_to_twenty(
    mut ten_to_twenty: SelectionRange,
    #[case] token: usize,
    #[case] expected: (usize, usize),
    #[case] effect: ClickEffect,
) {
    assert_eq!(ten_to_twenty.merge(token).1, effect);
    let interval = ten_to_twenty.click(token);
    assert_eq!((interval.start(), interval.end()), expected);
}

#[rstest]
fn clicking_either_boundary_is_a_fixed_point(mut ten_to_twenty: SelectionRange) {
    assert_eq!(ten_to_twenty.click(10), SelectionInterval::new(10, 20));
    assert_eq!(ten_to_twenty.click(10), SelectionInterval::new(10, 20));
    assert_eq!(ten_to_twenty.click(20), SelectionInterval::new(10, 20));
    assert_eq!(ten_to_twenty.click(20), SelectionInterval::new(10, 20));
}

#[test]
fn far_clicks_reset_for_every_interval() {
    for start in 0..30usize {
        for end in start..start + 12 {
            let mut range = SelectionRange::default();
            range.restore(start, end);

            let after = end + NEAR_WINDOW + 1;
            assert_eq!(range.click(after), SelectionInterval::single(after));

            if start > NEAR_WINDOW {
                let mut range = SelectionRange::default();
                range.restore(start, end);
                let before = start - NEAR_WINDOW - 1;
                assert_eq!(range.click(before), SelectionInterval::single(before));
            }
        }
    }
}

#[test]
fn equal_distances_always_move_the_end() {
    for start in 0..20usize {
        for half in 1..8usize {
            let end = start + 2 * half;
            let mut range = SelectionRange::default();
            range.restore(start, end);
            assert_eq!(range.click(start + half), SelectionInterval::new(start, start + half));
        }
    }
}

#[test]
fn clicks_near_text_start_do_not_underflow() {
    let mut range = SelectionRange::default();
    range.restore(2, 4);
    assert_eq!(range.click(0), SelectionInterval::new(0, 4));
}

#[test]
fn restore_swaps_reversed_bounds_and_clear_empties() {
    let mut range = SelectionRange::default();
    assert_eq!(range.restore(9, 3), SelectionInterval::new(3, 9));
    assert_eq!(range.clear(), Some(SelectionInterval::new(3, 9)));
    assert!(range.is_empty());
}

#[test]
fn custom_window_changes_far_threshold() {
    let mut range = SelectionRange::new(2);
    range.restore(10, 20);
    assert_eq!(range.click(7), SelectionInterval::single(7));

    let mut range = SelectionRange::new(2);
    range.restore(10, 20);
    assert_eq!(range.click(8), SelectionInterval::new(8, 20));
}
