mod common;

use common::synthetic_mask::{band_mask, rect_mask};
use line_crossing::counter::{BandTimestamps, CLOCK_WRAP};
use line_crossing::mask::MaskU8;
use line_crossing::{
    AlwaysOpen, Cooldown, CounterParams, Debounce, ErrorMessage, LineCrossingCounter,
};
use std::time::Duration;

const WIDTH: usize = 64;
const HEIGHT: usize = 8;
const LINE_X: usize = 32;
const SPARSITY: usize = 4;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn counter<G: Debounce>(gate: G) -> LineCrossingCounter<G, ErrorMessage> {
    let mut counter =
        LineCrossingCounter::with_capabilities(CounterParams::default(), gate, ErrorMessage::new());
    counter.line_at(LINE_X as f32);
    counter.lag(3);
    counter.sparsity(SPARSITY as u8);
    counter
}

/// Runs one tick per entry, each tick showing foreground in the listed bands.
fn walk<G: Debounce>(counter: &mut LineCrossingCounter<G, ErrorMessage>, ticks: &[&[i8]]) {
    for offsets in ticks {
        let mask = band_mask(WIDTH, HEIGHT, LINE_X, SPARSITY, offsets);
        assert!(
            counter.update(&MaskU8::new(WIDTH, HEIGHT, &mask)),
            "update failed: {}",
            counter.errors().message()
        );
    }
}

#[test]
fn straddling_walk_counts_left_to_right_once() {
    init_logger();
    let mut counter = counter(Cooldown::new(Duration::from_secs(3600)));
    // The object covers bands +1 and +2 together on tick 4.
    walk(&mut counter, &[&[-3], &[-2], &[-1], &[1, 2], &[2]]);
    assert_eq!(counter.tick(), 5);
    assert_eq!(counter.left_to_right_score(), 31);

    assert!(counter.crossed_left_to_right());
    assert_eq!(counter.left_to_right_count(), 1);
    assert!(!counter.gate().is_open(), "accepting must touch the gate");

    assert!(
        !counter.crossed_left_to_right(),
        "repeat query while cooling down must be rejected"
    );
    assert_eq!(counter.left_to_right_count(), 1);
    assert!(!counter.crossed_right_to_left());
    assert_eq!(counter.right_to_left_count(), 0);
}

#[test]
fn strictly_sequential_walk_scores_a_multiple_of_ten() {
    init_logger();
    let mut counter = counter(AlwaysOpen);
    // One band per tick: every link is strong and the chain sums to 40,
    // which the acceptance threshold rejects.
    walk(&mut counter, &[&[-3], &[-2], &[-1], &[1], &[2]]);
    assert_eq!(counter.debug(), "motion = {1, 2, 3, 0, 4, 5, 0}");
    assert_eq!(counter.left_to_right_score(), 40);
    assert!(!counter.crossed_left_to_right());
    assert_eq!(counter.left_to_right_count(), 0);
}

#[test]
fn mirrored_walk_counts_right_to_left_only() {
    init_logger();
    let mut counter = counter(Cooldown::new(Duration::from_secs(3600)));
    walk(&mut counter, &[&[3], &[2], &[1], &[-1, -2], &[-2]]);
    assert_eq!(counter.right_to_left_score(), 31);
    assert_eq!(counter.left_to_right_score(), 1);

    assert!(!counter.crossed_left_to_right());
    assert!(counter.crossed_right_to_left());
    assert_eq!(counter.right_to_left_count(), 1);
    assert_eq!(counter.left_to_right_count(), 0);
    assert!(!counter.crossed_right_to_left());
}

#[test]
fn open_gate_counts_a_walk_on_every_query() {
    init_logger();
    let mut counter = counter(AlwaysOpen);
    walk(&mut counter, &[&[-3], &[-2], &[-1], &[1, 2]]);
    assert!(counter.crossed_left_to_right());
    assert!(counter.crossed_left_to_right());
    assert_eq!(counter.left_to_right_count(), 2);
}

#[test]
fn walk_slower_than_lag_is_not_counted() {
    init_logger();
    let mut counter = counter(AlwaysOpen);
    let empty: &[i8] = &[];
    walk(
        &mut counter,
        &[&[-3], empty, empty, empty, &[-2], empty, empty, empty, &[-1], &[1, 2]],
    );
    assert!(counter.left_to_right_score() <= 20);
    assert!(!counter.crossed_left_to_right());
}

#[test]
fn timestamps_never_exceed_clock() {
    init_logger();
    let mut counter = counter(AlwaysOpen);
    for step in 0..60usize {
        let left = (step * 3) % WIDTH;
        let mask = rect_mask(WIDTH, HEIGHT, left, left + 5, 2, 6);
        assert!(counter.update(&MaskU8::new(WIDTH, HEIGHT, &mask)));
        counter.crossed_left_to_right();
        counter.crossed_right_to_left();
        let t = counter.tick();
        assert!(
            counter.timestamps().as_slots().iter().all(|&ts| ts <= t),
            "timestamps {:?} ahead of tick {t}",
            counter.timestamps()
        );
    }
}

#[test]
fn line_too_far_left_never_samples() {
    init_logger();
    let mut counter = counter(AlwaysOpen);
    counter.line_at(7.0);
    let full = vec![255u8; WIDTH * HEIGHT];
    for _ in 0..5 {
        assert!(!counter.update(&MaskU8::new(WIDTH, HEIGHT, &full)));
    }
    assert_eq!(counter.errors().message(), "x-coordinate must be >= 8");
    assert_eq!(counter.timestamps(), &BandTimestamps::default());
    assert_eq!(counter.tick(), 0);

    // A ratio resolving below 8 cells fails the same way.
    counter.line_at(0.1);
    assert!(!counter.update(&MaskU8::new(WIDTH, HEIGHT, &full)));
    assert_eq!(counter.timestamps(), &BandTimestamps::default());
}

#[test]
fn inverted_vertical_window_fails() {
    init_logger();
    let mut counter = counter(AlwaysOpen);
    counter.above(0.75);
    counter.below(0.25);
    let full = vec![255u8; WIDTH * HEIGHT];
    assert!(!counter.update(&MaskU8::new(WIDTH, HEIGHT, &full)));
    assert_eq!(counter.errors().message(), "above/below limits mismatch");

    counter.below(0.75);
    assert!(!counter.update(&MaskU8::new(WIDTH, HEIGHT, &full)));

    counter.above(0.25);
    assert!(counter.update(&MaskU8::new(WIDTH, HEIGHT, &full)));
    assert!(counter.errors().is_ok());
}

#[test]
fn chain_recorded_before_clock_wrap_is_not_accepted_after_it() {
    init_logger();
    let mut counter = counter(AlwaysOpen);
    while counter.tick() < CLOCK_WRAP - 4 {
        walk(&mut counter, &[&[]]);
    }
    walk(&mut counter, &[&[-3], &[-2], &[-1], &[1, 2]]);
    assert_eq!(counter.tick(), CLOCK_WRAP);

    walk(&mut counter, &[&[]]);
    assert_eq!(counter.tick(), 1);
    assert_eq!(counter.timestamps(), &BandTimestamps::default());
    assert!(!counter.crossed_left_to_right());
    assert!(!counter.crossed_right_to_left());
}
