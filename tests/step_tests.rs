// Host-side tests for scroll progress to step mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod step {
    include!("../src/core/step.rs");
}

use step::*;

#[test]
fn step_stays_in_range_for_all_progress() {
    for total in 1..=8 {
        for i in 0..=1000 {
            let p = i as f32 / 1000.0;
            let s = step_for_progress(p, total);
            assert!(s < total, "p={} total={} -> {}", p, total, s);
        }
        assert_eq!(step_for_progress(0.0, total), 0);
        assert_eq!(step_for_progress(1.0, total), total - 1);
    }
}

#[test]
fn step_is_monotonic_in_progress() {
    let total = 6;
    let mut last = 0;
    for i in 0..=600 {
        let s = step_for_progress(i as f32 / 600.0, total);
        assert!(s >= last);
        last = s;
    }
    assert_eq!(last, total - 1);
}

#[test]
fn out_of_range_and_nan_progress_are_clamped() {
    assert_eq!(step_for_progress(-0.5, 4), 0);
    assert_eq!(step_for_progress(1.7, 4), 3);
    assert_eq!(step_for_progress(f32::NAN, 4), 0);
    assert_eq!(step_for_progress(f32::INFINITY, 4), 3);
    assert_eq!(step_for_progress(0.5, 0), 0);
}

#[test]
fn single_step_section_always_maps_to_zero() {
    let mut mapper = StepMapper::new(1);
    for p in [0.0, 0.4, 1.0] {
        assert_eq!(step_for_progress(p, 1), 0);
        assert_eq!(mapper.update(p), None);
    }
}

#[test]
fn sweep_of_four_steps_emits_three_changes() {
    let mut mapper = StepMapper::new(4);
    let mut observed = Vec::new();
    let mut events = Vec::new();
    for i in 0..=10 {
        let p = i as f32 / 10.0;
        if let Some(step) = mapper.update(p) {
            events.push((i, step));
        }
        observed.push(mapper.current());
    }
    assert_eq!(observed, vec![0, 0, 0, 1, 1, 2, 2, 2, 3, 3, 3]);
    assert_eq!(events, vec![(3, 1), (5, 2), (8, 3)]);
}

#[test]
fn oscillation_inside_one_step_emits_once() {
    let mut mapper = StepMapper::new(4);
    let emitted: Vec<usize> = [0.31, 0.34, 0.33, 0.32, 0.349]
        .iter()
        .filter_map(|p| mapper.update(*p))
        .collect();
    assert_eq!(emitted, vec![1]);
}

#[test]
fn repeated_progress_is_idempotent() {
    let mut mapper = StepMapper::new(6);
    assert_eq!(mapper.update(0.5), Some(3));
    for _ in 0..10 {
        assert_eq!(mapper.update(0.5), None);
    }
    assert_eq!(mapper.current(), 3);
}

#[test]
fn initial_step_zero_is_not_emitted() {
    let mut mapper = StepMapper::new(4);
    assert_eq!(mapper.update(0.0), None);
    assert_eq!(mapper.update(0.1), None);
    // going back to zero after a change does emit
    assert_eq!(mapper.update(0.6), Some(2));
    assert_eq!(mapper.update(0.0), Some(0));
}

#[test]
fn zero_total_is_treated_as_one() {
    let mapper = StepMapper::new(0);
    assert_eq!(mapper.total(), 1);
    assert_eq!(mapper.current(), 0);
}

#[test]
fn pinned_progress_follows_section_top() {
    let distance = 6.0 * 800.0;
    assert_eq!(pinned_progress(120.0, distance), 0.0);
    assert_eq!(pinned_progress(0.0, distance), 0.0);
    assert!((pinned_progress(-2400.0, distance) - 0.5).abs() < 1e-6);
    assert_eq!(pinned_progress(-10_000.0, distance), 1.0);
}

#[test]
fn pinned_progress_with_no_distance_is_a_threshold() {
    assert_eq!(pinned_progress(10.0, 0.0), 0.0);
    assert_eq!(pinned_progress(-10.0, 0.0), 1.0);
}

#[test]
fn pinned_distance_prefers_section_overflow() {
    // sticky layout: a 7-viewport section pins for 6 viewports
    assert_eq!(pinned_distance(7.0 * 800.0, 800.0, 4.0), 6.0 * 800.0);
    // regular height section falls back to the configured pin length
    assert_eq!(pinned_distance(800.0, 800.0, 4.0), 3200.0);
    assert_eq!(pinned_distance(500.0, 800.0, 6.0), 4800.0);
}
