// Host-side tests for cue timelines: flip clock, counter crossfade and the
// scramble decode.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod timeline {
    include!("../src/core/timeline.rs");
}
mod scramble {
    include!("../src/core/scramble.rs");
}

use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use scramble::*;
use timeline::*;

#[test]
fn flip_sequences_end_on_the_target() {
    assert_eq!(flip_sequence(0).as_slice(), &[8, 4, 0]);
    assert_eq!(flip_sequence(1).as_slice(), &[1]);
    assert_eq!(flip_sequence(2).as_slice(), &[1, 2]);
    assert_eq!(flip_sequence(3).as_slice(), &[1, 2, 3]);
    assert_eq!(flip_sequence(7).as_slice(), &[2, 4, 6, 7]);
    assert_eq!(flip_sequence(9).as_slice(), &[3, 6, 9]);
    for d in 0..=9u8 {
        assert_eq!(flip_sequence(d).last(), Some(&d));
    }
}

#[test]
fn timeline_sorts_and_drains_in_order() {
    let mut t = Timeline::new(vec![(0.5, "b"), (0.0, "a"), (0.5, "c"), (2.0, "d")]);
    assert_eq!(t.duration(), 2.0);
    let first: Vec<&str> = t.drain_due(0.1).iter().map(|c| c.1).collect();
    assert_eq!(first, vec!["a"]);
    assert!(t.drain_due(0.2).is_empty());
    let next: Vec<&str> = t.drain_due(1.0).iter().map(|c| c.1).collect();
    assert_eq!(next, vec!["b", "c"]);
    assert!(!t.is_finished());
    assert_eq!(t.drain_due(10.0).len(), 1);
    assert!(t.is_finished());
    assert!(t.drain_due(20.0).is_empty());
}

#[test]
fn empty_timeline_is_finished() {
    let t: Timeline<u8> = Timeline::new(Vec::new());
    assert!(t.is_finished());
    assert_eq!(t.duration(), 0.0);
}

#[test]
fn flip_plan_staggers_items_and_cards() {
    let plan = flip_clock_plan(&[vec![2], vec![0, 9]]);
    let starts: Vec<(f32, usize, usize, u8, u8)> = plan
        .cues()
        .iter()
        .filter_map(|(at, cue)| match *cue {
            ClockCue::FlipStart { item, card, from, to } => Some((*at, item, card, from, to)),
            _ => None,
        })
        .collect();
    // item 0 card 0: 0 -> 1 -> 2
    assert!(starts.contains(&(0.0, 0, 0, 0, 1)));
    assert!(starts.contains(&(FLIP_DURATION_SEC, 0, 0, 1, 2)));
    // item 1 starts one item stagger later; its second card one card stagger after that
    let item1_card0 = starts.iter().find(|s| s.1 == 1 && s.2 == 0).unwrap();
    assert_eq!(item1_card0.0, FLIP_ITEM_STAGGER_SEC);
    assert_eq!(item1_card0.4, 8);
    let item1_card1 = starts.iter().find(|s| s.1 == 1 && s.2 == 1).unwrap();
    assert!((item1_card1.0 - (FLIP_ITEM_STAGGER_SEC + FLIP_CARD_STAGGER_SEC)).abs() < 1e-6);
    assert_eq!(item1_card1.4, 3);
}

#[test]
fn every_flip_start_has_a_matching_end() {
    let plan = flip_clock_plan(&[vec![4, 0], vec![7]]);
    let cues = plan.cues();
    for (at, cue) in cues {
        if let ClockCue::FlipStart { item, card, to, .. } = *cue {
            let end = cues.iter().find(|(t, c)| {
                *c == ClockCue::FlipEnd { item, card, to } && (*t - (*at + FLIP_DURATION_SEC)).abs() < 1e-5
            });
            assert!(end.is_some(), "no end for item {} card {} -> {}", item, card, to);
        }
    }
}

#[test]
fn label_scrambles_after_suffix() {
    let plan = flip_clock_plan(&[vec![1, 2]]);
    let at = |want: ClockCue| {
        plan.cues()
            .iter()
            .find(|(_, c)| *c == want)
            .map(|(t, _)| *t)
            .unwrap()
    };
    let separator = at(ClockCue::ShowSeparator { item: 0 });
    let suffix = at(ClockCue::ShowSuffix { item: 0 });
    let label = at(ClockCue::ScrambleLabel { item: 0 });
    assert_eq!(separator, FLIP_SEPARATOR_DELAY_SEC);
    assert!((suffix - (2.0 * FLIP_CARD_STAGGER_SEC + FLIP_SUFFIX_TAIL_SEC)).abs() < 1e-6);
    assert!((label - suffix - FLIP_LABEL_AFTER_SUFFIX_SEC).abs() < 1e-6);
    assert_eq!(plan.duration(), label);
}

#[test]
fn digits_parse_strictly() {
    assert_eq!(parse_digit("7"), Some(7));
    assert_eq!(parse_digit(" 0 "), Some(0));
    assert_eq!(parse_digit("12"), None);
    assert_eq!(parse_digit("x"), None);
    assert_eq!(parse_digit(""), None);
}

#[test]
fn counter_crossfade_swaps_text_between_legs() {
    let t = counter_crossfade("03");
    let cues = t.cues();
    assert_eq!(cues.len(), 2);
    let (out_at, out) = &cues[0];
    let (in_at, back) = &cues[1];
    assert_eq!(*out_at, 0.0);
    assert_eq!(out.opacity, 0.0);
    assert_eq!(out.offset_y_px, COUNTER_LIFT_PX);
    assert_eq!(out.text, None);
    assert_eq!(*in_at, COUNTER_FADE_OUT_SEC);
    assert_eq!(back.text.as_deref(), Some("03"));
    assert_eq!(back.opacity, COUNTER_REST_OPACITY);
    assert_eq!(back.offset_y_px, 0.0);
}

#[test]
fn scramble_ends_on_original_text() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut decode = ScrambleDecode::new("Licensed Builders");
    let mut frames = Vec::new();
    while let Some(f) = decode.next_frame(&mut rng) {
        frames.push(f);
    }
    assert_eq!(frames.len(), SCRAMBLE_FRAMES as usize);
    assert_eq!(frames.last().map(String::as_str), Some("Licensed Builders"));
    assert!(decode.is_finished());
    assert_eq!(decode.next_frame(&mut rng), None);
}

#[test]
fn scramble_keeps_spaces_and_length() {
    let mut rng = StdRng::seed_from_u64(11);
    let text = "a b  c";
    let mut decode = ScrambleDecode::with_frames(text, 8);
    while let Some(f) = decode.next_frame(&mut rng) {
        assert_eq!(f.chars().count(), text.chars().count());
        for (a, b) in f.chars().zip(text.chars()) {
            if b == ' ' {
                assert_eq!(a, ' ');
            }
        }
    }
}

#[test]
fn scramble_reveals_a_growing_prefix() {
    let decode = ScrambleDecode::with_frames("abcdefghij", 10);
    assert_eq!(decode.revealed_at(0), 0);
    assert_eq!(decode.revealed_at(5), 5);
    assert_eq!(decode.revealed_at(10), 10);
    assert_eq!(decode.revealed_at(50), 10);
    let mut last = 0;
    for f in 0..=10 {
        let r = decode.revealed_at(f);
        assert!(r >= last);
        last = r;
    }
}

#[test]
fn scramble_prefix_is_verbatim() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut decode = ScrambleDecode::with_frames("ABCDEFGHIJ", 10);
    for frame in 1..10u32 {
        let text = decode.next_frame(&mut rng).unwrap();
        let revealed = decode.revealed_at(frame);
        assert_eq!(&text[..revealed], &"ABCDEFGHIJ"[..revealed]);
    }
}
