// Host-side tests for the data-animate vocabulary and scroll-reveal math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    include!("../src/core/reveal.rs");
}

use reveal::*;

#[test]
fn effect_names_round_trip() {
    for effect in RevealEffect::ALL {
        let parsed: RevealEffect = effect.as_str().parse().unwrap();
        assert_eq!(parsed, effect);
        assert_eq!(effect.to_string(), effect.as_str());
    }
    assert_eq!(" fade-up ".parse::<RevealEffect>(), Ok(RevealEffect::FadeUp));
}

#[test]
fn unknown_effect_is_an_error() {
    let err = "zoom-in".parse::<RevealEffect>().unwrap_err();
    assert_eq!(err, RevealParseError("zoom-in".into()));
    assert_eq!(err.to_string(), "unknown data-animate effect 'zoom-in'");
}

#[test]
fn selector_targets_the_attribute() {
    assert_eq!(RevealEffect::LineWipe.selector(), "[data-animate=\"line-wipe\"]");
}

#[test]
fn text_drivers_have_no_style_spec() {
    assert!(RevealEffect::FlipClock.spec().is_none());
    assert!(RevealEffect::Scramble.spec().is_none());
    let styled = RevealEffect::ALL.iter().filter(|e| e.spec().is_some()).count();
    assert_eq!(styled, 9);
}

#[test]
fn fade_up_parameters() {
    let spec = RevealEffect::FadeUp.spec().unwrap();
    assert_eq!(spec.from.opacity, 0.0);
    assert_eq!(spec.from.translate_y_px, 50.0);
    assert_eq!(spec.from.blur_px, 4.0);
    assert_eq!(spec.to, StyleState::VISIBLE);
    assert_eq!(spec.duration_sec, 1.2);
    assert_eq!(spec.playback, Playback::Toggle);
    assert_eq!(spec.split, Split::None);
}

#[test]
fn staggered_effects_split_their_targets() {
    let words = RevealEffect::WordStaggerElastic.spec().unwrap();
    assert_eq!(words.split, Split::Words);
    assert_eq!(words.stagger_sec, 0.06);
    assert_eq!(words.easing, EASE_ELASTIC_OUT);
    // words slide up but stay opaque
    assert_eq!(words.from.opacity, 1.0);
    assert_eq!(words.from.translate_y_percent, 120.0);

    let chars = RevealEffect::CharCascade.spec().unwrap();
    assert_eq!(chars.split, Split::Chars);
    assert_eq!(chars.from.rotate_x_deg, -90.0);

    let children = RevealEffect::FadeUpStagger.spec().unwrap();
    assert_eq!(children.split, Split::Children);
    assert_eq!(children.playback, Playback::Once);
    assert_eq!(children.delay_for(3), 3.0 * 0.12);
}

#[test]
fn scrubbed_effects_use_scroll_ranges() {
    let wipe = RevealEffect::LineWipe.spec().unwrap();
    assert!(matches!(wipe.playback, Playback::Scrub(ScrubRange::Lines { .. })));
    assert_eq!(wipe.from.clip_right_percent, 100.0);
    let parallax = RevealEffect::ParallaxDepth.spec().unwrap();
    assert_eq!(parallax.playback, Playback::Scrub(ScrubRange::Traverse));
    assert_eq!(parallax.to.translate_y_percent, -15.0);
    let sweep = RevealEffect::OpacitySweep.spec().unwrap();
    assert_eq!(sweep.from.opacity, 0.05);
    assert_eq!(sweep.to.opacity, 0.8);
}

#[test]
fn root_margin_moves_the_trigger_line() {
    let fade = RevealEffect::FadeUp.spec().unwrap();
    assert_eq!(fade.root_margin(), "0px 0px -12% 0px");
    let blur = RevealEffect::BlurFocus.spec().unwrap();
    assert_eq!(blur.root_margin(), "0px 0px -15% 0px");
}

#[test]
fn top_range_scrub() {
    let range = ScrubRange::Top { start: 0.85, end: 0.40 };
    let vh = 1000.0;
    assert_eq!(scrub_progress(&range, 900.0, 50.0, vh, 0), 0.0);
    assert!(scrub_progress(&range, 850.0, 50.0, vh, 0) < 1e-5);
    assert!((scrub_progress(&range, 625.0, 50.0, vh, 0) - 0.5).abs() < 1e-5);
    assert_eq!(scrub_progress(&range, 400.0, 50.0, vh, 0), 1.0);
    assert_eq!(scrub_progress(&range, -200.0, 50.0, vh, 0), 1.0);
    assert_eq!(scrub_progress(&range, 500.0, 50.0, 0.0, 0), 0.0);
}

#[test]
fn later_lines_start_higher() {
    let range = ScrubRange::Lines { start: 0.85, end: 0.65, per_line: 0.12 };
    let vh = 1000.0;
    let top = 800.0;
    let first = scrub_progress(&range, top, 40.0, vh, 0);
    let second = scrub_progress(&range, top, 40.0, vh, 1);
    assert!(first > 0.0);
    assert_eq!(second, 0.0);
    assert!((first - 0.25).abs() < 1e-5);
}

#[test]
fn traverse_covers_enter_to_exit() {
    let vh = 800.0;
    let h = 400.0;
    assert_eq!(scrub_progress(&ScrubRange::Traverse, 800.0, h, vh, 0), 0.0);
    assert!((scrub_progress(&ScrubRange::Traverse, 200.0, h, vh, 0) - 0.5).abs() < 1e-5);
    assert_eq!(scrub_progress(&ScrubRange::Traverse, -400.0, h, vh, 0), 1.0);
}

#[test]
fn staggered_progress_offsets_each_target() {
    assert_eq!(staggered_progress(0.0, 0, 4, 0.5), 0.0);
    assert_eq!(staggered_progress(1.0, 3, 4, 0.5), 1.0);
    // span is 2.5: at p=0.4 the first target is done, the second has just started
    assert!((staggered_progress(0.4, 0, 4, 0.5) - 1.0).abs() < 1e-6);
    assert!((staggered_progress(0.4, 1, 4, 0.5) - 0.5).abs() < 1e-6);
    assert_eq!(staggered_progress(0.4, 3, 4, 0.5), 0.0);
    assert_eq!(staggered_progress(0.7, 0, 1, 0.5), 0.7);
    assert_eq!(staggered_progress(0.5, 0, 0, 0.5), 0.0);
}

#[test]
fn words_split_on_any_whitespace() {
    assert_eq!(split_words("  Build   your\nADU "), vec!["Build", "your", "ADU"]);
    assert!(split_words("   ").is_empty());
}

#[test]
fn lines_split_on_br_and_drop_markup() {
    let lines = split_lines("Design <em>first</em><br>Build<BR/>  Live <br />");
    assert_eq!(lines, vec!["Design first", "Build", "Live"]);
    assert_eq!(split_lines("single line"), vec!["single line"]);
}

#[test]
fn only_changed_properties_animate() {
    let spec = RevealEffect::FadeUp.spec().unwrap();
    let props = spec.from.animated_properties(&spec.to);
    assert_eq!(
        props,
        AnimatedProps {
            opacity: true,
            transform: true,
            filter: true,
            clip: false
        }
    );
    let wipe = RevealEffect::LineWipe.spec().unwrap();
    let props = wipe.from.animated_properties(&wipe.to);
    assert!(props.clip && !props.opacity && !props.transform && !props.filter);
    assert_eq!(AnimatedProps::default().transition_css(1.0, "linear", 0.0), "none");
}

#[test]
fn transition_lists_each_animated_property() {
    let props = AnimatedProps {
        opacity: true,
        filter: true,
        ..AnimatedProps::default()
    };
    assert_eq!(
        props.transition_css(1.2, "ease", 0.24),
        "opacity 1.200s ease 0.240s, filter 1.200s ease 0.240s"
    );
}

#[test]
fn lerp_clamps_and_interpolates() {
    let from = StyleState {
        translate_y_px: 40.0,
        ..StyleState::default()
    };
    let to = StyleState::VISIBLE;
    let half = from.lerp(&to, 0.5);
    assert_eq!(half.opacity, 0.5);
    assert_eq!(half.translate_y_px, 20.0);
    assert_eq!(from.lerp(&to, 2.0), to);
    assert_eq!(from.lerp(&to, -1.0), from);
}

#[test]
fn css_values_are_well_formed() {
    let s = StyleState {
        translate_y_percent: 105.0,
        blur_px: 3.0,
        clip_right_percent: 50.0,
        ..StyleState::VISIBLE
    };
    assert_eq!(s.filter_css(), "blur(3.00px)");
    assert_eq!(s.clip_css(), "inset(0 50.00% 0 0)");
    assert_eq!(s.opacity_css(), "1.000");
    assert_eq!(
        s.transform_css(),
        "translateY(calc(105.000% + 0.000px)) scale(1.0000) rotateX(0.000deg)"
    );
}
