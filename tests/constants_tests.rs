// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn morph_constants_are_within_reasonable_bounds() {
    assert_eq!(MORPH_BUFFER_LEN, SEGMENT_CAPACITY * FLOATS_PER_SEGMENT);
    assert_eq!(FLOATS_PER_SEGMENT, 6);

    // Damping is a per-frame fraction
    assert!(MORPH_DAMPING > 0.0 && MORPH_DAMPING <= 1.0);
    assert!(MORPH_EPSILON > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn materials_dim_while_morphing() {
    assert!(BUILD_OPACITY_MORPHING < BUILD_OPACITY_SETTLED);
    assert!(ACCENT_OPACITY_MORPHING < ACCENT_OPACITY_SETTLED);
    for o in [
        BUILD_OPACITY_SETTLED,
        BUILD_OPACITY_MORPHING,
        ACCENT_OPACITY_SETTLED,
        ACCENT_OPACITY_MORPHING,
        SERVICES_GRID_OPACITY,
        SERVICES_PARTICLE_OPACITY,
        TYPES_GRID_OPACITY,
        TYPES_PARTICLE_OPACITY,
    ] {
        assert!(o > 0.0 && o <= 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn smoothing_factors_are_fractions() {
    for s in [ORBIT_SMOOTHING, SCROLL_ORBIT_SMOOTHING, SCROLL_SMOOTHING] {
        assert!(s > 0.0 && s < 1.0);
    }
    // auto-orbit scenes drift slower than scroll-driven ones
    assert!(ORBIT_SMOOTHING < SCROLL_ORBIT_SMOOTHING);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particles_spawn_above_the_floor() {
    assert!(PARTICLE_FLOOR_Y < 0.0);
    assert!(PARTICLE_SPAWN_HEIGHT > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flip_clock_timing_fits_together() {
    assert!(FLIP_DURATION_SEC > 0.0);
    // cards within an item overlap their flips, items overlap each other
    assert!(FLIP_CARD_STAGGER_SEC < FLIP_DURATION_SEC);
    assert!(FLIP_ITEM_STAGGER_SEC > FLIP_CARD_STAGGER_SEC);
    assert!(FLIP_SUFFIX_TAIL_SEC > FLIP_SEPARATOR_DELAY_SEC);
    assert!(COUNTER_FADE_OUT_SEC + COUNTER_FADE_IN_SEC < 1.0);
}

#[test]
fn palette_channels_are_normalized() {
    for c in [GOLD, CREAM, SLATE, DARK, LIGHT_GRAY] {
        assert!(c.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
    assert!((GOLD[0] - 201.0 / 255.0).abs() < 1e-6);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn cameras_look_down_at_the_scene() {
    for (eye, target, fov) in [
        (SERVICES_EYE, SERVICES_LOOK_AT, SERVICES_FOV_DEG),
        (TYPES_EYE, TYPES_LOOK_AT, TYPES_FOV_DEG),
    ] {
        assert!(eye[1] > target[1]);
        assert!(fov > 0.0 && fov < 180.0);
    }
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < CAMERA_FAR);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pinning_and_gating() {
    assert!(SERVICES_PIN_VIEWPORTS > TYPES_PIN_VIEWPORTS);
    assert!(DESKTOP_MIN_WIDTH_PX > 0.0);
    assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD < 1.0);
    assert!(MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(NARROW_MAX_DEVICE_PIXEL_RATIO >= 1.0);
    assert!(NARROW_MAX_DEVICE_PIXEL_RATIO < MAX_DEVICE_PIXEL_RATIO);
    assert!(NARROW_VIEWPORT_PX < DESKTOP_MIN_WIDTH_PX);
}
