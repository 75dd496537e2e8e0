// Engine defaults shared by every showcase scene.
//
// Values are per-frame factors: the scenes advance once per animation frame,
// not per second, so the easing feel is tied to the display refresh rate.

// Morph buffers
pub const SEGMENT_CAPACITY: usize = 120; // line segments per morph target
pub const FLOATS_PER_SEGMENT: usize = 6; // x1,y1,z1, x2,y2,z2
pub const MORPH_BUFFER_LEN: usize = SEGMENT_CAPACITY * FLOATS_PER_SEGMENT;

// Morph easing
pub const MORPH_DAMPING: f32 = 0.04; // fraction of remaining distance per frame
pub const MORPH_EPSILON: f32 = 0.01; // per-float settle threshold

// Material opacity while settled / while morphing
pub const BUILD_OPACITY_SETTLED: f32 = 0.4;
pub const BUILD_OPACITY_MORPHING: f32 = 0.25;
pub const ACCENT_OPACITY_SETTLED: f32 = 0.5;
pub const ACCENT_OPACITY_MORPHING: f32 = 0.2;

// Scene orientation smoothing
pub const ORBIT_SMOOTHING: f32 = 0.015; // slow auto-orbit scenes
pub const SCROLL_ORBIT_SMOOTHING: f32 = 0.1; // scroll-driven orbit scenes
pub const SCROLL_SMOOTHING: f32 = 0.06; // renderer-side scroll follow
pub const SCROLL_SETTLE_EPSILON: f32 = 0.0005; // scroll counts as moving above this
pub const POINTER_YAW_WEIGHT: f32 = 0.12;

// Particles
pub const PARTICLE_FLOOR_Y: f32 = -1.0; // respawn height
pub const PARTICLE_SPAWN_HEIGHT: f32 = 14.0; // initial heights are drawn from [0, this)

// Counter crossfade (seconds)
pub const COUNTER_FADE_OUT_SEC: f32 = 0.2;
pub const COUNTER_FADE_IN_SEC: f32 = 0.3;
pub const COUNTER_LIFT_PX: f32 = -10.0;
pub const COUNTER_REST_OPACITY: f32 = 0.12;

// Flip clock (seconds)
pub const FLIP_DURATION_SEC: f32 = 0.3;
pub const FLIP_ITEM_STAGGER_SEC: f32 = 0.5;
pub const FLIP_CARD_STAGGER_SEC: f32 = 0.2;
pub const FLIP_SUFFIX_TAIL_SEC: f32 = 1.6;
pub const FLIP_SEPARATOR_DELAY_SEC: f32 = 0.4;
pub const FLIP_LABEL_AFTER_SUFFIX_SEC: f32 = 0.2;

// Scramble decode
pub const SCRAMBLE_FRAMES: u32 = 30;
pub const SCRAMBLE_FRAME_MS: i32 = 50;
