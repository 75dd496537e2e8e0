// Page-level presentation constants for the canvas hosts and DOM layer.

// Palette (sRGB 0..1, written to a non-sRGB surface unchanged)
pub const GOLD: [f32; 3] = [0xc9 as f32 / 255.0, 0xa9 as f32 / 255.0, 0x6e as f32 / 255.0];
pub const CREAM: [f32; 3] = [0xf0 as f32 / 255.0, 0xed as f32 / 255.0, 0xe8 as f32 / 255.0];
pub const SLATE: [f32; 3] = [0x55 as f32 / 255.0, 0x55 as f32 / 255.0, 0x55 as f32 / 255.0];
pub const DARK: [f32; 3] = [0x22 as f32 / 255.0, 0x22 as f32 / 255.0, 0x22 as f32 / 255.0];
pub const LIGHT_GRAY: [f32; 3] = [0xbb as f32 / 255.0, 0xbb as f32 / 255.0, 0xbb as f32 / 255.0];

// Static layer opacity: services sits on a dark background, ADU types on a light one
pub const SERVICES_GRID_OPACITY: f32 = 0.12;
pub const SERVICES_PARTICLE_OPACITY: f32 = 0.3;
pub const TYPES_GRID_OPACITY: f32 = 0.15;
pub const TYPES_PARTICLE_OPACITY: f32 = 0.15;

// Services camera: fixed eye, scene orbits under it
pub const SERVICES_FOV_DEG: f32 = 45.0;
pub const SERVICES_EYE: [f32; 3] = [16.0, 12.0, 20.0];
pub const SERVICES_LOOK_AT: [f32; 3] = [0.0, 3.0, 0.0];

// ADU types camera
pub const TYPES_FOV_DEG: f32 = 50.0;
pub const TYPES_EYE: [f32; 3] = [20.0, 16.0, 28.0];
pub const TYPES_LOOK_AT: [f32; 3] = [0.0, 2.0, 0.0];

pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;

// Ground grid extents (half-width, half-depth, spacing)
pub const SERVICES_GRID: [f32; 3] = [8.0, 6.0, 2.0];
pub const TYPES_GRID: [f32; 3] = [10.0, 8.0, 2.0];

// Panels
pub const PANEL_FADE_SEC: f32 = 0.5;
pub const SERVICES_PIN_VIEWPORTS: f64 = 6.0; // pinned for 600% of viewport height
pub const TYPES_PIN_VIEWPORTS: f64 = 4.0;

// Renderer gating
pub const DESKTOP_MIN_WIDTH_PX: f64 = 992.0;
pub const VISIBILITY_THRESHOLD: f64 = 0.01;
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
pub const NARROW_VIEWPORT_PX: f64 = 768.0;
pub const NARROW_MAX_DEVICE_PIXEL_RATIO: f64 = 1.5;
