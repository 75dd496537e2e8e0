use glam::Vec2;

use super::constants::{SCROLL_SETTLE_EPSILON, SCROLL_SMOOTHING};

/// How a scene's rotation target is blended from time, scroll and pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    /// Resting yaw (radians).
    pub base_yaw: f32,
    /// Constant auto-rotation, radians per second of elapsed time.
    pub auto_yaw_rate: f32,
    /// Yaw added at full (smoothed) scroll progress.
    pub scroll_yaw: f32,
    /// Yaw / pitch added at full pointer deflection.
    pub pointer_yaw: f32,
    pub pointer_pitch: f32,
    /// Camera height offset at full vertical pointer deflection.
    pub pointer_lift: f32,
    /// Fraction of the remaining rotation covered per frame.
    pub smoothing: f32,
    /// Fraction of the remaining scroll distance the renderer follows per frame.
    pub scroll_smoothing: f32,
    /// Breathing scale `1 + sin(t * rate) * amplitude`.
    pub breathe_rate: f32,
    pub breathe_amplitude: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            base_yaw: 0.0,
            auto_yaw_rate: 0.0,
            scroll_yaw: 0.0,
            pointer_yaw: 0.0,
            pointer_pitch: 0.0,
            pointer_lift: 0.0,
            smoothing: 0.1,
            scroll_smoothing: SCROLL_SMOOTHING,
            breathe_rate: 0.0,
            breathe_amplitude: 0.0,
        }
    }
}

/// Per-frame inputs for the orientation update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitInputs {
    pub elapsed_sec: f32,
    pub scroll_progress: f32,
    /// Pointer offset from viewport centre, each axis in `[-1, 1]`.
    pub pointer: Vec2,
}

/// Smoothed scene rotation, scale and camera lift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneOrientation {
    pub yaw: f32,
    pub pitch: f32,
    pub scale: f32,
    pub camera_lift: f32,
    /// Renderer-side smoothed scroll progress.
    pub scroll: f32,
    scroll_target: f32,
}

impl SceneOrientation {
    pub fn new(params: &OrbitParams) -> Self {
        Self {
            yaw: params.base_yaw,
            pitch: 0.0,
            scale: 1.0,
            camera_lift: 0.0,
            scroll: 0.0,
            scroll_target: 0.0,
        }
    }

    pub fn target_yaw(params: &OrbitParams, inputs: &OrbitInputs, smoothed_scroll: f32) -> f32 {
        params.base_yaw
            + inputs.elapsed_sec * params.auto_yaw_rate
            + smoothed_scroll * params.scroll_yaw
            + inputs.pointer.x * params.pointer_yaw
    }

    /// Ease every component toward its blended target. Never assigns a target
    /// directly, so there is no visible snap when inputs jump.
    pub fn advance(&mut self, params: &OrbitParams, inputs: &OrbitInputs) {
        self.scroll_target = inputs.scroll_progress.clamp(0.0, 1.0);
        self.scroll += (self.scroll_target - self.scroll) * params.scroll_smoothing;

        let yaw_target = Self::target_yaw(params, inputs, self.scroll);
        let pitch_target = inputs.pointer.y * params.pointer_pitch;
        let lift_target = -inputs.pointer.y * params.pointer_lift;
        self.yaw += (yaw_target - self.yaw) * params.smoothing;
        self.pitch += (pitch_target - self.pitch) * params.smoothing;
        self.camera_lift += (lift_target - self.camera_lift) * params.smoothing;

        self.scale = 1.0 + (inputs.elapsed_sec * params.breathe_rate).sin() * params.breathe_amplitude;
    }

    /// Whether the renderer's smoothed scroll is still catching up.
    pub fn scroll_settling(&self) -> bool {
        (self.scroll_target - self.scroll).abs() > SCROLL_SETTLE_EPSILON
    }
}

/// Pointer position as an offset from the viewport centre, `[-1, 1]` per axis.
#[inline]
pub fn pointer_offset(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    let x = ((client_x / width - 0.5) * 2.0).clamp(-1.0, 1.0);
    let y = ((client_y / height - 0.5) * 2.0).clamp(-1.0, 1.0);
    Vec2::new(x, y)
}
