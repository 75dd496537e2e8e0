use super::constants::{
    CREAM, DARK, DESKTOP_MIN_WIDTH_PX, GOLD, LIGHT_GRAY, MAX_DEVICE_PIXEL_RATIO,
    NARROW_MAX_DEVICE_PIXEL_RATIO, NARROW_VIEWPORT_PX, SERVICES_EYE, SERVICES_FOV_DEG, SERVICES_GRID,
    SERVICES_GRID_OPACITY, SERVICES_LOOK_AT, SERVICES_PARTICLE_OPACITY, SERVICES_PIN_VIEWPORTS,
    SLATE, TYPES_EYE, TYPES_FOV_DEG, TYPES_GRID, TYPES_GRID_OPACITY, TYPES_LOOK_AT,
    TYPES_PARTICLE_OPACITY, TYPES_PIN_VIEWPORTS,
};
use super::core::bridge::{SERVICES_STEP_EVENT, TYPES_STEP_EVENT};
use super::core::catalog::CatalogId;
use super::core::constants::{ORBIT_SMOOTHING, POINTER_YAW_WEIGHT, SCROLL_ORBIT_SMOOTHING};
use super::core::orientation::OrbitParams;
use super::core::panel::{FillMode, PanelLayout, PanelMotion};
use super::core::particles::ParticleParams;
use super::core::scene::ParticleGate;

/// Root attribute overriding the step event name.
pub const STEP_EVENT_ATTRIBUTE: &str = "data-step-event";
/// Root attribute overriding the morph catalog.
pub const MORPH_SET_ATTRIBUTE: &str = "data-morph-set";

/// Device pixel ratio used for the canvas backing store at a viewport width.
pub fn capped_pixel_ratio(device_ratio: f64, viewport_width: f64) -> f64 {
    let cap = if viewport_width < NARROW_VIEWPORT_PX {
        NARROW_MAX_DEVICE_PIXEL_RATIO
    } else {
        MAX_DEVICE_PIXEL_RATIO
    };
    device_ratio.min(cap)
}

/// Fixed camera placement; the scene rotates under it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub fov_deg: f32,
    pub eye: [f32; 3],
    pub look_at: [f32; 3],
}

/// Layer colours. Build and accent opacity follow the morph status; the
/// grid and particles keep a fixed opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub grid: [f32; 3],
    pub build: [f32; 3],
    pub accent: [f32; 3],
    pub particles: [f32; 3],
    pub grid_opacity: f32,
    pub particle_opacity: f32,
}

/// Everything needed to bind one scroll-sequenced section and its scene.
#[derive(Clone, Debug, PartialEq)]
pub struct ShowcaseConfig {
    pub name: &'static str,
    /// Root section; progress, visibility and events are all relative to it.
    pub root: &'static str,
    pub panels: &'static str,
    pub dots: &'static str,
    pub fill: &'static str,
    pub counter: Option<&'static str>,
    /// Element the canvas is appended to, looked up inside the root first.
    pub canvas_host: &'static str,
    pub panel_active_class: &'static str,
    pub dot_active_class: &'static str,
    pub step_event: String,
    /// Fired on the root once the scene renders.
    pub ready_event: Option<String>,
    pub catalog: CatalogId,
    pub fill_mode: FillMode,
    pub motion: PanelMotion,
    pub pin_viewports: f64,
    pub orbit: OrbitParams,
    pub particles: ParticleParams,
    pub gate: ParticleGate,
    /// Skip the renderer below the desktop breakpoint.
    pub desktop_only: bool,
    pub camera: CameraRig,
    /// Ground grid half-width, half-depth and spacing.
    pub grid: [f32; 3],
    pub palette: Palette,
}

impl ShowcaseConfig {
    /// Six service buildings, camera orbit follows scroll.
    pub fn services() -> Self {
        Self {
            name: "services",
            root: ".sv-showcase",
            panels: ".sv-service-panel",
            dots: ".sv-bar-dot",
            fill: ".sv-bar-fill",
            counter: Some(".sv-counter"),
            canvas_host: ".sv-canvas-wrap",
            panel_active_class: "is-active",
            dot_active_class: "is-active",
            step_event: SERVICES_STEP_EVENT.to_string(),
            ready_event: Some("sv3d-ready".to_string()),
            catalog: CatalogId::Services,
            fill_mode: FillMode::Progress,
            motion: PanelMotion::Fade,
            pin_viewports: SERVICES_PIN_VIEWPORTS,
            orbit: OrbitParams {
                scroll_yaw: std::f32::consts::FRAC_PI_2,
                pointer_yaw: POINTER_YAW_WEIGHT,
                pointer_lift: 1.0,
                smoothing: SCROLL_ORBIT_SMOOTHING,
                ..OrbitParams::default()
            },
            particles: ParticleParams::default(),
            gate: ParticleGate::WhileMoving,
            desktop_only: true,
            camera: CameraRig {
                fov_deg: SERVICES_FOV_DEG,
                eye: SERVICES_EYE,
                look_at: SERVICES_LOOK_AT,
            },
            grid: SERVICES_GRID,
            palette: Palette {
                grid: CREAM,
                build: SLATE,
                accent: GOLD,
                particles: GOLD,
                grid_opacity: SERVICES_GRID_OPACITY,
                particle_opacity: SERVICES_PARTICLE_OPACITY,
            },
        }
    }

    /// Four ADU types, slow auto-orbit with breathing scale.
    pub fn adu_types() -> Self {
        Self {
            name: "adu-types",
            root: "#adu-types",
            panels: ".adu-type-card",
            dots: ".adu-tdot",
            fill: ".adu-types-fill",
            counter: None,
            canvas_host: "#types-canvas",
            panel_active_class: "is-active",
            dot_active_class: "active",
            step_event: TYPES_STEP_EVENT.to_string(),
            ready_event: Some("types3d-ready".to_string()),
            catalog: CatalogId::AduTypes,
            fill_mode: FillMode::Step,
            motion: PanelMotion::Slide,
            pin_viewports: TYPES_PIN_VIEWPORTS,
            orbit: OrbitParams {
                base_yaw: -0.3,
                auto_yaw_rate: 0.025,
                pointer_yaw: POINTER_YAW_WEIGHT,
                pointer_pitch: 0.05,
                smoothing: ORBIT_SMOOTHING,
                breathe_rate: 0.35,
                breathe_amplitude: 0.006,
                ..OrbitParams::default()
            },
            particles: ParticleParams {
                count: 25,
                spread_x: 24.0,
                spread_z: 20.0,
                ceiling: 18.0,
                speed_min: 0.002,
                speed_max: 0.008,
            },
            gate: ParticleGate::Always,
            desktop_only: false,
            camera: CameraRig {
                fov_deg: TYPES_FOV_DEG,
                eye: TYPES_EYE,
                look_at: TYPES_LOOK_AT,
            },
            grid: TYPES_GRID,
            palette: Palette {
                grid: LIGHT_GRAY,
                build: DARK,
                accent: GOLD,
                particles: GOLD,
                grid_opacity: TYPES_GRID_OPACITY,
                particle_opacity: TYPES_PARTICLE_OPACITY,
            },
        }
    }

    /// Whether a viewport this wide gets a canvas.
    pub fn renders_at(&self, viewport_width: f64) -> bool {
        !self.desktop_only || viewport_width >= DESKTOP_MIN_WIDTH_PX
    }

    pub fn presets() -> [ShowcaseConfig; 2] {
        [Self::services(), Self::adu_types()]
    }

    /// Apply the root element's `data-step-event` / `data-morph-set` values.
    /// Blank or unknown values leave the preset untouched.
    pub fn with_overrides(mut self, step_event: Option<&str>, morph_set: Option<&str>) -> Self {
        if let Some(name) = step_event.map(str::trim).filter(|s| !s.is_empty()) {
            self.step_event = name.to_string();
        }
        if let Some(raw) = morph_set {
            match CatalogId::from_name(raw.trim()) {
                Some(id) => self.catalog = id,
                None => log::warn!("[showcase] unknown morph set '{}', keeping {}", raw, self.catalog.name()),
            }
        }
        self
    }

    pub fn panel_layout(&self, total: usize) -> PanelLayout {
        PanelLayout {
            total,
            fill: self.fill_mode,
            motion: self.motion,
        }
    }
}
