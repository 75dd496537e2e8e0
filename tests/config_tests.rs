// Host-side tests for the showcase presets and root attribute overrides.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod bridge {
        include!("../src/core/bridge.rs");
    }
    pub mod morph {
        include!("../src/core/morph.rs");
    }
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod interpolate {
        include!("../src/core/interpolate.rs");
    }
    pub mod orientation {
        include!("../src/core/orientation.rs");
    }
    pub mod panel {
        include!("../src/core/panel.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}
mod config {
    include!("../src/config.rs");
}

use config::*;
use crate::core::catalog::CatalogId;
use crate::core::panel::{FillMode, PanelMotion};
use crate::core::scene::ParticleGate;

#[test]
fn presets_cover_both_sections() {
    let [services, types] = ShowcaseConfig::presets();
    assert_eq!(services.name, "services");
    assert_eq!(types.name, "adu-types");
    assert_ne!(services.root, types.root);
    assert_ne!(services.step_event, types.step_event);
    assert_ne!(services.canvas_host, types.canvas_host);
}

#[test]
fn services_preset() {
    let c = ShowcaseConfig::services();
    assert_eq!(c.step_event, "sv-service-change");
    assert_eq!(c.ready_event.as_deref(), Some("sv3d-ready"));
    assert_eq!(c.catalog, CatalogId::Services);
    assert_eq!(c.fill_mode, FillMode::Progress);
    assert_eq!(c.motion, PanelMotion::Fade);
    assert_eq!(c.gate, ParticleGate::WhileMoving);
    assert_eq!(c.counter, Some(".sv-counter"));
    assert!((c.orbit.scroll_yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    assert_eq!(c.orbit.auto_yaw_rate, 0.0);
}

#[test]
fn adu_types_preset() {
    let c = ShowcaseConfig::adu_types();
    assert_eq!(c.step_event, "type-change");
    assert_eq!(c.catalog, CatalogId::AduTypes);
    assert_eq!(c.fill_mode, FillMode::Step);
    assert_eq!(c.motion, PanelMotion::Slide);
    assert_eq!(c.gate, ParticleGate::Always);
    assert_eq!(c.counter, None);
    assert_eq!(c.dot_active_class, "active");
    assert_eq!(c.particles.count, 25);
    assert_eq!(c.orbit.scroll_yaw, 0.0);
    assert!(c.orbit.auto_yaw_rate > 0.0);
    assert!(c.orbit.breathe_amplitude > 0.0);
}

#[test]
fn preset_catalogs_match_panel_counts() {
    assert_eq!(ShowcaseConfig::services().catalog.build().unwrap().len(), 6);
    assert_eq!(ShowcaseConfig::adu_types().catalog.build().unwrap().len(), 4);
}

#[test]
fn only_services_scene_is_desktop_only() {
    let services = ShowcaseConfig::services();
    let types = ShowcaseConfig::adu_types();
    assert!(services.desktop_only);
    assert!(!types.desktop_only);

    assert!(!services.renders_at(991.0));
    assert!(services.renders_at(992.0));
    assert!(types.renders_at(375.0));
    assert!(types.renders_at(1440.0));
}

#[test]
fn pixel_ratio_is_capped_lower_on_narrow_viewports() {
    assert_eq!(capped_pixel_ratio(3.0, 375.0), 1.5);
    assert_eq!(capped_pixel_ratio(3.0, 767.0), 1.5);
    assert_eq!(capped_pixel_ratio(3.0, 768.0), 2.0);
    assert_eq!(capped_pixel_ratio(1.0, 375.0), 1.0);
    assert_eq!(capped_pixel_ratio(1.25, 1440.0), 1.25);
}

#[test]
fn overrides_replace_event_and_catalog() {
    let c = ShowcaseConfig::services().with_overrides(Some("custom-step"), Some("adu-types"));
    assert_eq!(c.step_event, "custom-step");
    assert_eq!(c.catalog, CatalogId::AduTypes);
}

#[test]
fn blank_or_unknown_overrides_are_ignored() {
    let base = ShowcaseConfig::adu_types();
    let c = base.clone().with_overrides(Some("   "), Some("castles"));
    assert_eq!(c, base);
    let c = base.clone().with_overrides(None, None);
    assert_eq!(c, base);
}

#[test]
fn panel_layout_carries_preset_modes() {
    let l = ShowcaseConfig::adu_types().panel_layout(4);
    assert_eq!(l.total, 4);
    assert_eq!(l.fill, FillMode::Step);
    assert_eq!(l.motion, PanelMotion::Slide);
}
