pub mod bridge;
pub mod catalog;
pub mod constants;
pub mod interpolate;
pub mod morph;
pub mod orientation;
pub mod panel;
pub mod particles;
pub mod reveal;
pub mod scene;
pub mod scramble;
pub mod step;
pub mod timeline;

pub use bridge::*;
pub use catalog::*;
pub use constants::*;
pub use interpolate::*;
pub use morph::*;
pub use orientation::*;
pub use panel::*;
pub use particles::*;
pub use reveal::*;
pub use scene::*;
pub use scramble::*;
pub use step::*;
pub use timeline::*;

// Shaders bundled as string constants
pub static LINES_WGSL: &str = include_str!("../../shaders/lines.wgsl");
