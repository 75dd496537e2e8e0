use glam::Vec3;

use super::constants::SEGMENT_CAPACITY;
use super::morph::{MorphError, MorphTargetSet, WireframeBuilder};

/// Named design sets available to showcase scenes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CatalogId {
    Services,
    AduTypes,
}

impl CatalogId {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            "services" => Some(Self::Services),
            "adu-types" | "types" => Some(Self::AduTypes),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Services => "services",
            Self::AduTypes => "adu-types",
        }
    }

    pub fn build(self) -> Result<MorphTargetSet, MorphError> {
        match self {
            Self::Services => services(),
            Self::AduTypes => adu_types(),
        }
    }
}

#[inline]
fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

/// Six service buildings: ADU, garage conversion, custom home, new
/// construction, addition, commercial.
pub fn services() -> Result<MorphTargetSet, MorphError> {
    MorphTargetSet::new(SEGMENT_CAPACITY)
        .with("adu", service_adu())?
        .with("garage-conversion", service_garage())?
        .with("custom-home", service_custom_home())?
        .with("new-construction", service_new_construction())?
        .with("addition", service_addition())?
        .with("commercial", service_commercial())
}

fn service_adu() -> Vec<f32> {
    WireframeBuilder::new()
        .cuboid(v(0.0, 3.5, 0.0), v(8.0, 7.0, 6.0))
        // foundation perimeter
        .horizontal(-4.0, 4.0, 0.0, -3.0)
        .horizontal(-4.0, 4.0, 0.0, 3.0)
        .segment(v(-4.0, 0.0, -3.0), v(-4.0, 0.0, 3.0))
        .segment(v(4.0, 0.0, -3.0), v(4.0, 0.0, 3.0))
        // interior division
        .vertical(0.0, 0.0, 7.0, -1.0)
        .vertical(0.0, 0.0, 7.0, 1.0)
        .horizontal(-4.0, 0.0, 3.5, -3.0)
        .horizontal(0.0, 4.0, 3.5, -3.0)
        // door
        .vertical(-1.0, 0.0, 5.0, -3.01)
        .vertical(1.0, 0.0, 5.0, -3.01)
        .horizontal(-1.0, 1.0, 5.0, -3.01)
        .opening(-3.5, 2.0, -3.01, -1.5, 4.5)
        .opening(1.5, 2.0, -3.01, 3.5, 4.5)
        .opening(-3.5, 2.0, 3.01, -1.5, 4.5)
        .opening(1.5, 2.0, 3.01, 3.5, 4.5)
        // ridge
        .horizontal(-4.5, 4.5, 7.2, 0.0)
        // dimension marks
        .horizontal(-4.5, 4.5, 0.0, -3.5)
        .horizontal(-4.5, 4.5, 0.0, 3.5)
        .finish()
}

fn service_garage() -> Vec<f32> {
    WireframeBuilder::new()
        .cuboid(v(0.0, 2.5, 0.0), v(10.0, 5.0, 7.0))
        // former garage door
        .opening(-3.0, 0.1, -3.51, 3.0, 4.2)
        // conversion wall
        .vertical(0.0, 0.0, 5.0, -3.5)
        .vertical(0.0, 0.0, 5.0, 3.5)
        .horizontal(-5.0, 0.0, 5.0, -3.5)
        .horizontal(-5.0, 0.0, 5.0, 3.5)
        .horizontal(0.0, 5.0, 5.0, -3.5)
        .horizontal(0.0, 5.0, 5.0, 3.5)
        .opening(-4.0, 1.5, -3.51, -2.0, 3.5)
        .opening(2.0, 1.5, -3.51, 4.0, 3.5)
        .side_opening(-5.01, 1.5, -2.0, 3.5, 1.0)
        // fixtures
        .horizontal(-3.0, -1.0, 2.0, 0.0)
        .horizontal(1.0, 3.0, 2.0, 0.0)
        .vertical(-3.0, 0.0, 2.0, 0.0)
        .vertical(3.0, 0.0, 2.0, 0.0)
        // roof line
        .horizontal(-5.5, 5.5, 5.2, 0.0)
        .horizontal(-5.5, 5.5, 5.2, -3.5)
        .horizontal(-5.5, 5.5, 5.2, 3.5)
        .finish()
}

fn service_custom_home() -> Vec<f32> {
    WireframeBuilder::new()
        .cuboid(v(-1.0, 4.0, 0.0), v(10.0, 8.0, 6.0))
        .cuboid(v(6.0, 2.5, 0.5), v(4.0, 5.0, 5.0))
        .cuboid(v(-5.0, 5.5, -1.0), v(3.0, 3.0, 3.0))
        // floor plates
        .horizontal(-6.0, 4.0, 4.0, -3.0)
        .horizontal(-6.0, 4.0, 4.0, 3.0)
        .horizontal(4.0, 8.0, 2.5, -2.0)
        .horizontal(4.0, 8.0, 2.5, 3.0)
        .opening(-5.0, 2.0, -3.01, -3.0, 5.0)
        .opening(-2.0, 2.0, -3.01, 1.0, 5.0)
        .opening(2.0, 2.0, -3.01, 4.0, 5.0)
        .opening(5.0, 1.0, -2.51, 7.0, 3.5)
        // roof overhangs
        .horizontal(-7.0, 5.0, 8.2, -3.5)
        .horizontal(-7.0, 5.0, 8.2, 3.5)
        .horizontal(3.5, 8.5, 5.2, -3.0)
        .horizontal(3.5, 8.5, 5.2, 3.5)
        // interior walls
        .vertical(-1.0, 0.0, 8.0, 0.0)
        .vertical(2.0, 0.0, 8.0, 0.0)
        .vertical(-1.0, 0.0, 8.0, -2.0)
        .finish()
}

fn service_new_construction() -> Vec<f32> {
    WireframeBuilder::new()
        .cuboid(v(0.0, 4.5, 0.0), v(9.0, 9.0, 6.0))
        // raised pad
        .cuboid(v(0.0, 0.3, 0.0), v(11.0, 0.6, 8.0))
        // site grading
        .horizontal(-7.0, 7.0, -0.1, -5.0)
        .horizontal(-7.0, 7.0, -0.1, 5.0)
        .segment(v(-7.0, -0.1, -5.0), v(-7.0, -0.1, 5.0))
        .segment(v(7.0, -0.1, -5.0), v(7.0, -0.1, 5.0))
        .opening(-3.5, 2.0, -3.01, -1.0, 5.0)
        .opening(1.0, 2.0, -3.01, 3.5, 5.0)
        .opening(-3.5, 5.5, -3.01, -1.0, 7.5)
        .opening(1.0, 5.5, -3.01, 3.5, 7.5)
        .vertical(0.0, 0.0, 9.0, 0.0)
        .horizontal(-4.5, 4.5, 4.5, 0.0)
        // crane: mast, jib, counter-jib, ties
        .vertical(-6.0, 0.0, 12.0, -4.0)
        .horizontal(-6.0, 3.0, 11.5, -4.0)
        .horizontal(-6.0, -8.0, 11.5, -4.0)
        .segment(v(-6.0, 12.0, -4.0), v(3.0, 11.5, -4.0))
        .segment(v(-6.0, 12.0, -4.0), v(-8.0, 11.5, -4.0))
        .finish()
}

fn service_addition() -> Vec<f32> {
    WireframeBuilder::new()
        .cuboid(v(-2.0, 3.5, 0.0), v(7.0, 7.0, 6.0))
        .cuboid(v(5.0, 3.0, 0.0), v(5.0, 6.0, 6.0))
        // connection
        .horizontal(1.5, 2.5, 3.5, -3.0)
        .horizontal(1.5, 2.5, 3.5, 3.0)
        .horizontal(1.5, 2.5, 7.0, -3.0)
        .horizontal(1.5, 2.5, 7.0, 3.0)
        .opening(-4.5, 2.0, -3.01, -2.5, 5.0)
        .opening(-1.5, 2.0, -3.01, 0.5, 5.0)
        .opening(3.5, 1.5, -3.01, 5.0, 4.0)
        .opening(5.5, 1.5, -3.01, 7.0, 4.0)
        // scaffolding
        .vertical(2.5, 0.0, 7.0, -3.0)
        .vertical(7.5, 0.0, 7.0, -3.0)
        .vertical(2.5, 0.0, 7.0, 3.0)
        .vertical(7.5, 0.0, 7.0, 3.0)
        .horizontal(2.5, 7.5, 3.0, -3.0)
        .horizontal(2.5, 7.5, 3.0, 3.0)
        .horizontal(2.5, 7.5, 5.0, -3.0)
        .horizontal(2.5, 7.5, 5.0, 3.0)
        // roof lines
        .horizontal(-6.0, 1.5, 7.2, 0.0)
        .horizontal(2.5, 7.5, 6.2, 0.0)
        .finish()
}

fn service_commercial() -> Vec<f32> {
    let mut b = WireframeBuilder::new()
        .cuboid(v(0.0, 5.0, 0.0), v(12.0, 10.0, 7.0))
        .horizontal(-6.0, 6.0, 2.5, -3.5)
        .horizontal(-6.0, 6.0, 2.5, 3.5)
        .horizontal(-6.0, 6.0, 5.0, -3.5)
        .horizontal(-6.0, 6.0, 5.0, 3.5)
        .horizontal(-6.0, 6.0, 7.5, -3.5)
        .horizontal(-6.0, 6.0, 7.5, 3.5);
    // window grid, three floors of four bays
    for (y0, y1) in [(1.0, 2.2), (3.0, 4.5), (5.5, 7.0)] {
        for (x0, x1) in [(-5.0, -3.0), (-2.0, 0.0), (1.0, 3.0), (4.0, 5.5)] {
            b = b.opening(x0, y0, -3.51, x1, y1);
        }
    }
    b.vertical(-1.5, 0.0, 3.0, -3.51)
        .vertical(1.5, 0.0, 3.0, -3.51)
        .horizontal(-1.5, 1.5, 3.0, -3.51)
        .horizontal(-6.5, 6.5, 10.2, -4.0)
        .horizontal(-6.5, 6.5, 10.2, 4.0)
        .finish()
}

/// Four ADU types: detached, attached, garage conversion, above-garage.
pub fn adu_types() -> Result<MorphTargetSet, MorphError> {
    MorphTargetSet::new(SEGMENT_CAPACITY)
        .with("detached", adu_detached())?
        .with("attached", adu_attached())?
        .with("garage-conversion", adu_garage_conversion())?
        .with("above-garage", adu_above_garage())
}

fn gable(b: WireframeBuilder, x0: f32, x1: f32, eave: f32, ridge: f32, z0: f32, z1: f32) -> WireframeBuilder {
    let mid = (x0 + x1) * 0.5;
    b.segment(v(mid, ridge, z0), v(mid, ridge, z1))
        .segment(v(x0, eave, z0), v(mid, ridge, z0))
        .segment(v(x1, eave, z0), v(mid, ridge, z0))
        .segment(v(x0, eave, z1), v(mid, ridge, z1))
        .segment(v(x1, eave, z1), v(mid, ridge, z1))
}

fn adu_detached() -> Vec<f32> {
    let b = WireframeBuilder::new().cuboid(v(0.0, 3.5, 0.0), v(8.0, 7.0, 6.0));
    gable(b, -4.0, 4.0, 7.0, 8.0, -3.0, 3.0).finish()
}

fn adu_attached() -> Vec<f32> {
    let b = WireframeBuilder::new()
        .cuboid(v(-2.0, 4.0, 0.0), v(10.0, 8.0, 7.0))
        .cuboid(v(6.0, 3.0, 0.0), v(5.0, 6.0, 6.0));
    gable(b, -7.0, 3.0, 8.0, 8.5, -3.5, 3.5)
        // flat roof on the wing
        .segment(v(3.5, 6.0, -3.0), v(8.5, 6.0, -3.0))
        .segment(v(8.5, 6.0, -3.0), v(8.5, 6.0, 3.0))
        .segment(v(8.5, 6.0, 3.0), v(3.5, 6.0, 3.0))
        .segment(v(3.5, 6.0, 3.0), v(3.5, 6.0, -3.0))
        .finish()
}

fn adu_garage_conversion() -> Vec<f32> {
    WireframeBuilder::new()
        .cuboid(v(0.0, 2.5, 0.0), v(10.0, 5.0, 7.0))
        // roof overhang ring
        .segment(v(-5.3, 5.1, -3.8), v(5.3, 5.1, -3.8))
        .segment(v(5.3, 5.1, -3.8), v(5.3, 5.1, 3.8))
        .segment(v(5.3, 5.1, 3.8), v(-5.3, 5.1, 3.8))
        .segment(v(-5.3, 5.1, 3.8), v(-5.3, 5.1, -3.8))
        // converted door opening
        .vertical(-2.5, 0.0, 4.0, -3.51)
        .vertical(2.5, 0.0, 4.0, -3.51)
        .horizontal(-2.5, 2.5, 4.0, -3.51)
        .finish()
}

fn adu_above_garage() -> Vec<f32> {
    let b = WireframeBuilder::new()
        .cuboid(v(0.0, 2.5, 0.0), v(10.0, 5.0, 7.0))
        .cuboid(v(0.0, 7.5, 0.0), v(10.0, 5.0, 7.0))
        .horizontal(-5.0, 5.0, 5.0, -3.5)
        .horizontal(-5.0, 5.0, 5.0, 3.5);
    gable(b, -5.0, 5.0, 10.0, 10.8, -3.5, 3.5).finish()
}

/// Flat ground grid in the y=0 plane: lines every `spacing` units across
/// `[-half_x, half_x] x [-half_z, half_z]`.
pub fn ground_grid(half_x: f32, half_z: f32, spacing: f32) -> Vec<f32> {
    let mut b = WireframeBuilder::new();
    if spacing <= 0.0 {
        return b.finish();
    }
    let mut x = -half_x;
    while x <= half_x + 1e-4 {
        b = b.segment(v(x, 0.0, -half_z), v(x, 0.0, half_z));
        x += spacing;
    }
    let mut z = -half_z;
    while z <= half_z + 1e-4 {
        b = b.segment(v(-half_x, 0.0, z), v(half_x, 0.0, z));
        z += spacing;
    }
    b.finish()
}
