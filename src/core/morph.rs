use glam::Vec3;
use thiserror::Error;

use super::constants::FLOATS_PER_SEGMENT;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MorphError {
    #[error("morph target set is empty")]
    EmptySet,
    #[error("morph target '{name}' has {floats} floats, which is not a whole number of segments")]
    RaggedSegments { name: String, floats: usize },
    #[error("morph target '{name}' needs {segments} segments but capacity is {capacity}")]
    CapacityExceeded {
        name: String,
        segments: usize,
        capacity: usize,
    },
    #[error("morph target index {index} out of range (set has {len})")]
    UnknownTarget { index: usize, len: usize },
}

/// Accumulates line-segment endpoint pairs (`x1,y1,z1, x2,y2,z2`) for one
/// wireframe design.
#[derive(Clone, Debug, Default)]
pub struct WireframeBuilder {
    floats: Vec<f32>,
}

impl WireframeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(mut self, a: Vec3, b: Vec3) -> Self {
        self.floats.extend_from_slice(&[a.x, a.y, a.z, b.x, b.y, b.z]);
        self
    }

    /// 12 edges of an axis-aligned box: bottom ring, top ring, then verticals.
    pub fn cuboid(self, center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        let (x0, x1) = (center.x - half.x, center.x + half.x);
        let (y0, y1) = (center.y - half.y, center.y + half.y);
        let (z0, z1) = (center.z - half.z, center.z + half.z);
        let ring = |b: Self, y: f32| {
            b.segment(Vec3::new(x0, y, z0), Vec3::new(x1, y, z0))
                .segment(Vec3::new(x1, y, z0), Vec3::new(x1, y, z1))
                .segment(Vec3::new(x1, y, z1), Vec3::new(x0, y, z1))
                .segment(Vec3::new(x0, y, z1), Vec3::new(x0, y, z0))
        };
        let b = ring(ring(self, y0), y1);
        b.segment(Vec3::new(x0, y0, z0), Vec3::new(x0, y1, z0))
            .segment(Vec3::new(x1, y0, z0), Vec3::new(x1, y1, z0))
            .segment(Vec3::new(x1, y0, z1), Vec3::new(x1, y1, z1))
            .segment(Vec3::new(x0, y0, z1), Vec3::new(x0, y1, z1))
    }

    /// Rectangular opening (window, door) in a plane of constant `z`, given its
    /// lower-left `(x0, y0)` and upper-right `(x1, y1)` corners. 4 segments.
    pub fn opening(self, x0: f32, y0: f32, z: f32, x1: f32, y1: f32) -> Self {
        self.segment(Vec3::new(x0, y0, z), Vec3::new(x1, y0, z))
            .segment(Vec3::new(x1, y0, z), Vec3::new(x1, y1, z))
            .segment(Vec3::new(x1, y1, z), Vec3::new(x0, y1, z))
            .segment(Vec3::new(x0, y1, z), Vec3::new(x0, y0, z))
    }

    /// Rectangular opening in a plane of constant `x` (side walls). 4 segments.
    pub fn side_opening(self, x: f32, y0: f32, z0: f32, y1: f32, z1: f32) -> Self {
        self.segment(Vec3::new(x, y0, z0), Vec3::new(x, y0, z1))
            .segment(Vec3::new(x, y0, z1), Vec3::new(x, y1, z1))
            .segment(Vec3::new(x, y1, z1), Vec3::new(x, y1, z0))
            .segment(Vec3::new(x, y1, z0), Vec3::new(x, y0, z0))
    }

    pub fn vertical(self, x: f32, y0: f32, y1: f32, z: f32) -> Self {
        self.segment(Vec3::new(x, y0, z), Vec3::new(x, y1, z))
    }

    pub fn horizontal(self, x0: f32, x1: f32, y: f32, z: f32) -> Self {
        self.segment(Vec3::new(x0, y, z), Vec3::new(x1, y, z))
    }

    pub fn segment_count(&self) -> usize {
        self.floats.len() / FLOATS_PER_SEGMENT
    }

    pub fn finish(self) -> Vec<f32> {
        self.floats
    }
}

/// One named design variant, zero-padded to the owning set's capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphTarget {
    pub name: String,
    positions: Box<[f32]>,
    used_segments: usize,
}

impl MorphTarget {
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Segments that carry geometry; the rest are zero-length padding.
    pub fn used_segments(&self) -> usize {
        self.used_segments
    }
}

/// Ordered morph targets sharing one buffer length.
#[derive(Clone, Debug)]
pub struct MorphTargetSet {
    capacity_segments: usize,
    targets: Vec<MorphTarget>,
}

impl MorphTargetSet {
    pub fn new(capacity_segments: usize) -> Self {
        Self {
            capacity_segments,
            targets: Vec::new(),
        }
    }

    /// Append a variant. Raw data shorter than capacity is zero-padded;
    /// longer data is rejected rather than truncated.
    pub fn push(&mut self, name: impl Into<String>, raw: Vec<f32>) -> Result<usize, MorphError> {
        let name = name.into();
        if raw.len() % FLOATS_PER_SEGMENT != 0 {
            return Err(MorphError::RaggedSegments {
                name,
                floats: raw.len(),
            });
        }
        let segments = raw.len() / FLOATS_PER_SEGMENT;
        if segments > self.capacity_segments {
            return Err(MorphError::CapacityExceeded {
                name,
                segments,
                capacity: self.capacity_segments,
            });
        }
        let mut positions = raw;
        positions.resize(self.buffer_len(), 0.0);
        self.targets.push(MorphTarget {
            name,
            positions: positions.into_boxed_slice(),
            used_segments: segments,
        });
        Ok(self.targets.len() - 1)
    }

    pub fn with(mut self, name: impl Into<String>, raw: Vec<f32>) -> Result<Self, MorphError> {
        self.push(name, raw)?;
        Ok(self)
    }

    pub fn buffer_len(&self) -> usize {
        self.capacity_segments * FLOATS_PER_SEGMENT
    }

    pub fn capacity_segments(&self) -> usize {
        self.capacity_segments
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&MorphTarget, MorphError> {
        self.targets.get(index).ok_or(MorphError::UnknownTarget {
            index,
            len: self.targets.len(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &MorphTarget> {
        self.targets.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }
}
