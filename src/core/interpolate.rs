use super::constants::{
    ACCENT_OPACITY_MORPHING, ACCENT_OPACITY_SETTLED, BUILD_OPACITY_MORPHING,
    BUILD_OPACITY_SETTLED, MORPH_DAMPING, MORPH_EPSILON,
};
use super::morph::{MorphError, MorphTargetSet};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphParams {
    /// Fraction of the remaining distance covered per frame, in `(0, 1]`.
    pub damping: f32,
    /// A float closer than this to its target is left alone.
    pub epsilon: f32,
}

impl Default for MorphParams {
    fn default() -> Self {
        Self {
            damping: MORPH_DAMPING,
            epsilon: MORPH_EPSILON,
        }
    }
}

impl MorphParams {
    fn sanitized(self) -> Self {
        let damping = if self.damping.is_finite() {
            self.damping.clamp(f32::EPSILON, 1.0)
        } else {
            MORPH_DAMPING
        };
        let epsilon = if self.epsilon.is_finite() && self.epsilon >= 0.0 {
            self.epsilon
        } else {
            MORPH_EPSILON
        };
        Self { damping, epsilon }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MorphStatus {
    Morphing,
    Settled,
}

/// Opacity for the build and accent line materials.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialOpacity {
    pub build: f32,
    pub accent: f32,
}

impl MorphStatus {
    pub fn material_opacity(self) -> MaterialOpacity {
        match self {
            MorphStatus::Morphing => MaterialOpacity {
                build: BUILD_OPACITY_MORPHING,
                accent: ACCENT_OPACITY_MORPHING,
            },
            MorphStatus::Settled => MaterialOpacity {
                build: BUILD_OPACITY_SETTLED,
                accent: ACCENT_OPACITY_SETTLED,
            },
        }
    }
}

/// Eases a pair of render buffers toward the selected morph target.
///
/// This is the only writer of the build and accent buffers. Both receive the
/// identical per-float delta every frame, so they stay in lockstep.
pub struct MorphInterpolator {
    targets: MorphTargetSet,
    build: Vec<f32>,
    accent: Vec<f32>,
    target: usize,
    params: MorphParams,
    status: MorphStatus,
    dirty: bool,
}

impl MorphInterpolator {
    /// Seeds both buffers with target 0.
    pub fn new(targets: MorphTargetSet, params: MorphParams) -> Result<Self, MorphError> {
        let seed = targets.get(0).map_err(|_| MorphError::EmptySet)?;
        let build = seed.positions().to_vec();
        let accent = build.clone();
        Ok(Self {
            targets,
            build,
            accent,
            target: 0,
            params: params.sanitized(),
            status: MorphStatus::Settled,
            dirty: true,
        })
    }

    /// Select the target to ease toward. Re-selecting the current target is a
    /// no-op; an out-of-range index leaves the current target in place.
    pub fn set_target(&mut self, index: usize) -> Result<(), MorphError> {
        self.targets.get(index)?;
        if index != self.target {
            self.target = index;
            self.status = MorphStatus::Morphing;
        }
        Ok(())
    }

    /// Advance one frame. Once every float is within epsilon the scan is
    /// skipped entirely until the target changes.
    pub fn step(&mut self) -> MorphStatus {
        if self.status == MorphStatus::Settled {
            return self.status;
        }
        let target = match self.targets.get(self.target) {
            Ok(t) => t.positions(),
            Err(_) => return self.status,
        };
        let MorphParams { damping, epsilon } = self.params;
        let mut morphing = false;
        for ((b, a), t) in self
            .build
            .iter_mut()
            .zip(self.accent.iter_mut())
            .zip(target.iter())
        {
            let diff = *t - *b;
            if diff.abs() > epsilon {
                morphing = true;
                let delta = diff * damping;
                *b += delta;
                *a += delta;
            }
        }
        if morphing {
            self.dirty = true;
            self.status = MorphStatus::Morphing;
        } else {
            self.status = MorphStatus::Settled;
            log::debug!("[morph] settled on '{}'", self.target_name());
        }
        self.status
    }

    pub fn build(&self) -> &[f32] {
        &self.build
    }

    pub fn accent(&self) -> &[f32] {
        &self.accent
    }

    pub fn target_index(&self) -> usize {
        self.target
    }

    pub fn target_name(&self) -> &str {
        self.targets
            .get(self.target)
            .map(|t| t.name.as_str())
            .unwrap_or("")
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn status(&self) -> MorphStatus {
        self.status
    }

    pub fn is_morphing(&self) -> bool {
        self.status == MorphStatus::Morphing
    }

    pub fn params(&self) -> MorphParams {
        self.params
    }

    /// True once per batch of buffer changes; the renderer uploads only then.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// Largest absolute distance between the build buffer and the target.
    pub fn max_distance(&self) -> f32 {
        match self.targets.get(self.target) {
            Ok(t) => self
                .build
                .iter()
                .zip(t.positions())
                .map(|(b, t)| (t - b).abs())
                .fold(0.0, f32::max),
            Err(_) => 0.0,
        }
    }
}
