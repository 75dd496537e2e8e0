use super::interpolate::{MaterialOpacity, MorphInterpolator, MorphStatus};
use super::orientation::{OrbitInputs, OrbitParams, SceneOrientation};
use super::particles::ParticleField;

/// When the particle field advances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleGate {
    /// Every visible frame.
    Always,
    /// Only while scroll is still settling or geometry is morphing.
    WhileMoving,
}

/// Everything a scene reads on one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    pub visible: bool,
    pub target_step: usize,
    pub orbit: OrbitInputs,
}

/// What a visible frame produced, for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub status: MorphStatus,
    pub materials: MaterialOpacity,
    pub particles_moved: bool,
    /// Particle positions must be written to the GPU this frame.
    pub upload_particles: bool,
}

/// Per-canvas animation state: morph, particles and orientation.
///
/// One instance exists per canvas host; nothing here is shared between
/// scenes, so several showcases on one page animate independently.
pub struct SceneState {
    pub morph: MorphInterpolator,
    pub particles: ParticleField,
    pub orientation: SceneOrientation,
    pub orbit: OrbitParams,
    pub gate: ParticleGate,
    frames: u64,
}

impl SceneState {
    pub fn new(
        morph: MorphInterpolator,
        particles: ParticleField,
        orbit: OrbitParams,
        gate: ParticleGate,
    ) -> Self {
        Self {
            morph,
            particles,
            orientation: SceneOrientation::new(&orbit),
            orbit,
            gate,
            frames: 0,
        }
    }

    /// Run one frame. Off-screen frames do no work at all and return `None`.
    pub fn tick(&mut self, inputs: &FrameInputs) -> Option<FrameOutput> {
        if !inputs.visible {
            return None;
        }
        let first = self.frames == 0;
        self.frames += 1;
        if inputs.target_step != self.morph.target_index() {
            if let Err(e) = self.morph.set_target(inputs.target_step) {
                log::warn!("[morph] ignoring step: {}", e);
            }
        }
        let status = self.morph.step();
        self.orientation.advance(&self.orbit, &inputs.orbit);

        let particles_moved = match self.gate {
            ParticleGate::Always => true,
            ParticleGate::WhileMoving => {
                self.orientation.scroll_settling() || status == MorphStatus::Morphing
            }
        };
        if particles_moved {
            self.particles.advance();
        }
        Some(FrameOutput {
            status,
            materials: status.material_opacity(),
            particles_moved,
            upload_particles: particles_moved || first,
        })
    }

    /// Visible frames processed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
