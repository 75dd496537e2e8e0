use rand::prelude::*;

use super::constants::{PARTICLE_FLOOR_Y, PARTICLE_SPAWN_HEIGHT};

/// Size and motion of a rising particle field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleParams {
    pub count: usize,
    /// Full horizontal extent; particles spawn in `[-spread/2, spread/2)`.
    pub spread_x: f32,
    pub spread_z: f32,
    /// A particle rising above this respawns at the floor.
    pub ceiling: f32,
    pub speed_min: f32,
    pub speed_max: f32,
}

impl Default for ParticleParams {
    fn default() -> Self {
        Self {
            count: 50,
            spread_x: 20.0,
            spread_z: 16.0,
            ceiling: 16.0,
            speed_min: 0.003,
            speed_max: 0.010,
        }
    }
}

/// Fixed-count particle set with per-particle rise speed. Positions are kept
/// flattened (`x, y, z` per particle) so they can be uploaded as-is.
pub struct ParticleField {
    params: ParticleParams,
    positions: Vec<f32>,
    speeds: Vec<f32>,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: ParticleParams, seed: u64) -> Self {
        let mut params = params;
        params.ceiling = params.ceiling.max(PARTICLE_FLOOR_Y);
        params.speed_min = params.speed_min.max(0.0);
        params.speed_max = params.speed_max.max(params.speed_min);

        let mut rng = StdRng::seed_from_u64(seed);
        let spawn_top = PARTICLE_SPAWN_HEIGHT.min(params.ceiling).max(0.0);
        let mut positions = Vec::with_capacity(params.count * 3);
        let mut speeds = Vec::with_capacity(params.count);
        for _ in 0..params.count {
            positions.push((rng.gen::<f32>() - 0.5) * params.spread_x);
            positions.push(rng.gen::<f32>() * spawn_top);
            positions.push((rng.gen::<f32>() - 0.5) * params.spread_z);
            speeds.push(params.speed_min + rng.gen::<f32>() * (params.speed_max - params.speed_min));
        }
        Self {
            params,
            positions,
            speeds,
            rng,
        }
    }

    /// Raise every particle by its speed; anything past the ceiling respawns at
    /// the floor at a fresh horizontal position.
    pub fn advance(&mut self) {
        let ParticleParams {
            spread_x,
            spread_z,
            ceiling,
            ..
        } = self.params;
        for (p, speed) in self.positions.chunks_exact_mut(3).zip(self.speeds.iter()) {
            p[1] += *speed;
            if p[1] > ceiling {
                p[1] = PARTICLE_FLOOR_Y;
                p[0] = (self.rng.gen::<f32>() - 0.5) * spread_x;
                p[2] = (self.rng.gen::<f32>() - 0.5) * spread_z;
            }
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn speeds(&self) -> &[f32] {
        &self.speeds
    }

    pub fn len(&self) -> usize {
        self.speeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.speeds.is_empty()
    }

    pub fn params(&self) -> &ParticleParams {
        &self.params
    }
}
