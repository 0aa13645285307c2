//! Droplet emission for splashes.

use crate::config::{PhysicsConstants, WaterConfig};
use crate::float::Float;
use crate::vec::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seed used when the host does not pick one.
pub const DEFAULT_SEED: u64 = 0x5EA_5EED;

/// Decides how many droplets a splash throws and how fast.
pub struct SplashSpawner {
    rng: SmallRng,
}

impl SplashSpawner {
    pub fn new(seed: u64) -> Self {
        SplashSpawner { rng: SmallRng::seed_from_u64(seed) }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = SmallRng::seed_from_u64(seed);
    }

    /// `floor(count_factor * force / force_reference * density)`, never negative.
    pub fn droplet_count<F: Float>(
        force: F,
        config: &WaterConfig<F>,
        constants: &PhysicsConstants<F>,
    ) -> usize {
        let count = constants.droplet_count_factor * force / constants.force_reference
            * config.droplets_density;
        count.to_usize_floor()
    }

    /// Sample a launch velocity. Each axis is uniform between its min and max
    /// bound, with both bounds scaled by `force / force_reference * droplets_force`.
    pub fn sample_velocity<F: Float>(
        &mut self,
        force: F,
        config: &WaterConfig<F>,
        constants: &PhysicsConstants<F>,
    ) -> Vec2<F> {
        let k = force / constants.force_reference * config.droplets_force;
        let u_x = F::from_f32(self.rng.gen::<f32>());
        let u_y = F::from_f32(self.rng.gen::<f32>());

        Vec2::new(
            (constants.min_vel_x * k).lerp(constants.max_vel_x * k, u_x),
            (constants.min_vel_y * k).lerp(constants.max_vel_y * k, u_y),
        )
    }
}

impl Default for SplashSpawner {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
