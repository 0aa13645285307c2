//! Tuning and physics constants for the water simulation.

use crate::error::WaterError;
use crate::float::Float;

/// Tunable water parameters, the values `WaterSimulation::reset` restores.
///
/// # Builder Pattern
/// ```
/// use waterline::config::WaterConfig;
///
/// let config: WaterConfig<f32> = WaterConfig::new()
///     .with_tension(2.5)
///     .with_damping(3.0)
///     .with_spread(6.0)
///     .with_droplets_density(0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WaterConfig<F: Float> {
    /// Spring stiffness pulling each joint back to rest. Default: 1.8.
    pub tension: F,
    /// Velocity damping of each joint; should exceed tension. Default: 2.4.
    pub damping: F,
    /// How fast and far waves propagate across the surface. Default: 9.0.
    pub spread: F,
    /// Multiplier on splash droplet velocities. Default: 1.0.
    pub droplets_force: F,
    /// Multiplier on the number of droplets per splash. Default: 1.0.
    pub droplets_density: F,
    /// Visual scale given to newly spawned droplets. Default: 3.0.
    pub droplet_size: F,
}

impl<F: Float> WaterConfig<F> {
    /// Create a config holding the baseline tuning.
    pub fn new() -> Self {
        WaterConfig {
            tension: F::from_f32(1.8),
            damping: F::from_f32(2.4),
            spread: F::from_f32(9.0),
            droplets_force: F::one(),
            droplets_density: F::one(),
            droplet_size: F::from_f32(3.0),
        }
    }

    pub fn with_tension(mut self, tension: F) -> Self {
        self.tension = tension;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_spread(mut self, spread: F) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_droplets_force(mut self, droplets_force: F) -> Self {
        self.droplets_force = droplets_force;
        self
    }

    pub fn with_droplets_density(mut self, droplets_density: F) -> Self {
        self.droplets_density = droplets_density;
        self
    }

    pub fn with_droplet_size(mut self, droplet_size: F) -> Self {
        self.droplet_size = droplet_size;
        self
    }

    /// Reject NaN or infinite values.
    pub fn validate(&self) -> Result<(), WaterError> {
        let all_finite = [
            self.tension,
            self.damping,
            self.spread,
            self.droplets_force,
            self.droplets_density,
            self.droplet_size,
        ]
        .iter()
        .all(|v| v.is_finite());

        if all_finite { Ok(()) } else { Err(WaterError::NonFiniteTuning) }
    }
}

impl<F: Float> Default for WaterConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed constants calibrated for the reference look of the water.
///
/// These are not expected to change between frames, but they are exposed so a
/// host can retune the feel of splashes without touching the solver.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicsConstants<F: Float> {
    /// Multiplier on joint velocity in the position update. Default: 60.
    pub velocity_scale: F,
    /// Vertical acceleration applied to droplets and falling bodies. Default: -1200.
    pub gravity: F,
    /// Distance below the baseline a droplet must fall before it is culled. Default: 30.
    pub cull_margin: F,
    /// Half-height of a droplet at scale 1. Default: 1.
    pub droplet_radius: F,
    /// Droplets spawned per splash at the reference force. Default: 20.
    pub droplet_count_factor: F,
    /// Force at which droplet counts and velocities are unscaled. Default: 100.
    pub force_reference: F,
    /// Horizontal droplet velocity at u = 0. Default: 350.
    pub min_vel_x: F,
    /// Horizontal droplet velocity at u = 1. Default: -350.
    pub max_vel_x: F,
    /// Vertical droplet velocity at u = 0. Default: 200.
    pub min_vel_y: F,
    /// Vertical droplet velocity at u = 1. Default: 500.
    pub max_vel_y: F,
    /// Spread relaxation passes per step. Default: 1.
    pub spread_passes: usize,
    /// Optional cap on live droplets; the oldest are evicted first. Default: none.
    pub max_droplets: Option<usize>,
}

impl<F: Float> PhysicsConstants<F> {
    pub fn new() -> Self {
        PhysicsConstants {
            velocity_scale: F::from_f32(60.0),
            gravity: F::from_f32(-1200.0),
            cull_margin: F::from_f32(30.0),
            droplet_radius: F::one(),
            droplet_count_factor: F::from_f32(20.0),
            force_reference: F::from_f32(100.0),
            min_vel_x: F::from_f32(350.0),
            max_vel_x: F::from_f32(-350.0),
            min_vel_y: F::from_f32(200.0),
            max_vel_y: F::from_f32(500.0),
            spread_passes: 1,
            max_droplets: None,
        }
    }

    pub fn with_velocity_scale(mut self, velocity_scale: F) -> Self {
        self.velocity_scale = velocity_scale;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_cull_margin(mut self, cull_margin: F) -> Self {
        self.cull_margin = cull_margin;
        self
    }

    pub fn with_droplet_radius(mut self, droplet_radius: F) -> Self {
        self.droplet_radius = droplet_radius;
        self
    }

    pub fn with_droplet_count_factor(mut self, factor: F) -> Self {
        self.droplet_count_factor = factor;
        self
    }

    /// Set the horizontal and vertical droplet velocity bounds.
    pub fn with_droplet_velocity_bounds(mut self, min_x: F, max_x: F, min_y: F, max_y: F) -> Self {
        self.min_vel_x = min_x;
        self.max_vel_x = max_x;
        self.min_vel_y = min_y;
        self.max_vel_y = max_y;
        self
    }

    /// Set the number of spread passes. At least one pass always runs.
    pub fn with_spread_passes(mut self, passes: usize) -> Self {
        self.spread_passes = passes.max(1);
        self
    }

    pub fn with_max_droplets(mut self, max_droplets: Option<usize>) -> Self {
        self.max_droplets = max_droplets;
        self
    }

    /// Reject NaN or infinite values and a non-positive force reference.
    pub fn validate(&self) -> Result<(), WaterError> {
        let all_finite = [
            self.velocity_scale,
            self.gravity,
            self.cull_margin,
            self.droplet_radius,
            self.droplet_count_factor,
            self.force_reference,
            self.min_vel_x,
            self.max_vel_x,
            self.min_vel_y,
            self.max_vel_y,
        ]
        .iter()
        .all(|v| v.is_finite());

        if !all_finite || self.force_reference <= F::zero() {
            return Err(WaterError::NonFiniteTuning);
        }
        Ok(())
    }
}

impl<F: Float> Default for PhysicsConstants<F> {
    fn default() -> Self {
        Self::new()
    }
}
