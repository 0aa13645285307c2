//! Single spring-damper oscillator of the water surface.

use crate::float::Float;
use crate::vec::Vec2;

/// One joint of the surface chain.
///
/// `position.x` is fixed at construction; `position.y` is the displacement
/// from rest. Tension and damping are shared simulation-wide but copied into
/// every joint so the integration step reads them directly.
#[derive(Clone, Debug)]
pub struct WaveJoint<F: Float> {
    pub(crate) position: Vec2<F>,
    pub velocity: F,
    pub tension: F,
    pub damping: F,
}

impl<F: Float> WaveJoint<F> {
    /// Create a joint at rest at horizontal position `x`.
    pub fn new(x: F, tension: F, damping: F) -> Self {
        WaveJoint {
            position: Vec2::new(x, F::zero()),
            velocity: F::zero(),
            tension,
            damping,
        }
    }

    /// Advance the joint by `dt`.
    ///
    /// Explicit step: the position moves by the pre-step velocity times
    /// `velocity_scale`, and the velocity moves by the acceleration computed
    /// from the pre-step position and velocity.
    pub fn update(&mut self, dt: F, velocity_scale: F) {
        let y = self.position.y;
        let acceleration = -self.tension * y - self.velocity * self.damping;

        self.position.y = y + self.velocity * velocity_scale * dt;
        self.velocity = self.velocity + acceleration * dt;
    }

    pub fn x(&self) -> F { self.position.x }
    pub fn displacement(&self) -> F { self.position.y }
    pub fn position(&self) -> Vec2<F> { self.position }

    /// Overwrite the displacement, keeping x fixed.
    pub fn set_displacement(&mut self, y: F) {
        self.position.y = y;
    }

    /// Put the joint back at rest.
    pub fn settle(&mut self) {
        self.position.y = F::zero();
        self.velocity = F::zero();
    }
}
