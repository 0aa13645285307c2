//! 2D vector type for positions and velocities.

use crate::float::Float;
use core::ops::{Add, Sub, Neg};

/// 2D vector used for joint positions, droplet motion and contour points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}
