//! Fillable outline of the water body.

use crate::float::Float;
use crate::joint::WaveJoint;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;

/// Closed polyline: one point per joint, then the bottom-right and
/// bottom-left corners. The last point connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour<F: Float> {
    points: AllocVec<Vec2<F>>,
}

impl<F: Float> Contour<F> {
    pub fn new() -> Self {
        Contour { points: AllocVec::new() }
    }

    /// Rebuild the outline from scratch out of the current joint state.
    ///
    /// The point buffer is reused; its contents are fully overwritten.
    pub fn rebuild(&mut self, joints: &[WaveJoint<F>], surface_height: F, width: F) {
        let half_width = width * F::half();

        self.points.clear();
        self.points.reserve(joints.len() + 2);
        self.points.extend(
            joints
                .iter()
                .map(|joint| Vec2::new(joint.x(), joint.displacement() + surface_height)),
        );
        self.points.push(Vec2::new(half_width, F::zero()));
        self.points.push(Vec2::new(-half_width, F::zero()));
    }

    pub fn points(&self) -> &[Vec2<F>] { &self.points }

    /// The open wave curve, without the two bottom corners.
    pub fn surface_points(&self) -> &[Vec2<F>] {
        let end = self.points.len().saturating_sub(2);
        &self.points[..end]
    }

    /// Polygon edges including the closing edge from the last point to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2<F>, Vec2<F>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Signed area of the closed shape (shoelace formula).
    pub fn area(&self) -> F {
        let twice = self
            .edges()
            .fold(F::zero(), |acc, (a, b)| acc + (a.x * b.y - b.x * a.y));
        twice * F::half()
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}
