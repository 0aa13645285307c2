//! Chain of wave joints forming the water surface.

use crate::error::WaterError;
use crate::float::Float;
use crate::joint::WaveJoint;
use crate::observer::StepObserver;
use alloc::vec::Vec as AllocVec;

/// Ordered chain of joints evenly spaced across `[-width/2, +width/2]`.
///
/// Each step integrates every joint on its own, then runs the spread
/// relaxation that couples neighbors into travelling waves.
pub struct SurfaceField<F: Float> {
    joints: AllocVec<WaveJoint<F>>,
    width: F,
    surface_height: F,
    spread: F,
    left_deltas: AllocVec<F>,
    right_deltas: AllocVec<F>,
}

impl<F: Float> SurfaceField<F> {
    /// Build a surface at rest.
    ///
    /// Fails when `num_joints < 2` (the spacing divides by `num_joints - 1`)
    /// or when `width` is not a positive finite number.
    pub fn try_new(
        width: F,
        num_joints: usize,
        surface_height: F,
        tension: F,
        damping: F,
        spread: F,
    ) -> Result<Self, WaterError> {
        if num_joints < 2 {
            return Err(WaterError::InsufficientJoints { requested: num_joints });
        }
        if !width.is_finite() || width <= F::zero() {
            return Err(WaterError::InvalidWidth);
        }

        let left = -width * F::half();
        let spacing = width / F::from_usize(num_joints - 1);
        let joints = (0..num_joints)
            .map(|i| WaveJoint::new(left + spacing * F::from_usize(i), tension, damping))
            .collect();

        Ok(SurfaceField {
            joints,
            width,
            surface_height,
            spread,
            left_deltas: alloc::vec![F::zero(); num_joints],
            right_deltas: alloc::vec![F::zero(); num_joints],
        })
    }

    /// Fail-fast variant of [`SurfaceField::try_new`].
    ///
    /// # Panics
    /// Panics on the same conditions `try_new` reports as errors.
    pub fn new(
        width: F,
        num_joints: usize,
        surface_height: F,
        tension: F,
        damping: F,
        spread: F,
    ) -> Self {
        match Self::try_new(width, num_joints, surface_height, tension, damping, spread) {
            Ok(field) => field,
            Err(err) => panic!("invalid surface: {}", err),
        }
    }

    /// Advance the surface by `dt` with a single spread pass.
    pub fn update(&mut self, dt: F, velocity_scale: F) {
        self.step(dt, velocity_scale, 1, &mut crate::observer::NoOpStepObserver);
    }

    /// Advance the surface by `dt`, running `passes` spread passes.
    pub fn step<O: StepObserver>(
        &mut self,
        dt: F,
        velocity_scale: F,
        passes: usize,
        observer: &mut O,
    ) {
        for joint in self.joints.iter_mut() {
            joint.update(dt, velocity_scale);
        }
        observer.on_integrate();

        for pass in 0..passes.max(1) {
            self.spread_pass(dt);
            observer.on_spread_pass(pass);
        }
    }

    /// One relaxation pass of lateral wave propagation.
    ///
    /// Both neighbor deltas are computed from the positions as they stand at
    /// the start of the pass; positions are only offset in the second loop.
    fn spread_pass(&mut self, dt: F) {
        let last = self.joints.len() - 1;

        for i in 0..=last {
            let y = self.joints[i].position.y;
            if i > 0 {
                let delta = self.spread * (y - self.joints[i - 1].position.y);
                self.left_deltas[i] = delta;
                self.joints[i - 1].velocity = self.joints[i - 1].velocity + delta * dt;
            }
            if i < last {
                let delta = self.spread * (y - self.joints[i + 1].position.y);
                self.right_deltas[i] = delta;
                self.joints[i + 1].velocity = self.joints[i + 1].velocity + delta * dt;
            }
        }

        for i in 0..=last {
            if i > 0 {
                let prev = &mut self.joints[i - 1].position.y;
                *prev = *prev + self.left_deltas[i] * dt;
            }
            if i < last {
                let next = &mut self.joints[i + 1].position.y;
                *next = *next + self.right_deltas[i] * dt;
            }
        }
    }

    /// Convert a world x (origin at the left edge) into field-local x.
    pub fn to_local(&self, x_world: F) -> F {
        x_world - self.width * F::half()
    }

    /// Index of the joint closest to field-local `x_local`.
    ///
    /// Linear scan with a strict `<`, so the first joint in ascending-x order
    /// wins a tie.
    pub fn nearest_joint(&self, x_local: F) -> usize {
        let mut closest = 0;
        let mut shortest = F::max_value();
        for (i, joint) in self.joints.iter().enumerate() {
            let distance = (joint.position.x - x_local).abs();
            if distance < shortest {
                shortest = distance;
                closest = i;
            }
        }
        closest
    }

    /// Inject a splash at world x, returning the epicenter joint index.
    ///
    /// The epicenter's velocity is overwritten with `-force`. Every other joint
    /// closer than `width` to it gets `distance / width * -force`, so the
    /// effect grows with distance up to the cutoff and stops beyond it.
    pub fn apply_impulse(&mut self, x_world: F, force: F, width: F) -> usize {
        let x_local = self.to_local(x_world);
        let epicenter = self.nearest_joint(x_local);
        let center_x = self.joints[epicenter].position.x;
        self.joints[epicenter].velocity = -force;

        for (i, joint) in self.joints.iter_mut().enumerate() {
            if i == epicenter {
                continue;
            }
            let distance = (joint.position.x - center_x).abs();
            if distance < width {
                joint.velocity = distance / width * -force;
            }
        }

        epicenter
    }

    /// Push new tension and damping into every joint.
    pub fn set_spring(&mut self, tension: F, damping: F) {
        for joint in self.joints.iter_mut() {
            joint.tension = tension;
            joint.damping = damping;
        }
    }

    pub fn set_spread(&mut self, spread: F) { self.spread = spread; }
    pub fn spread(&self) -> F { self.spread }

    pub fn set_surface_height(&mut self, surface_height: F) { self.surface_height = surface_height; }
    pub fn surface_height(&self) -> F { self.surface_height }

    pub fn width(&self) -> F { self.width }

    /// Absolute height of the surface at the joint nearest to world x.
    pub fn height_at(&self, x_world: F) -> F {
        let index = self.nearest_joint(self.to_local(x_world));
        self.surface_height + self.joints[index].position.y
    }

    /// Put every joint back at rest.
    pub fn settle(&mut self) {
        for joint in self.joints.iter_mut() {
            joint.settle();
        }
    }

    pub fn joints(&self) -> &[WaveJoint<F>] { &self.joints }
    pub fn joint(&self, index: usize) -> &WaveJoint<F> { &self.joints[index] }
    pub fn joint_mut(&mut self, index: usize) -> &mut WaveJoint<F> { &mut self.joints[index] }

    pub fn len(&self) -> usize { self.joints.len() }

    pub fn is_empty(&self) -> bool { self.joints.is_empty() }
}
