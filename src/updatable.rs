//! Per-frame update capability shared with independent subsystems.

use crate::float::Float;

/// Anything the host advances by a time step.
///
/// Subsystems such as steering agents or scrolling scenery implement this and
/// are driven next to the water without touching its internals.
pub trait Updatable<F: Float> {
    fn update(&mut self, dt: F);
}
