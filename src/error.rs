//! Error types for water simulation setup.

use core::fmt;

/// Errors reported when a simulation or host loop is misconfigured.
#[derive(Debug, Clone, PartialEq)]
pub enum WaterError {
    /// The surface needs at least two joints to span its width.
    InsufficientJoints { requested: usize },
    /// Width must be positive and finite.
    InvalidWidth,
    /// A tuning value or physics constant is NaN or infinite.
    NonFiniteTuning,
    /// Fixed time step must be positive and finite.
    InvalidTimeStep,
}

impl fmt::Display for WaterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaterError::InsufficientJoints { requested } => {
                write!(f, "surface needs at least 2 joints (requested: {})", requested)
            }
            WaterError::InvalidWidth => write!(f, "width must be positive and finite"),
            WaterError::NonFiniteTuning => write!(f, "tuning values must be finite"),
            WaterError::InvalidTimeStep => write!(f, "fixed time step must be positive and finite"),
        }
    }
}
