//! Floating-point abstraction so the simulation runs on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting the floating-point operations the water simulation needs.
///
/// Implemented for `f32` and `f64`, backed by `libm` so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5).
    fn half() -> Self;
    /// Largest finite value, used as the starting point of nearest-joint scans.
    fn max_value() -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert from an index or count.
    fn from_usize(v: usize) -> Self;
    /// Floor and convert to a count. Negative and NaN values yield 0.
    fn to_usize_floor(self) -> usize;
    /// True unless the value is NaN or infinite.
    fn is_finite(self) -> bool;

    /// Linear interpolation: self + (other - self) * t
    fn lerp(self, other: Self, t: Self) -> Self {
        self + (other - self) * t
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn max_value() -> Self { f32::MAX }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f32 }
    fn to_usize_floor(self) -> usize {
        // `as` saturates: NaN and negatives become 0.
        libm::floorf(self) as usize
    }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn max_value() -> Self { f64::MAX }
    fn abs(self) -> Self { libm::fabs(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
    fn to_usize_floor(self) -> usize {
        libm::floor(self) as usize
    }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}
