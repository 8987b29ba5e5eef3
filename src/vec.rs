//! 3D vector type for the chain simulation.

use crate::error::PhysicsError;
use crate::float::Float;
use core::ops::{Add, Div, Neg, Sub};
use serde::{Deserialize, Serialize};

/// Lengths below this are treated as zero by [`Vec3::try_normalize`].
const NORMALIZE_EPSILON: f32 = 1e-10;

/// 3D vector (z-up world space).
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }

    /// Zero vector.
    pub fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }

    /// Build from `f32` literals.
    pub fn from_f32(x: f32, y: f32, z: f32) -> Self {
        Vec3::new(F::from_f32(x), F::from_f32(y), F::from_f32(z))
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Scale all components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }

    /// Normalize to unit length.
    ///
    /// Fails with [`PhysicsError::DegenerateVector`] when the length is near
    /// zero or not finite, instead of producing NaN or infinite components.
    pub fn try_normalize(self) -> Result<Self, PhysicsError> {
        let len = self.length();
        if len.is_near_zero(F::from_f32(NORMALIZE_EPSILON)) || !len.is_finite() {
            return Err(PhysicsError::DegenerateVector);
        }
        Ok(self.scale(F::one() / len))
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    pub fn normalize_or_zero(self) -> Self {
        self.try_normalize().unwrap_or_else(|_| Self::zero())
    }

    /// Distance between two points.
    pub fn distance(self, other: Self) -> F {
        (self - other).length()
    }

    /// True when every component is finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Div<F> for Vec3<F> {
    type Output = Self;
    fn div(self, rhs: F) -> Self {
        Vec3 { x: self.x / rhs, y: self.y / rhs, z: self.z / rhs }
    }
}
