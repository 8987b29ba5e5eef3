//! Chain particles: position plus a velocity derived from realized motion.

use crate::float::Float;
use crate::vec::Vec3;

/// A point mass of the chain.
///
/// Velocity is not integrated independently: after every substep it is
/// recomputed from the constraint-corrected displacement, so constraint and
/// collision corrections show up in the next substep's motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle<F: Float> {
    pub pos: Vec3<F>,
    pub vel: Vec3<F>,
}

impl<F: Float> Particle<F> {
    /// A particle at rest.
    pub fn at_rest(pos: Vec3<F>) -> Self {
        Particle { pos, vel: Vec3::zero() }
    }

    /// Move to `realized` and set velocity to the displacement over `dt`.
    pub fn commit(&mut self, realized: Vec3<F>, dt: F) {
        self.vel = (realized - self.pos) / dt;
        self.pos = realized;
    }
}
