//! Distance links between neighbouring chain particles.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;

/// A rigid link from particle `a` (near, toward the anchor) to particle `b`
/// (far, toward the tail).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceConstraint<F: Float> {
    pub a: usize,
    pub b: usize,
    pub rest_length: F,
}

impl<F: Float> DistanceConstraint<F> {
    pub fn new(a: usize, b: usize, rest_length: F) -> Self {
        DistanceConstraint { a, b, rest_length }
    }

    /// Link `a` to `b` with the rest length taken from their current distance.
    pub fn from_positions(a: usize, b: usize, positions: &[Vec3<F>]) -> Self {
        let rest_length = positions[a].distance(positions[b]);
        DistanceConstraint { a, b, rest_length }
    }

    /// Place `b` exactly `rest_length` away from `a`, along the current
    /// direction from `a` to `b`. `a` never moves.
    ///
    /// When the two points coincide there is no direction to project along:
    /// the positions are left untouched and `DegenerateVector` is returned.
    pub fn solve(&self, positions: &mut [Vec3<F>]) -> Result<(), PhysicsError> {
        let near = positions[self.a];
        let dir = (positions[self.b] - near).try_normalize()?;
        positions[self.b] = near + dir.scale(self.rest_length);
        Ok(())
    }

    /// Signed deviation of the current link length from the rest length.
    pub fn error(&self, positions: &[Vec3<F>]) -> F {
        positions[self.a].distance(positions[self.b]) - self.rest_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_only_far_endpoint() {
        let mut positions = [Vec3::new(0.0f32, 0.0, 0.0), Vec3::new(0.0, 0.0, -3.0)];
        let link = DistanceConstraint::new(0, 1, 1.0);
        link.solve(&mut positions).unwrap();
        assert_eq!(positions[0], Vec3::zero());
        assert!((positions[1].z + 1.0).abs() < 1e-6);
        assert!(link.error(&positions).abs() < 1e-6);
    }

    #[test]
    fn rest_length_from_positions() {
        let positions = [Vec3::new(0.0f32, 2.0, 0.0), Vec3::new(0.0, 1.0, 0.0)];
        let link = DistanceConstraint::from_positions(0, 1, &positions);
        assert_eq!(link.rest_length, 1.0);
    }

    #[test]
    fn coincident_points_are_left_alone() {
        let p = Vec3::new(1.0f32, 1.0, 1.0);
        let mut positions = [p, p];
        let link = DistanceConstraint::new(0, 1, 1.0);
        assert_eq!(link.solve(&mut positions), Err(PhysicsError::DegenerateVector));
        assert_eq!(positions, [p, p]);
    }
}
