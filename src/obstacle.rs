//! The moving spherical obstacle and its penetration correction.

use crate::config::{ObstacleConfig, ObstaclePath};
use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;

impl<F: Float> ObstaclePath<F> {
    /// Obstacle center at global time `t`.
    pub fn position_at(&self, t: F) -> Vec3<F> {
        Vec3::new(
            (self.angular_frequency * t).cos() * self.amplitude,
            F::zero(),
            self.height,
        )
    }
}

/// A sphere the chain cannot enter. Its motion is prescribed, never simulated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle<F: Float> {
    pub position: Vec3<F>,
    pub radius: F,
}

impl<F: Float> Obstacle<F> {
    pub fn new(position: Vec3<F>, radius: F) -> Self {
        Obstacle { position, radius }
    }

    pub fn from_config(config: &ObstacleConfig<F>) -> Self {
        Obstacle::new(config.initial_position, config.radius)
    }

    /// Move the center to where `path` puts it at time `t`.
    pub fn track(&mut self, path: &ObstaclePath<F>, t: F) {
        self.position = path.position_at(t);
    }

    /// How far a sphere of `particle_radius` centered at `point` reaches into
    /// the obstacle. Positive means overlap.
    pub fn overlap(&self, point: Vec3<F>, particle_radius: F) -> F {
        particle_radius + self.radius - point.distance(self.position)
    }

    /// Push `point` out along the separation direction by the overlap depth.
    ///
    /// Returns the applied depth, or `None` when the spheres don't touch.
    /// A point sitting exactly at the obstacle center has no separation
    /// direction; it is left in place and `DegenerateVector` is returned.
    pub fn push_out(&self, point: &mut Vec3<F>, particle_radius: F) -> Result<Option<F>, PhysicsError> {
        let diff = *point - self.position;
        let overlap = particle_radius + self.radius - diff.length();
        if !(overlap > F::zero()) {
            return Ok(None);
        }
        let separation = diff.try_normalize()?.scale(overlap);
        *point = *point + separation;
        Ok(Some(overlap))
    }
}
