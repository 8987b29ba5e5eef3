//! Configuration types for the chain simulation.

use crate::error::PhysicsError;
use crate::float::Float;
use crate::vec::Vec3;
use serde::{Deserialize, Serialize};

/// Per-particle velocity decay: `factor(i) = base - i * per_index`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DampingConfig<F: Float> {
    pub base: F,
    pub per_index: F,
}

impl<F: Float> Default for DampingConfig<F> {
    fn default() -> Self {
        DampingConfig {
            base: F::from_f32(0.97),
            per_index: F::from_f32(0.03),
        }
    }
}

/// Gains of the oscillating wind term. See [`crate::forces::wind`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig<F: Float> {
    pub x_gain: F,
    pub y_gain: F,
}

impl<F: Float> Default for WindConfig<F> {
    fn default() -> Self {
        WindConfig {
            x_gain: F::from_f32(0.5),
            y_gain: F::from_f32(0.3),
        }
    }
}

/// Obstacle trajectory: `(cos(angular_frequency * t) * amplitude, 0, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstaclePath<F: Float> {
    pub amplitude: F,
    pub angular_frequency: F,
    pub height: F,
}

impl<F: Float> Default for ObstaclePath<F> {
    fn default() -> Self {
        ObstaclePath {
            amplitude: F::from_f32(15.0),
            angular_frequency: F::from_f32(0.1),
            height: F::from_f32(-1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig<F: Float> {
    pub radius: F,
    /// Where the obstacle sits before the first substep runs.
    pub initial_position: Vec3<F>,
    pub path: ObstaclePath<F>,
}

impl<F: Float> Default for ObstacleConfig<F> {
    fn default() -> Self {
        ObstacleConfig {
            radius: F::two(),
            initial_position: Vec3::from_f32(0.2, 0.0, -3.0),
            path: ObstaclePath::default(),
        }
    }
}

/// Configuration for the chain, the solver and the fixed-step clock.
///
/// Defaults reproduce the classic dangle: 11 particles hanging from
/// `(0, 0, 2)`, gravity of 150 along -z, four relaxation sweeps at 60 Hz.
///
/// # Builder Pattern
/// ```
/// use dangle::config::DangleConfig;
/// use dangle::vec::Vec3;
///
/// let config: DangleConfig<f32> = DangleConfig::new()
///     .with_iterations(8)
///     .with_gravity(Vec3::new(0.0, 0.0, -9.81))
///     .with_fixed_step(1.0 / 120.0)
///     .with_max_substeps(Some(4));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DangleConfig<F: Float> {
    /// Number of particles, anchor included. Default: 11.
    pub chain_length: usize,
    /// Initial position of particle 0. Default: (0, 2, 0).
    pub chain_origin: Vec3<F>,
    /// Initial spacing along -y between neighbours. Default: 1.
    pub link_spacing: F,
    /// World point particle 0 is pinned to every substep. Default: (0, 0, 2).
    pub anchor: Vec3<F>,
    /// Gravity acceleration. Default: (0, 0, -150).
    pub gravity: Vec3<F>,
    pub damping: DampingConfig<F>,
    pub wind: WindConfig<F>,
    /// Duration of one substep in seconds. Default: 1/60.
    pub fixed_step_seconds: F,
    /// Relaxation sweeps per substep. Default: 4.
    pub constraint_iterations: usize,
    /// Collision radius of every particle. Default: 0.5.
    pub particle_radius: F,
    pub obstacle: ObstacleConfig<F>,
    /// Upper bound on substeps per frame. Default: none (uncapped catch-up).
    pub max_substeps_per_frame: Option<usize>,
}

impl<F: Float> DangleConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        DangleConfig {
            chain_length: 11,
            chain_origin: Vec3::from_f32(0.0, 2.0, 0.0),
            link_spacing: F::one(),
            anchor: Vec3::from_f32(0.0, 0.0, 2.0),
            gravity: Vec3::from_f32(0.0, 0.0, -150.0),
            damping: DampingConfig::default(),
            wind: WindConfig::default(),
            fixed_step_seconds: F::one() / F::from_f32(60.0),
            constraint_iterations: 4,
            particle_radius: F::from_f32(0.5),
            obstacle: ObstacleConfig::default(),
            max_substeps_per_frame: None,
        }
    }

    /// Set the number of particles.
    pub fn with_chain_length(mut self, chain_length: usize) -> Self {
        self.chain_length = chain_length;
        self
    }

    /// Set the gravity vector.
    pub fn with_gravity(mut self, gravity: Vec3<F>) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the fixed substep duration.
    pub fn with_fixed_step(mut self, seconds: F) -> Self {
        self.fixed_step_seconds = seconds;
        self
    }

    /// Set the number of relaxation sweeps.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.constraint_iterations = iterations;
        self
    }

    pub fn with_particle_radius(mut self, radius: F) -> Self {
        self.particle_radius = radius;
        self
    }

    pub fn with_obstacle_radius(mut self, radius: F) -> Self {
        self.obstacle.radius = radius;
        self
    }

    pub fn with_obstacle_path(mut self, path: ObstaclePath<F>) -> Self {
        self.obstacle.path = path;
        self
    }

    pub fn with_damping(mut self, damping: DampingConfig<F>) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_wind(mut self, wind: WindConfig<F>) -> Self {
        self.wind = wind;
        self
    }

    /// Cap how many substeps one frame may run. `None` removes the cap.
    pub fn with_max_substeps(mut self, max: Option<usize>) -> Self {
        self.max_substeps_per_frame = max;
        self
    }

    /// Check every option, returning the first violation found.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if self.chain_length < 2 {
            return Err(PhysicsError::InvalidChainLength { count: self.chain_length });
        }
        let step = self.fixed_step_seconds;
        if !step.is_finite() || step <= F::zero() {
            return Err(PhysicsError::InvalidFixedStep);
        }
        if self.constraint_iterations == 0 || self.max_substeps_per_frame == Some(0) {
            return Err(PhysicsError::InvalidIterations);
        }
        for r in [self.particle_radius, self.obstacle.radius, self.link_spacing] {
            if !r.is_finite() || r < F::zero() {
                return Err(PhysicsError::InvalidRadius);
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for DangleConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}
