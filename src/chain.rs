//! The dangling chain: particles and the links between neighbours.

use crate::config::DangleConfig;
use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec3;

/// An ordered run of particles where link `i` joins particle `i` and `i + 1`.
///
/// Particle 0 is the anchor. Rest lengths are captured once from the
/// initial positions and never change afterwards.
#[derive(Clone, Debug)]
pub struct Chain<F: Float> {
    particles: Vec<Particle<F>>,
    links: Vec<DistanceConstraint<F>>,
    // Candidate positions reused by the solver every substep.
    candidates: Vec<Vec3<F>>,
}

impl<F: Float> Chain<F> {
    /// Build a chain at rest from explicit initial positions.
    pub fn from_positions(positions: Vec<Vec3<F>>) -> Result<Self, PhysicsError> {
        if positions.len() < 2 {
            return Err(PhysicsError::InvalidChainLength { count: positions.len() });
        }
        if let Some(index) = positions.iter().position(|p| !p.is_finite()) {
            return Err(PhysicsError::NonFiniteState { index });
        }
        let links = (0..positions.len() - 1)
            .map(|i| DistanceConstraint::from_positions(i, i + 1, &positions))
            .collect();
        let particles = positions.iter().copied().map(Particle::at_rest).collect();
        Ok(Chain { particles, links, candidates: positions })
    }

    /// A straight chain of `count` particles hanging along -y from `origin`.
    pub fn hanging(origin: Vec3<F>, spacing: F, count: usize) -> Result<Self, PhysicsError> {
        let positions = (0..count)
            .map(|i| origin - Vec3::new(F::zero(), F::from_f32(i as f32) * spacing, F::zero()))
            .collect();
        Self::from_positions(positions)
    }

    pub fn from_config(config: &DangleConfig<F>) -> Result<Self, PhysicsError> {
        Self::hanging(config.chain_origin, config.link_spacing, config.chain_length)
    }

    pub fn positions(&self) -> Vec<Vec3<F>> {
        self.particles.iter().map(|p| p.pos).collect()
    }

    pub fn particles(&self) -> &[Particle<F>] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Result<&Particle<F>, PhysicsError> {
        self.particles.get(index).ok_or(PhysicsError::ParticleOutOfBounds {
            index,
            count: self.particles.len(),
        })
    }

    pub fn links(&self) -> &[DistanceConstraint<F>] {
        &self.links
    }

    pub fn rest_length(&self, link: usize) -> Result<F, PhysicsError> {
        self.links.get(link).map(|l| l.rest_length).ok_or(PhysicsError::ParticleOutOfBounds {
            index: link,
            count: self.links.len(),
        })
    }

    /// Largest `| |p[i+1] - p[i]| - rest[i] |` over all links.
    pub fn max_link_error(&self) -> F {
        let positions = self.positions();
        self.links
            .iter()
            .map(|l| l.error(&positions).abs())
            .fold(F::zero(), |acc, e| if e > acc { e } else { acc })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn solver_parts(
        &mut self,
    ) -> (&mut [Particle<F>], &[DistanceConstraint<F>], &mut [Vec3<F>]) {
        (&mut self.particles[..], &self.links[..], &mut self.candidates[..])
    }
}
