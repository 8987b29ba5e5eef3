//! Error types for physics operations.

use thiserror::Error;

/// Errors that can occur while configuring or stepping the chain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// A zero-length (or non-finite) vector has no direction.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
    /// Frame delta must be finite and non-negative.
    #[error("frame delta must be finite and non-negative, got {delta}")]
    InvalidFrameDelta { delta: f64 },
    /// Fixed step must be positive and finite.
    #[error("fixed step must be positive and finite")]
    InvalidFixedStep,
    /// A chain needs an anchor plus at least one free particle.
    #[error("chain needs at least 2 particles, got {count}")]
    InvalidChainLength { count: usize },
    /// Radii and link spacing must be non-negative and finite.
    #[error("radius must be non-negative and finite")]
    InvalidRadius,
    /// At least one relaxation sweep is required per substep.
    #[error("constraint iterations must be at least 1")]
    InvalidIterations,
    /// A substep produced a non-finite position; nothing was committed.
    #[error("particle {index} left the finite range")]
    NonFiniteState { index: usize },
    /// Particle index is out of bounds.
    #[error("particle index {index} out of bounds (count: {count})")]
    ParticleOutOfBounds { index: usize, count: usize },
}
