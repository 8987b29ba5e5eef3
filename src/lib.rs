//! A dangling chain of point masses on rigid links.
//!
//! `dangle` simulates a short chain hanging from a pinned anchor, pulled by
//! gravity and an oscillating wind, damped per particle, and kept out of a
//! sphere that sweeps back and forth underneath it. Physics runs at a fixed
//! timestep regardless of how fast frames are rendered.
//!
//! # Features
//!
//! - **Fixed-step integration**: frame time is banked and drained in whole
//!   substeps, optionally capped per frame
//! - **Position-based links**: Gauss-Seidel relaxation from anchor to tail,
//!   velocity derived from realized displacement
//! - **Sphere collision**: penetration-depth push-out inside every sweep
//! - **No NaN poisoning**: zero-length directions skip the correction and are
//!   reported; non-finite substeps are never committed
//! - **Observable**: monitor substeps via the `StepObserver` trait or forward
//!   them to `tracing` with `TracingObserver`
//! - **Renderer-agnostic**: `FrameSource`/`FrameSink` seams and a headless clock
//!
//! ```
//! use dangle::{DangleConfig, NoOpStepObserver, Simulation};
//!
//! let mut sim: Simulation<f32> = Simulation::new(DangleConfig::new())?;
//! for _ in 0..120 {
//!     sim.advance(1.0 / 30.0, &mut NoOpStepObserver)?;
//! }
//! let anchor = sim.state().chain.particle(0)?.pos;
//! assert_eq!(anchor, sim.config().anchor);
//! # Ok::<(), dangle::PhysicsError>(())
//! ```

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod forces;
pub mod obstacle;
pub mod solver;
pub mod chain;
pub mod stepper;
pub mod simulation;
pub mod render;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec3;
pub use particle::Particle;
pub use constraint::DistanceConstraint;
pub use obstacle::Obstacle;
pub use chain::Chain;
pub use stepper::{FixedStepper, StepBudget};
pub use simulation::{Simulation, SimulationState};
pub use render::{
    run_frames, FrameSink, FrameSnapshot, FrameSource, FrameTiming, HeadlessClock,
    RecordingSink, RunSummary, SphereInstance,
};
pub use config::{DampingConfig, DangleConfig, ObstacleConfig, ObstaclePath, WindConfig};
pub use observer::{Degeneracy, NoOpStepObserver, StepObserver, TracingObserver};
pub use error::PhysicsError;
