//! Step observer trait for monitoring simulation progress.

/// Which correction hit a zero-length direction and was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degeneracy {
    /// The particle coincided with its predecessor in the chain.
    Link,
    /// The particle sat exactly at the obstacle center.
    ObstacleCenter,
}

/// Trait for observing physics simulation steps.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called after forces are applied and candidate positions computed.
    fn on_integrate(&mut self) {}

    /// Called after each relaxation sweep.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called when a particle was pushed out of the obstacle.
    fn on_contact(&mut self, _particle: usize, _depth: f64) {}

    /// Called when a correction was skipped for lack of a direction.
    fn on_degenerate(&mut self, _particle: usize, _kind: Degeneracy) {}

    /// Called when a substep is fully committed.
    fn on_step_complete(&mut self) {}

    /// Called once per frame with the number of substeps it ran.
    fn on_frame_complete(&mut self, _substeps: usize) {}

    /// Called when the catch-up cap discarded whole substeps.
    fn on_substeps_dropped(&mut self, _dropped: usize) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}

/// Forwards observer hooks to `tracing` and keeps running totals.
#[derive(Debug, Default, Clone)]
pub struct TracingObserver {
    pub substeps: u64,
    pub frames: u64,
    pub contacts: u64,
    pub degenerate: u64,
    pub dropped: u64,
}

impl TracingObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StepObserver for TracingObserver {
    fn on_contact(&mut self, particle: usize, depth: f64) {
        self.contacts += 1;
        tracing::trace!(particle, depth, "pushed out of obstacle");
    }

    fn on_degenerate(&mut self, particle: usize, kind: Degeneracy) {
        self.degenerate += 1;
        tracing::warn!(particle, ?kind, "skipped correction with no direction");
    }

    fn on_step_complete(&mut self) {
        self.substeps += 1;
    }

    fn on_frame_complete(&mut self, substeps: usize) {
        self.frames += 1;
        tracing::debug!(frame = self.frames, substeps, "frame complete");
    }

    fn on_substeps_dropped(&mut self, dropped: usize) {
        self.dropped += dropped as u64;
        tracing::debug!(dropped, total = self.dropped, "substeps dropped");
    }
}
