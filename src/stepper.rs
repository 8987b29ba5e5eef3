//! Fixed-timestep accumulator that turns frame time into whole substeps.

use crate::config::DangleConfig;
use crate::error::PhysicsError;
use crate::float::Float;

/// How many substeps one frame should run, and how many the cap discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepBudget {
    pub substeps: usize,
    pub dropped: usize,
}

/// Accumulates frame deltas and drains them in fixed-size steps.
///
/// A step is taken only while the leftover strictly exceeds the step size, so
/// a leftover of exactly one step is carried into the next frame.
#[derive(Clone, Debug)]
pub struct FixedStepper<F: Float> {
    step: F,
    leftover: F,
    max_substeps: Option<usize>,
}

impl<F: Float> FixedStepper<F> {
    pub fn new(step: F, max_substeps: Option<usize>) -> Result<Self, PhysicsError> {
        if !step.is_finite() || step <= F::zero() {
            return Err(PhysicsError::InvalidFixedStep);
        }
        if max_substeps == Some(0) {
            return Err(PhysicsError::InvalidIterations);
        }
        Ok(FixedStepper { step, leftover: F::zero(), max_substeps })
    }

    pub fn from_config(config: &DangleConfig<F>) -> Result<Self, PhysicsError> {
        Self::new(config.fixed_step_seconds, config.max_substeps_per_frame)
    }

    pub fn step(&self) -> F {
        self.step
    }

    /// Frame time not yet consumed by a substep.
    pub fn leftover(&self) -> F {
        self.leftover
    }

    /// Add `frame_delta` and return how many substeps are now due.
    ///
    /// Rejects negative or non-finite deltas without touching the leftover.
    pub fn accumulate(&mut self, frame_delta: F) -> Result<StepBudget, PhysicsError> {
        if !frame_delta.is_finite() || frame_delta < F::zero() {
            return Err(PhysicsError::InvalidFrameDelta { delta: frame_delta.to_f64() });
        }

        self.leftover = self.leftover + frame_delta;
        let mut substeps = 0;
        while self.leftover > self.step {
            if self.max_substeps.is_some_and(|max| substeps >= max) {
                let dropped = self.discard_backlog();
                tracing::warn!(substeps, dropped, "frame exceeded substep cap");
                return Ok(StepBudget { substeps, dropped });
            }
            self.leftover = self.leftover - self.step;
            substeps += 1;
        }
        Ok(StepBudget { substeps, dropped: 0 })
    }

    /// Drop every whole step still owed, leaving less than one step behind.
    fn discard_backlog(&mut self) -> usize {
        let whole = (self.leftover / self.step).floor();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let mut dropped = whole.to_f64() as usize;
        self.leftover = self.leftover - whole * self.step;
        while self.leftover >= self.step {
            self.leftover = self.leftover - self.step;
            dropped += 1;
        }
        if self.leftover < F::zero() {
            self.leftover = F::zero();
        }
        dropped
    }

    /// Forget any accumulated time.
    pub fn reset(&mut self) {
        self.leftover = F::zero();
    }
}
