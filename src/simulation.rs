//! Owned simulation state and the per-frame driver around it.

use crate::chain::Chain;
use crate::config::DangleConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::obstacle::Obstacle;
use crate::observer::StepObserver;
use crate::render::FrameSnapshot;
use crate::solver;
use crate::stepper::FixedStepper;

/// Everything a substep mutates: the chain and the obstacle.
#[derive(Clone, Debug)]
pub struct SimulationState<F: Float> {
    pub chain: Chain<F>,
    pub obstacle: Obstacle<F>,
}

impl<F: Float> SimulationState<F> {
    /// Initial configuration: chain at rest, obstacle at its start position.
    pub fn new(config: &DangleConfig<F>) -> Result<Self, PhysicsError> {
        Ok(SimulationState {
            chain: Chain::from_config(config)?,
            obstacle: Obstacle::from_config(&config.obstacle),
        })
    }
}

/// A self-contained dangle simulation.
///
/// Owns the state, its configuration, the fixed-step accumulator and the last
/// sampled global clock. Independent instances never share anything.
#[derive(Clone, Debug)]
pub struct Simulation<F: Float> {
    config: DangleConfig<F>,
    state: SimulationState<F>,
    stepper: FixedStepper<F>,
    clock: f64,
}

impl<F: Float> Simulation<F> {
    pub fn new(config: DangleConfig<F>) -> Result<Self, PhysicsError> {
        config.validate()?;
        let state = SimulationState::new(&config)?;
        let stepper = FixedStepper::from_config(&config)?;
        Ok(Simulation { config, state, stepper, clock: 0.0 })
    }

    pub fn config(&self) -> &DangleConfig<F> {
        &self.config
    }

    pub fn state(&self) -> &SimulationState<F> {
        &self.state
    }

    /// Global time of the last frame.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Frame time waiting for the next substep.
    pub fn leftover(&self) -> F {
        self.stepper.leftover()
    }

    /// Run one rendered frame against an external clock.
    ///
    /// Every substep of the frame sees the same `global_time`. Returns the
    /// number of substeps run.
    pub fn frame<O: StepObserver>(
        &mut self,
        frame_delta: F,
        global_time: f64,
        observer: &mut O,
    ) -> Result<usize, PhysicsError> {
        let budget = self.stepper.accumulate(frame_delta)?;
        self.clock = global_time;
        if budget.dropped > 0 {
            observer.on_substeps_dropped(budget.dropped);
        }
        for _ in 0..budget.substeps {
            self.substep(global_time, observer)?;
        }
        observer.on_frame_complete(budget.substeps);
        Ok(budget.substeps)
    }

    /// Run one frame, advancing the internal clock by `frame_delta`.
    pub fn advance<O: StepObserver>(
        &mut self,
        frame_delta: F,
        observer: &mut O,
    ) -> Result<usize, PhysicsError> {
        let global_time = self.clock + frame_delta.to_f64();
        self.frame(frame_delta, global_time, observer)
    }

    /// Run exactly one fixed substep at `global_time`, bypassing the accumulator.
    pub fn substep<O: StepObserver>(
        &mut self,
        global_time: f64,
        observer: &mut O,
    ) -> Result<(), PhysicsError> {
        solver::substep(
            &mut self.state,
            &self.config,
            self.config.fixed_step_seconds,
            global_time,
            observer,
        )
    }

    /// Back to the initial configuration, clock and accumulator included.
    pub fn reset(&mut self) -> Result<(), PhysicsError> {
        self.state = SimulationState::new(&self.config)?;
        self.stepper.reset();
        self.clock = 0.0;
        Ok(())
    }

    /// What the renderer should draw for the current state.
    pub fn snapshot(&self) -> FrameSnapshot<F> {
        FrameSnapshot::capture(&self.state, &self.config)
    }
}
