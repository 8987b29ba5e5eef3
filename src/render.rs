//! Seams to the rendering/windowing collaborator and the frame loop.
//!
//! The crate draws nothing itself. Once per rendered frame it pulls timing
//! from a [`FrameSource`], runs the due substeps, and hands a
//! [`FrameSnapshot`] to a [`FrameSink`]. [`HeadlessClock`] stands in for a
//! window when running without one.

use crate::config::DangleConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::observer::StepObserver;
use crate::simulation::{Simulation, SimulationState};
use crate::vec::Vec3;
use serde::Serialize;

pub type Rgb = [f32; 3];

pub const OBSTACLE_COLOR: Rgb = [1.0, 0.0, 0.0];

/// Blue shading toward cyan down the chain.
pub fn particle_color(index: usize) -> Rgb {
    [0.0, 0.1 * index as f32, 1.0]
}

/// A sphere to draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SphereInstance<F: Float> {
    pub center: Vec3<F>,
    pub radius: F,
    pub color: Rgb,
}

/// Everything drawn for one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameSnapshot<F: Float> {
    pub particles: Vec<SphereInstance<F>>,
    pub obstacle: SphereInstance<F>,
}

impl<F: Float> FrameSnapshot<F> {
    pub fn capture(state: &SimulationState<F>, config: &DangleConfig<F>) -> Self {
        let particles = state
            .chain
            .particles()
            .iter()
            .enumerate()
            .map(|(i, p)| SphereInstance {
                center: p.pos,
                radius: config.particle_radius,
                color: particle_color(i),
            })
            .collect();
        FrameSnapshot {
            particles,
            obstacle: SphereInstance {
                center: state.obstacle.position,
                radius: state.obstacle.radius,
                color: OBSTACLE_COLOR,
            },
        }
    }
}

/// Clock readings for one rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTiming<F: Float> {
    /// Seconds since the application started.
    pub global_time: f64,
    /// Seconds since the previous frame.
    pub delta: F,
}

/// Where frame timing comes from.
pub trait FrameSource<F: Float> {
    /// Timing for the next frame, or `None` once the application should close.
    fn next_frame(&mut self) -> Option<FrameTiming<F>>;
}

/// Where finished frames go.
pub trait FrameSink<F: Float> {
    fn present(&mut self, frame: &FrameSnapshot<F>);
}

impl<F: Float, T: FnMut(&FrameSnapshot<F>)> FrameSink<F> for T {
    fn present(&mut self, frame: &FrameSnapshot<F>) {
        self(frame);
    }
}

/// A frame source replaying a fixed list of deltas, with no window behind it.
#[derive(Clone, Debug)]
pub struct HeadlessClock<F: Float> {
    deltas: std::vec::IntoIter<F>,
    global_time: f64,
}

impl<F: Float> HeadlessClock<F> {
    /// `frames` frames of `delta` seconds each.
    pub fn fixed_rate(delta: F, frames: usize) -> Self {
        Self::scripted(vec![delta; frames])
    }

    pub fn scripted(deltas: impl IntoIterator<Item = F>) -> Self {
        HeadlessClock {
            deltas: deltas.into_iter().collect::<Vec<_>>().into_iter(),
            global_time: 0.0,
        }
    }
}

impl<F: Float> FrameSource<F> for HeadlessClock<F> {
    fn next_frame(&mut self) -> Option<FrameTiming<F>> {
        let delta = self.deltas.next()?;
        self.global_time += delta.to_f64();
        Some(FrameTiming { global_time: self.global_time, delta })
    }
}

/// Keeps every presented frame.
#[derive(Debug)]
pub struct RecordingSink<F: Float> {
    pub frames: Vec<FrameSnapshot<F>>,
}

impl<F: Float> RecordingSink<F> {
    pub fn new() -> Self {
        RecordingSink { frames: Vec::new() }
    }
}

impl<F: Float> Default for RecordingSink<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> FrameSink<F> for RecordingSink<F> {
    fn present(&mut self, frame: &FrameSnapshot<F>) {
        self.frames.push(frame.clone());
    }
}

/// Totals for a [`run_frames`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub substeps: u64,
}

/// Drive `sim` until `source` runs dry, presenting one snapshot per frame.
///
/// Shutdown is checked once per frame, never between substeps.
pub fn run_frames<F, S, K, O>(
    sim: &mut Simulation<F>,
    source: &mut S,
    sink: &mut K,
    observer: &mut O,
) -> Result<RunSummary, PhysicsError>
where
    F: Float,
    S: FrameSource<F>,
    K: FrameSink<F>,
    O: StepObserver,
{
    let mut summary = RunSummary::default();
    while let Some(timing) = source.next_frame() {
        let substeps = sim.frame(timing.delta, timing.global_time, observer)?;
        sink.present(&sim.snapshot());
        summary.frames += 1;
        summary.substeps += substeps as u64;
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_follow_index() {
        assert_eq!(particle_color(0), [0.0, 0.0, 1.0]);
        assert!((particle_color(10)[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn headless_clock_accumulates_time() {
        let mut clock = HeadlessClock::scripted([0.25f32, 0.5]);
        let a = clock.next_frame().unwrap();
        let b = clock.next_frame().unwrap();
        assert_eq!(a.global_time, 0.25);
        assert_eq!(b.global_time, 0.75);
        assert_eq!(b.delta, 0.5);
        assert!(clock.next_frame().is_none());
    }

    #[test]
    fn snapshot_carries_radii_and_colors() {
        let config: DangleConfig<f32> = DangleConfig::new();
        let state = SimulationState::new(&config).unwrap();
        let snap = FrameSnapshot::capture(&state, &config);
        assert_eq!(snap.particles.len(), 11);
        assert!(snap.particles.iter().all(|s| s.radius == 0.5));
        assert_eq!(snap.particles[3].color, particle_color(3));
        assert_eq!(snap.obstacle.radius, 2.0);
        assert_eq!(snap.obstacle.color, OBSTACLE_COLOR);
        assert_eq!(snap.obstacle.center, Vec3::new(0.2, 0.0, -3.0));
    }
}
