//! One fixed substep of the chain: forces, anchor pin, relaxation, commit.

use crate::config::DangleConfig;
use crate::constraint::DistanceConstraint;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::forces::apply_external_forces;
use crate::obstacle::Obstacle;
use crate::observer::{Degeneracy, StepObserver};
use crate::simulation::SimulationState;
use crate::vec::Vec3;

/// Advance `state` by one substep of duration `dt`.
///
/// `global_time` drives the wind and the obstacle path. It is the clock the
/// frame was sampled at, not an accumulated substep time.
///
/// Nothing is written back unless every candidate position is finite, so a
/// failed substep leaves `state` exactly as it was.
pub fn substep<F: Float, O: StepObserver>(
    state: &mut SimulationState<F>,
    config: &DangleConfig<F>,
    dt: F,
    global_time: f64,
    observer: &mut O,
) -> Result<(), PhysicsError> {
    let t = F::from_f64(global_time);
    let (particles, links, candidates) = state.chain.solver_parts();

    for (i, p) in particles.iter().enumerate().skip(1) {
        let vel = apply_external_forces(p.vel, i, dt, t, config);
        candidates[i] = p.pos + vel.scale(dt);
    }
    observer.on_integrate();

    candidates[0] = config.anchor;
    let mut obstacle = state.obstacle;
    obstacle.track(&config.obstacle.path, t);

    relax(
        candidates,
        links,
        &obstacle,
        config.particle_radius,
        config.constraint_iterations,
        observer,
    );

    if let Some(index) = candidates.iter().position(|c| !c.is_finite()) {
        return Err(PhysicsError::NonFiniteState { index });
    }

    for (p, &c) in particles.iter_mut().zip(candidates.iter()) {
        p.commit(c, dt);
    }
    state.obstacle = obstacle;
    observer.on_step_complete();
    Ok(())
}

/// Gauss-Seidel relaxation of the chain against its links and the obstacle.
///
/// Each sweep walks the links from the anchor to the tail. For link `i` the
/// far particle is first put back at rest length, then pushed out of the
/// obstacle; link `i + 1` already sees both corrections. Sweep order is part
/// of the result: solving links in another order converges differently.
pub fn relax<F: Float, O: StepObserver>(
    candidates: &mut [Vec3<F>],
    links: &[DistanceConstraint<F>],
    obstacle: &Obstacle<F>,
    particle_radius: F,
    iterations: usize,
    observer: &mut O,
) {
    for iteration in 0..iterations {
        for link in links {
            if link.solve(candidates).is_err() {
                observer.on_degenerate(link.b, Degeneracy::Link);
            }
            match obstacle.push_out(&mut candidates[link.b], particle_radius) {
                Ok(Some(depth)) => observer.on_contact(link.b, depth.to_f64()),
                Ok(None) => {}
                Err(_) => observer.on_degenerate(link.b, Degeneracy::ObstacleCenter),
            }
        }
        observer.on_constraint_iteration(iteration);
    }
}
