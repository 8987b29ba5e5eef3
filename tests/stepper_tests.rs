use dangle::{DangleConfig, NoOpStepObserver, PhysicsError, Simulation, TracingObserver, Vec3};

// Binary-exact step so frame-rate comparisons see no rounding in the accumulator.
const EXACT_STEP: f32 = 1.0 / 64.0;

fn run(config: DangleConfig<f32>, deltas: &[f32]) -> (usize, Vec<Vec3<f32>>) {
    let mut sim = Simulation::new(config).unwrap();
    let mut substeps = 0;
    for &d in deltas {
        substeps += sim.advance(d, &mut NoOpStepObserver).unwrap();
    }
    (substeps, sim.state().chain.positions())
}

fn max_deviation(a: &[Vec3<f32>], b: &[Vec3<f32>]) -> f32 {
    a.iter()
        .zip(b)
        .map(|(p, q)| (p.x - q.x).abs().max((p.y - q.y).abs()).max((p.z - q.z).abs()))
        .fold(0.0, f32::max)
}

#[test]
fn zero_delta_is_a_no_op() {
    let mut sim: Simulation<f32> = Simulation::new(DangleConfig::new()).unwrap();
    for _ in 0..10 {
        sim.advance(0.021, &mut NoOpStepObserver).unwrap();
    }
    let particles = sim.state().chain.particles().to_vec();
    let obstacle = sim.state().obstacle;
    let leftover = sim.leftover();
    let clock = sim.clock();

    assert_eq!(sim.advance(0.0, &mut NoOpStepObserver).unwrap(), 0);
    assert_eq!(sim.state().chain.particles(), &particles[..]);
    assert_eq!(sim.state().obstacle, obstacle);
    assert_eq!(sim.leftover(), leftover);
    assert_eq!(sim.clock(), clock);
}

#[test]
fn stall_is_split_into_fixed_substeps() {
    let config = DangleConfig::new().with_fixed_step(EXACT_STEP);
    let mut sim = Simulation::new(config).unwrap();
    let mut observer = TracingObserver::new();
    // Half a second in one frame: 32 steps owed, the last one carried.
    let n = sim.advance(0.5, &mut observer).unwrap();
    assert_eq!(n, 31);
    assert_eq!(observer.substeps, 31);
    assert_eq!(sim.leftover(), EXACT_STEP);
}

#[test]
fn capped_stall_drops_the_backlog() {
    let config = DangleConfig::new()
        .with_fixed_step(EXACT_STEP)
        .with_max_substeps(Some(5));
    let mut sim = Simulation::new(config).unwrap();
    let mut observer = TracingObserver::new();
    let n = sim.advance(0.5, &mut observer).unwrap();
    assert_eq!(n, 5);
    assert_eq!(observer.substeps, 5);
    assert_eq!(observer.dropped, 27);
    assert!(sim.leftover() < EXACT_STEP);
}

#[test]
fn frame_rate_independent_over_a_short_run() {
    let config = DangleConfig::new().with_fixed_step(EXACT_STEP);
    let (n30, p30) = run(config.clone(), &[2.0 * EXACT_STEP; 2]);
    let (n60, p60) = run(config, &[EXACT_STEP; 4]);
    assert_eq!(n30, n60);
    let dev = max_deviation(&p30, &p60);
    assert!(dev < 0.01, "short run deviation {dev}");
}

#[test]
fn frame_rate_independent_over_a_long_run() {
    let config = DangleConfig::new().with_fixed_step(EXACT_STEP);
    let (n30, p30) = run(config.clone(), &[2.0 * EXACT_STEP; 60]);
    let (n60, p60) = run(config, &[EXACT_STEP; 120]);
    assert_eq!(n30, n60);
    let dev = max_deviation(&p30, &p60);
    assert!(dev < 0.1, "long run deviation {dev}");
}

#[test]
fn default_step_counts_agree_within_one() {
    let (n30, _) = run(DangleConfig::new(), &[1.0 / 30.0; 30]);
    let (n60, _) = run(DangleConfig::new(), &[1.0 / 60.0; 60]);
    assert!(n30.abs_diff(n60) <= 1, "{n30} vs {n60} substeps");
}

#[test]
fn external_clock_is_shared_by_all_substeps_of_a_frame() {
    let config = DangleConfig::new().with_fixed_step(EXACT_STEP);
    let mut sim = Simulation::new(config).unwrap();
    sim.frame(4.0 * EXACT_STEP, 12.5, &mut NoOpStepObserver).unwrap();
    assert_eq!(sim.clock(), 12.5);
    let expected_x = (0.1f32 * 12.5).cos() * 15.0;
    assert!((sim.state().obstacle.position.x - expected_x).abs() < 1e-5);
}

#[test]
fn invalid_delta_leaves_simulation_untouched() {
    let mut sim: Simulation<f32> = Simulation::new(DangleConfig::new()).unwrap();
    sim.advance(0.05, &mut NoOpStepObserver).unwrap();
    let particles = sim.state().chain.particles().to_vec();
    let clock = sim.clock();

    let err = sim.advance(-0.01, &mut NoOpStepObserver).unwrap_err();
    assert!(matches!(err, PhysicsError::InvalidFrameDelta { .. }));
    assert!(sim.advance(f32::NAN, &mut NoOpStepObserver).is_err());
    assert_eq!(sim.state().chain.particles(), &particles[..]);
    assert_eq!(sim.clock(), clock);
}

#[test]
fn reset_restores_initial_configuration() {
    let mut sim: Simulation<f32> = Simulation::new(DangleConfig::new()).unwrap();
    let initial = sim.state().chain.particles().to_vec();
    for _ in 0..30 {
        sim.advance(1.0 / 30.0, &mut NoOpStepObserver).unwrap();
    }
    assert_ne!(sim.state().chain.particles(), &initial[..]);

    sim.reset().unwrap();
    assert_eq!(sim.state().chain.particles(), &initial[..]);
    assert_eq!(sim.clock(), 0.0);
    assert_eq!(sim.leftover(), 0.0);
}
