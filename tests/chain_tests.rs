use dangle::{Chain, DangleConfig, PhysicsError, Vec3};

#[test]
fn default_chain_layout() {
    let config: DangleConfig<f32> = DangleConfig::new();
    let chain = Chain::from_config(&config).unwrap();
    assert_eq!(chain.len(), 11);
    assert_eq!(chain.link_count(), 10);

    for (i, p) in chain.particles().iter().enumerate() {
        assert_eq!(p.pos, Vec3::new(0.0, 2.0 - i as f32, 0.0));
        assert_eq!(p.vel, Vec3::zero());
    }
}

#[test]
fn rest_lengths_come_from_initial_positions() {
    let chain: Chain<f32> = Chain::from_positions(vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.0, 4.0, 0.0),
        Vec3::new(3.0, 4.0, -2.0),
    ])
    .unwrap();
    assert_eq!(chain.rest_length(0).unwrap(), 5.0);
    assert_eq!(chain.rest_length(1).unwrap(), 2.0);
    assert!(chain.max_link_error() < 1e-6);
}

#[test]
fn too_short_chain_is_rejected() {
    let err = Chain::<f32>::from_positions(vec![Vec3::zero()]).unwrap_err();
    assert_eq!(err, PhysicsError::InvalidChainLength { count: 1 });

    let config: DangleConfig<f32> = DangleConfig::new().with_chain_length(0);
    assert!(Chain::from_config(&config).is_err());
}

#[test]
fn non_finite_initial_positions_are_rejected() {
    // Particle 4 sits at 2 - 4e38, which overflows f32.
    let err = Chain::<f32>::hanging(Vec3::new(0.0, 2.0, 0.0), 1.0e38, 6).unwrap_err();
    assert_eq!(err, PhysicsError::NonFiniteState { index: 4 });
}

#[test]
fn out_of_bounds_access_is_an_error() {
    let config: DangleConfig<f32> = DangleConfig::new();
    let chain = Chain::from_config(&config).unwrap();
    assert_eq!(
        chain.particle(11).unwrap_err(),
        PhysicsError::ParticleOutOfBounds { index: 11, count: 11 }
    );
    assert!(chain.rest_length(10).is_err());
    assert!(chain.particle(10).is_ok());
}
