use waterline::{StepStats, SurfaceField, WaterConfig, WaterSimulation};

#[test]
fn center_impulse_sets_epicenter_and_attenuates_within_width() {
    let mut surface: SurfaceField<f32> = SurfaceField::new(800.0, 100, 235.0, 1.8, 2.4, 9.0);
    let force = 50.0;
    let width = 100.0;

    let epicenter = surface.apply_impulse(400.0, force, width);

    assert_eq!(epicenter, surface.nearest_joint(0.0));
    assert_eq!(surface.joint(epicenter).velocity, -force);

    let center_x = surface.joint(epicenter).x();
    let mut touched = 0;
    for (i, joint) in surface.joints().iter().enumerate() {
        if i == epicenter {
            continue;
        }
        let distance = (joint.x() - center_x).abs();
        if distance < width {
            touched += 1;
            let expected = distance / width * -force;
            assert!(
                (joint.velocity - expected).abs() < 1e-4,
                "joint {} at distance {} should have {}, got {}",
                i, distance, expected, joint.velocity,
            );
        } else {
            assert_eq!(joint.velocity, 0.0, "joint {} beyond the width must be untouched", i);
        }
    }
    assert!(touched >= 20, "expected a band of joints around the epicenter, got {}", touched);
}

#[test]
fn attenuation_grows_with_distance() {
    let mut surface: SurfaceField<f32> = SurfaceField::new(800.0, 100, 235.0, 1.8, 2.4, 9.0);
    let epicenter = surface.apply_impulse(400.0, 50.0, 100.0);

    let near = surface.joint(epicenter + 1).velocity;
    let far = surface.joint(epicenter + 5).velocity;
    assert!(far < near, "farther joint should get more of the force: near {} far {}", near, far);
}

#[test]
fn impulse_overwrites_velocity() {
    let mut surface: SurfaceField<f32> = SurfaceField::new(10.0, 3, 0.0, 1.8, 2.4, 9.0);
    surface.joint_mut(1).velocity = 7.0;
    let epicenter = surface.apply_impulse(5.0, 3.0, 0.0);
    assert_eq!(epicenter, 1);
    assert_eq!(surface.joint(1).velocity, -3.0);
}

#[test]
fn force_only_splash_hits_one_joint() {
    let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 100, 235.0);
    sim.splash(400.0, 50.0);

    let moving: Vec<usize> = sim
        .joints()
        .iter()
        .enumerate()
        .filter(|(_, j)| j.velocity != 0.0)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(moving.len(), 1);
    assert_eq!(sim.joints()[moving[0]].velocity, -50.0);
    // Droplets still fly.
    assert_eq!(sim.droplet_pool().active_count(), 10);
}

#[test]
fn tie_resolves_to_first_joint() {
    let mut surface: SurfaceField<f32> = SurfaceField::new(4.0, 3, 0.0, 1.8, 2.4, 9.0);
    // World x 1 is local x -1, equidistant from joints 0 and 1.
    let epicenter = surface.apply_impulse(1.0, 10.0, 0.0);
    assert_eq!(epicenter, 0);
    assert_eq!(surface.joint(0).velocity, -10.0);
    assert_eq!(surface.joint(1).velocity, 0.0);
}

#[test]
fn droplet_count_follows_force_and_density() {
    let cases: [(f32, f32, usize); 6] = [
        (50.0, 1.0, 10),
        (100.0, 1.0, 20),
        (30.0, 0.5, 3),
        (4.0, 1.0, 0),
        (0.0, 1.0, 0),
        (-50.0, 1.0, 0),
    ];

    for (force, density, expected) in cases {
        let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 100, 235.0);
        sim.set_tuning(WaterConfig::new().with_droplets_density(density)).unwrap();
        let spawned = sim.splash_with_width(400.0, force, 20.0);
        assert_eq!(spawned, expected, "force {} density {}", force, density);
        assert_eq!(sim.droplet_pool().active_count(), expected);
    }
}

#[test]
fn droplets_start_at_impact_within_velocity_bounds() {
    let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 100, 235.0).with_seed(7);
    sim.splash_with_width(600.0, 100.0, 20.0);

    assert_eq!(sim.droplet_pool().active_count(), 20);
    for (_, droplet) in sim.droplet_pool().iter() {
        assert_eq!(droplet.position.x, 200.0);
        assert_eq!(droplet.position.y, 235.0);
        assert_eq!(droplet.scale, 3.0);
        assert!(droplet.velocity.x >= -350.0 && droplet.velocity.x <= 350.0, "vx {}", droplet.velocity.x);
        assert!(droplet.velocity.y >= 200.0 && droplet.velocity.y <= 500.0, "vy {}", droplet.velocity.y);
    }
}

#[test]
fn droplet_velocity_scales_with_force_and_droplets_force() {
    let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 100, 235.0);
    sim.set_tuning(WaterConfig::new().with_droplets_force(2.0)).unwrap();
    sim.splash(400.0, 50.0);

    // k = 50 / 100 * 2 = 1, so bounds are unscaled.
    for (_, droplet) in sim.droplet_pool().iter() {
        assert!(droplet.velocity.y >= 200.0 && droplet.velocity.y <= 500.0, "vy {}", droplet.velocity.y);
    }
}

#[test]
fn splash_is_observed() {
    let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 100, 235.0);
    let mut stats = StepStats::default();
    sim.splash_observed(400.0, 50.0, 100.0, &mut stats);
    assert_eq!(stats.splashes, 1);
    assert_eq!(stats.droplets_spawned, 10);
}
