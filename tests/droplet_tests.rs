use waterline::{DropletPool, PhysicsConstants, Vec2, WaterSimulation};

const DT: f32 = 1.0 / 500.0;
const GRAVITY: f32 = -1200.0;

#[test]
fn spawn_grows_then_reuses() {
    let mut pool: DropletPool<f32> = DropletPool::new();
    let a = pool.spawn(Vec2::new(0.0, 0.0), Vec2::zero(), 3.0);
    let b = pool.spawn(Vec2::new(1.0, 0.0), Vec2::zero(), 3.0);
    assert_ne!(a, b);
    assert_eq!(pool.capacity(), 2);
    assert_eq!(pool.active_count(), 2);

    assert!(pool.remove(a));
    assert_eq!(pool.active_count(), 1);
    assert_eq!(pool.pooled_count(), 1);

    let c = pool.spawn(Vec2::new(5.0, 6.0), Vec2::new(1.0, 2.0), 2.0);
    assert_eq!(c, a, "spawn should reuse the pooled slot");
    assert_eq!(pool.capacity(), 2);
    assert_eq!(pool.pooled_count(), 0);

    let reused = pool.get(c).unwrap();
    assert_eq!(reused.position, Vec2::new(5.0, 6.0));
    assert_eq!(reused.velocity, Vec2::new(1.0, 2.0));
    assert_eq!(reused.scale, 2.0);
}

#[test]
fn removing_twice_is_harmless() {
    let mut pool: DropletPool<f32> = DropletPool::new();
    let id = pool.spawn(Vec2::zero(), Vec2::zero(), 1.0);
    assert!(pool.remove(id));
    assert!(!pool.remove(id));
    assert_eq!(pool.pooled_count(), 1);
    assert!(pool.get(id).is_none());
}

#[test]
fn droplets_fall_under_gravity() {
    let mut pool: DropletPool<f32> = DropletPool::new();
    let id = pool.spawn(Vec2::new(0.0, 300.0), Vec2::new(10.0, 0.0), 1.0);

    pool.update(0.01, GRAVITY, 1.0, 0.0);

    let droplet = pool.get(id).unwrap();
    assert!((droplet.velocity.y + 12.0).abs() < 1e-4);
    assert!((droplet.position.y - 299.88).abs() < 1e-3);
    assert!((droplet.position.x - 0.1).abs() < 1e-5);
}

#[test]
fn droplet_culled_on_step_crossing_threshold() {
    // surface 235, margin 30, scale 3 * radius 1: culled once y < 202.
    let cull_below = 235.0 - 30.0;
    let mut pool: DropletPool<f32> = DropletPool::new();
    let id = pool.spawn(Vec2::new(0.0, 210.0), Vec2::new(0.0, -500.0), 3.0);

    let mut last_y = 210.0;
    let mut culled_at = None;
    for step in 0..100 {
        let culled = pool.update(DT, GRAVITY, 1.0, cull_below);
        match pool.get(id) {
            Some(droplet) => {
                assert_eq!(culled, 0);
                assert!(droplet.position.y + 3.0 >= cull_below);
                last_y = droplet.position.y;
            }
            None => {
                assert_eq!(culled, 1);
                culled_at = Some(step);
                break;
            }
        }
    }

    assert!(culled_at.is_some(), "droplet should have been culled");
    assert!(last_y >= 202.0, "previous step was still above the threshold: {}", last_y);
    assert_eq!(pool.active_count(), 0);
    assert_eq!(pool.pooled_count(), 1);
}

#[test]
fn splash_cull_splash_reuses_slots() {
    let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 100, 235.0);
    sim.splash(400.0, 50.0);
    assert_eq!(sim.droplet_pool().active_count(), 10);

    for _ in 0..2000 {
        sim.update(DT);
    }
    assert_eq!(sim.droplet_pool().active_count(), 0, "every droplet should have fallen out");
    let capacity = sim.droplet_pool().capacity();
    assert_eq!(capacity, 10);

    sim.splash(400.0, 50.0);
    assert_eq!(sim.droplet_pool().active_count(), 10);
    assert_eq!(sim.droplet_pool().capacity(), capacity, "pool should not grow");
}

#[test]
fn cap_evicts_oldest_first() {
    let mut pool: DropletPool<f32> = DropletPool::with_max_active(Some(3));
    for i in 0..5 {
        pool.spawn(Vec2::new(i as f32, 0.0), Vec2::zero(), 1.0);
    }

    assert_eq!(pool.active_count(), 3);
    assert_eq!(pool.capacity(), 3);
    let xs: Vec<f32> = pool.iter().map(|(_, d)| d.position.x).collect();
    assert_eq!(xs, vec![2.0, 3.0, 4.0]);
}

#[test]
fn simulation_applies_droplet_cap() {
    let constants = PhysicsConstants::new().with_max_droplets(Some(15));
    let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 100, 235.0)
        .with_constants(constants)
        .unwrap();
    sim.splash(200.0, 100.0);
    sim.splash(600.0, 100.0);
    assert_eq!(sim.droplet_pool().active_count(), 15);
}

#[test]
fn unbounded_by_default() {
    let mut sim: WaterSimulation<f32> = WaterSimulation::new(800.0, 100, 235.0);
    for _ in 0..10 {
        sim.splash(400.0, 100.0);
    }
    assert_eq!(sim.droplet_pool().max_active(), None);
    assert_eq!(sim.droplet_pool().active_count(), 200);
}

#[test]
fn clear_pools_everything() {
    let mut pool: DropletPool<f64> = DropletPool::new();
    for _ in 0..4 {
        pool.spawn(Vec2::zero(), Vec2::zero(), 1.0);
    }
    pool.clear();
    assert_eq!(pool.active_count(), 0);
    assert_eq!(pool.pooled_count(), 4);
    assert_eq!(pool.iter().count(), 0);
}
