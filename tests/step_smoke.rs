use gravita_engine::World;

#[test]
fn perf_smoke_step() {
    let mut world = World::new(800, 600);
    world.enable_perf_metrics(true);
    world.spawn_circle("ball", 350.0, 200.0, 50.0, 0.1);
    world.set_gravity(0.0, 9.8);
    for _ in 0..10 {
        world.step(0.016);
    }
    let stats = world.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), 1);
    assert_eq!(stats.bodies_processed(), 1);
    assert_eq!(world.frame(), 10);
}

#[test]
fn gravity_pulls_a_spawned_body_down() {
    let mut world = World::new(800, 600);
    world.spawn_circle("ball", 350.0, 200.0, 50.0, 0.1);
    world.set_gravity(0.0, 9.8);

    for _ in 0..5 {
        world.step(0.016);
    }

    assert!(world.body_velocity_y("ball") > 0.0);
    assert!(world.body_position_y("ball") > 200.0);
}
