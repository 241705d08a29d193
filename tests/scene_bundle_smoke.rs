use gravita_engine::World;

#[test]
fn scene_bundle_smoke_load() {
    let mut world = World::new(800, 600);

    let json = r#"{
        "gravity": [0.0, 9.8],
        "density": 1.5,
        "bodies": [
            {"name": "ball", "shape": "circle", "position": [100.0, 100.0],
             "radius": 25.0, "mass": 0.5},
            {"name": "box", "shape": "rect", "position": [300.0, 200.0],
             "vertices": [[-30.0, -30.0], [30.0, -30.0], [30.0, 30.0], [-30.0, 30.0]],
             "radius": 30.0, "mass": 1.0, "restitution": -0.6}
        ]
    }"#;

    assert!(world.load_scene_bundle(json.to_string()).is_ok());
    assert_eq!(world.body_count(), 2);
    assert!((world.gravity_y() - 9.8).abs() < 1e-6);
    assert!((world.body_restitution("box") - (-0.6)).abs() < 1e-6);

    assert_eq!(world.body_world_vertices("box").len(), 8);
    assert!(world.body_world_vertices("ball").is_empty());

    let snapshot = world.snapshot_json();
    assert!(snapshot.contains("\"ball\""));
    assert!(snapshot.contains("\"box\""));
}

#[test]
fn demo_scene_smoke_boot() {
    let mut world = World::new(800, 600);
    assert!(world.load_demo_scene().is_ok());
    assert_eq!(world.body_count(), 1);
    assert!((world.density() - 10.0).abs() < 1e-6);

    world.step(0.016);

    assert!(world.body_position_x("OrangeBox").is_finite());
    assert!(world.body_position_x("NoSuchBody").is_nan());
}
