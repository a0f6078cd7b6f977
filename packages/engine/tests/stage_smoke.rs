use celebration_physics::{Stage, StageConfig, INSTANCE_STRIDE};

#[test]
fn stage_smoke_runs_and_tears_down() {
    let mut stage = Stage::with_seed(1024.0, 768.0, 1);
    assert!(stage.is_alive());
    assert!(!stage.is_inert());
    assert_eq!(stage.wall_count(), 4);
    assert_eq!(stage.body_count(), 8 + 3 + 12 + 4);

    stage.pointer_down(10.0, 10.0);
    stage.pointer_move(20.0, 20.0);
    stage.pointer_up();
    stage.resize(800.0, 600.0);
    for _ in 0..120 {
        assert!(stage.tick());
    }
    assert_eq!(stage.frame(), 120);
    assert_eq!(stage.wall_count(), 4);

    // walls are not drawn
    assert_eq!(stage.instance_stride(), INSTANCE_STRIDE);
    assert_eq!(stage.instances_len(), (8 + 3 + 12) * INSTANCE_STRIDE);
    assert!(!stage.instances_ptr().is_null());

    let instances = stage.core().instances();
    for record in instances.chunks(INSTANCE_STRIDE) {
        let (x, y, hw, hh) = (record[0], record[1], record[2], record[3]);
        assert!(x - hw >= -1e-3 && x + hw <= 800.0 + 1e-3);
        assert!(y - hh >= -1e-3 && y + hh <= 600.0 + 1e-3);
    }

    assert!(stage.teardown());
    assert!(!stage.teardown());
    assert!(!stage.is_alive());
    assert!(!stage.tick());
    assert_eq!(stage.advance(16.0), 0);
    assert_eq!(stage.body_count(), 0);
}

#[test]
fn stage_from_config_json_applies_overlay() {
    let json = r#"{"gravity": {"y": 0.8}, "balloons": {"count": 10}, "cakes": {"count": 0}, "notes": {"count": 15}}"#;
    let config = StageConfig::from_json(json).expect("overlay parses");
    assert_eq!(config.viewport.width, 1024.0);
    assert_eq!(config.notes.width, 60.0);

    let Ok(mut stage) = Stage::from_config_json(json, 3) else {
        panic!("valid config rejected");
    };
    assert_eq!(stage.body_count(), 10 + 15 + 4);
    for _ in 0..300 {
        stage.tick();
    }
    assert_eq!(stage.frame(), 300);
}

#[test]
fn zero_sized_stage_is_inert() {
    let mut stage = Stage::with_seed(0.0, 0.0, 1);
    assert!(stage.is_inert());
    assert_eq!(stage.body_count(), 0);
    assert!(!stage.tick());
    assert!(!stage.teardown());
}
