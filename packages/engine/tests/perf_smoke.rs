use celebration_physics::Stage;

#[test]
fn perf_smoke_advance() {
    let mut stage = Stage::with_seed(1280.0, 720.0, 9);
    stage.enable_perf_metrics(true);
    stage.scroll();
    let ticks = stage.advance(50.0);
    let stats = stage.get_perf_stats();
    assert_eq!(stats.ticks(), ticks);
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.paint_ms() >= 0.0);
    assert_eq!(stats.gusts(), 1);
    assert_eq!(stats.body_count(), 27);
}
