use rand::Rng;

use crate::systems::collision::{contain, resolve_all};
use crate::systems::forces::{apply_buoyancy, apply_gravity, apply_jitter, integrate};

use super::handlers::drain_events;
use super::render_extract::extract_instances;
use super::{PerfTimer, StageCore};

/// Contact passes per tick; two settles stacked bodies without visible jitter
const SOLVER_ITERATIONS: usize = 2;

pub(super) fn tick<R: Rng>(stage: &mut StageCore<R>) -> bool {
    if !stage.is_alive() {
        return false;
    }
    if stage.perf_enabled {
        stage.perf_stats.reset();
    }
    run_tick(stage);
    true
}

pub(super) fn advance<R: Rng>(stage: &mut StageCore<R>, elapsed_ms: f64) -> u32 {
    if !stage.is_alive() {
        return 0;
    }
    let perf_on = stage.perf_enabled;
    if perf_on {
        stage.perf_stats.reset();
    }

    let ticks = stage.clock.advance(elapsed_ms);
    let step_start = PerfTimer::maybe(perf_on);
    for _ in 0..ticks {
        run_tick(stage);
    }
    PerfTimer::lap(step_start, &mut stage.perf_stats.step_ms);

    // Simulation for this frame is done before anything is drawn
    paint(stage);
    ticks
}

pub(super) fn paint<R: Rng>(stage: &mut StageCore<R>) {
    if !stage.is_alive() {
        return;
    }
    let t0 = PerfTimer::maybe(stage.perf_enabled);
    stage.instance_count = extract_instances(stage.world.bodies(), &mut stage.instances);
    if let Some(surface) = stage.surface.as_mut() {
        surface.paint(stage.world.bodies());
    }
    PerfTimer::lap(t0, &mut stage.perf_stats.paint_ms);
}

fn run_tick<R: Rng>(stage: &mut StageCore<R>) {
    let perf_on = stage.perf_enabled;

    // === EVENTS ===
    let t0 = PerfTimer::maybe(perf_on);
    let handled = drain_events(stage);
    PerfTimer::lap(t0, &mut stage.perf_stats.events_ms);

    // === FORCES ===
    let t0 = PerfTimer::maybe(perf_on);
    let gravity = stage.world.gravity;
    for body in stage.world.decorations_mut() {
        apply_gravity(body, gravity);
    }
    let grabbed = stage.pointer.grabbed();
    let forcing = &stage.config.forcing;
    let jitter = apply_jitter(
        &mut stage.rng,
        stage.world.decorations_mut().filter(|b| Some(b.id) != grabbed),
        forcing,
    );
    let lifted = apply_buoyancy(&mut stage.rng, stage.world.decorations_mut(), forcing);
    stage.pointer.apply(&mut stage.world);
    for body in stage.world.decorations_mut() {
        integrate(body);
    }
    PerfTimer::lap(t0, &mut stage.perf_stats.forces_ms);

    // === CONTACTS ===
    let t0 = PerfTimer::maybe(perf_on);
    let mut contacts = 0;
    for _ in 0..SOLVER_ITERATIONS {
        contacts += resolve_all(stage.world.bodies_mut());
    }
    let clamped = match stage.world.interior() {
        Some((min, max)) => contain(stage.world.bodies_mut(), min, max),
        None => 0,
    };
    PerfTimer::lap(t0, &mut stage.perf_stats.collision_ms);

    stage.frame += 1;

    if perf_on {
        let stats = &mut stage.perf_stats;
        stats.ticks += 1;
        stats.events += handled;
        stats.contacts += contacts;
        stats.clamped += clamped;
        stats.jitter_impulses += jitter;
        stats.buoyancy_impulses += lifted;
        stats.body_count = stage.world.body_count() as u32;
    }
}
