use rand::Rng;

use crate::systems::forces::apply_gust;

use super::events::StageEvent;
use super::StageCore;

/// Drain every queued event. Returns the number handled.
pub(super) fn drain_events<R: Rng>(stage: &mut StageCore<R>) -> u32 {
    let mut handled = 0;
    while let Some(event) = stage.events.pop() {
        match event {
            StageEvent::Resize { width, height } => on_resize(stage, width, height),
            StageEvent::Scroll => on_scroll(stage),
            StageEvent::PointerDown(at) => {
                stage.pointer.press(&stage.world, at);
            }
            StageEvent::PointerMove(at) => stage.pointer.move_to(at),
            StageEvent::PointerUp => {
                stage.pointer.release();
            }
        }
        handled += 1;
    }
    handled
}

/// Swap the walls for the new size and resize the surface.
fn on_resize<R: Rng>(stage: &mut StageCore<R>, width: f32, height: f32) {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        console_warn!("ignoring resize to {}x{}", width, height);
        return;
    }
    stage.world.replace_walls(width, height);
    stage.viewport = (width, height);
    if let Some(surface) = stage.surface.as_mut() {
        surface.resize(width, height);
    }
    if stage.perf_enabled {
        stage.perf_stats.wall_rebuilds += 1;
    }
}

/// One-shot lift for every decoration; nothing persists past this tick.
fn on_scroll<R: Rng>(stage: &mut StageCore<R>) {
    let pushed = apply_gust(&mut stage.rng, stage.world.decorations_mut(), &stage.config.forcing);
    if stage.perf_enabled && pushed > 0 {
        stage.perf_stats.gusts += 1;
    }
}
