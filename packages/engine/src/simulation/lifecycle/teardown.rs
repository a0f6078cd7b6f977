use rand::Rng;

use super::{Lifecycle, StageCore};

/// Running -> TornDown. The lifecycle flips first so nothing queued behind
/// this call can tick or paint, then state is released.
///
/// Returns false for an inert or already torn-down stage.
pub(super) fn teardown<R: Rng>(stage: &mut StageCore<R>) -> bool {
    let was_running = stage.lifecycle == Lifecycle::Running;
    stage.lifecycle = Lifecycle::TornDown;
    if !was_running {
        return false;
    }

    stage.events.clear();
    stage.clock.reset();
    stage.pointer.release();
    stage.world.clear();
    stage.instances.clear();
    stage.instance_count = 0;
    if let Some(mut surface) = stage.surface.take() {
        surface.release();
    }
    console_log!("celebration stage torn down after {} ticks", stage.frame);
    true
}
