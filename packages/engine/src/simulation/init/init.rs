use rand::Rng;

use crate::domain::{StageConfig, StageError, Vec2};
use crate::systems::roster::spawn_roster;
use crate::systems::{Pointer, World};

use super::events::EventQueue;
use super::fixed_step::FixedStep;
use super::perf_stats::PerfStats;
use super::surface::RenderSurface;
use super::{Lifecycle, StageCore};

pub(super) fn create_stage_core<R: Rng>(
    config: StageConfig,
    rng: R,
    surface: Result<Box<dyn RenderSurface>, StageError>,
) -> StageCore<R> {
    let mut stage = empty_stage(&config, rng);
    stage.config = config;

    let surface = match (stage.config.check(), surface) {
        (Ok(()), Ok(surface)) => surface,
        (Err(e), surface) => {
            // an already attached canvas must not outlive the failed mount
            if let Ok(mut surface) = surface {
                surface.release();
            }
            console_warn!("celebration stage is inert: {}", e);
            return stage;
        }
        (Ok(()), Err(e)) => {
            console_warn!("celebration stage is inert: {}", e);
            return stage;
        }
    };

    for warning in stage.config.validate() {
        console_warn!("stage config: {}", warning);
    }

    let (width, height) = (stage.config.viewport.width, stage.config.viewport.height);
    stage.world.replace_walls(width, height);
    let spawned = spawn_roster(&mut stage.world, &mut stage.rng, &stage.config);

    let mut surface = surface;
    surface.resize(width, height);
    stage.surface = Some(surface);
    stage.viewport = (width, height);
    stage.lifecycle = Lifecycle::Running;

    console_log!(
        "celebration stage mounted: {}x{}, {} bodies + {} walls",
        width,
        height,
        spawned.len(),
        stage.world.wall_count()
    );
    stage
}

/// Context with no bodies and no surface
fn empty_stage<R: Rng>(config: &StageConfig, rng: R) -> StageCore<R> {
    StageCore {
        config: StageConfig::default(),
        world: World::new(Vec2::new(config.gravity.x, config.gravity.y)),
        pointer: Pointer::new(config.pointer.stiffness),
        events: EventQueue::new(),
        clock: FixedStep::new(config.timing.ticks_per_second, config.timing.max_frame_ms),
        rng,
        lifecycle: Lifecycle::Inert,
        surface: None,
        viewport: (config.viewport.width, config.viewport.height),
        frame: 0,
        instances: Vec::new(),
        instance_count: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
