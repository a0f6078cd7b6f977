//! Stage - the owned simulation context behind the decorative background
//!
//! `StageCore` holds everything one mounted stage needs: the world, the
//! pointer grab, the event queue, the fixed-step clock, the random source and
//! the render surface. Host callbacks only enqueue `StageEvent`s; each frame
//! drains the queue, runs whole ticks, then paints.
//!
//! Handlers live in submodules and take the context explicitly:
//! - init: building the world and the roster
//! - step: tick pipeline and event handlers
//! - lifecycle: teardown
//! - render: surface trait and instance extraction

use rand::Rng;

use crate::core::random::StageRng;
use crate::domain::{StageConfig, StageError, Vec2};
use crate::systems::{Pointer, World};

#[path = "events/events.rs"]
mod events;
#[path = "clock/fixed_step.rs"]
mod fixed_step;
#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/handlers.rs"]
mod handlers;
#[path = "step/step.rs"]
mod step;
#[path = "lifecycle/teardown.rs"]
mod teardown;
#[path = "render/surface.rs"]
mod surface;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

pub use events::{EventQueue, StageEvent};
pub use facade::Stage;
pub use perf_stats::PerfStats;
pub use render_extract::INSTANCE_STRIDE;
pub use surface::{NullSurface, RenderSurface};

use fixed_step::FixedStep;
use perf_timer::PerfTimer;

/// Where a stage is in its life
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Simulating and painting
    Running,
    /// Mount failed: no bodies, no ticks, no paint
    Inert,
    /// Torn down; every entry point is a no-op
    TornDown,
}

/// The simulation context
pub struct StageCore<R: Rng = StageRng> {
    config: StageConfig,
    world: World,
    pointer: Pointer,
    events: EventQueue,
    clock: FixedStep,
    rng: R,
    lifecycle: Lifecycle,
    surface: Option<Box<dyn RenderSurface>>,
    viewport: (f32, f32),
    frame: u64,

    // Render extraction
    instances: Vec<f32>,
    instance_count: usize,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl<R: Rng> StageCore<R> {
    /// Build a stage on `surface`. A surface error (or an unusable config)
    /// leaves the stage inert instead of failing.
    pub fn new(config: StageConfig, rng: R, surface: Result<Box<dyn RenderSurface>, StageError>) -> Self {
        init::create_stage_core(config, rng, surface)
    }

    /// Stage that paints nowhere; the host reads `instances()` instead
    pub fn headless(config: StageConfig, rng: R) -> Self {
        Self::new(config, rng, Ok(Box::new(NullSurface)))
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_alive(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn is_inert(&self) -> bool {
        self.lifecycle == Lifecycle::Inert
    }

    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn pointer(&self) -> &Pointer {
        &self.pointer
    }

    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn body_count(&self) -> usize {
        self.world.body_count()
    }

    pub fn wall_count(&self) -> usize {
        self.world.wall_count()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Queue a host event. Dropped unless the stage is running.
    pub fn push_event(&mut self, event: StageEvent) {
        if self.is_alive() {
            self.events.push(event);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.push_event(StageEvent::Resize { width, height });
    }

    pub fn scroll(&mut self) {
        self.push_event(StageEvent::Scroll);
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.push_event(StageEvent::PointerDown(Vec2::new(x, y)));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.push_event(StageEvent::PointerMove(Vec2::new(x, y)));
    }

    pub fn pointer_up(&mut self) {
        self.push_event(StageEvent::PointerUp);
    }

    /// Run exactly one tick (no paint). Returns false when not running.
    pub fn tick(&mut self) -> bool {
        step::tick(self)
    }

    /// One animation frame: run the ticks owed for `elapsed_ms`, then paint.
    /// Returns the number of ticks run.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        step::advance(self, elapsed_ms)
    }

    /// Paint the current state without simulating
    pub fn paint(&mut self) {
        step::paint(self);
    }

    /// Stop, detach and release. True only for the call that did the work.
    pub fn teardown(&mut self) -> bool {
        teardown::teardown(self)
    }

    /// Flat `[x, y, hw, hh, shape, category, fill, stroke, stroke_width]`
    /// records for visible bodies, refreshed on every paint
    pub fn instances(&self) -> &[f32] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instance_count
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Last frame perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}
