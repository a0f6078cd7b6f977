use wasm_bindgen::prelude::*;

/// Timings and counters for the last frame (zeros when perf is disabled)
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(crate) step_ms: f64,
    pub(crate) events_ms: f64,
    pub(crate) forces_ms: f64,
    pub(crate) collision_ms: f64,
    pub(crate) paint_ms: f64,
    pub(crate) ticks: u32,
    pub(crate) events: u32,
    pub(crate) contacts: u32,
    pub(crate) clamped: u32,
    pub(crate) jitter_impulses: u32,
    pub(crate) buoyancy_impulses: u32,
    pub(crate) gusts: u32,
    pub(crate) wall_rebuilds: u32,
    pub(crate) body_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn events_ms(&self) -> f64 { self.events_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn paint_ms(&self) -> f64 { self.paint_ms }
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u32 { self.ticks }
    #[wasm_bindgen(getter)]
    pub fn events(&self) -> u32 { self.events }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn clamped(&self) -> u32 { self.clamped }
    #[wasm_bindgen(getter)]
    pub fn jitter_impulses(&self) -> u32 { self.jitter_impulses }
    #[wasm_bindgen(getter)]
    pub fn buoyancy_impulses(&self) -> u32 { self.buoyancy_impulses }
    #[wasm_bindgen(getter)]
    pub fn gusts(&self) -> u32 { self.gusts }
    #[wasm_bindgen(getter)]
    pub fn wall_rebuilds(&self) -> u32 { self.wall_rebuilds }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}
