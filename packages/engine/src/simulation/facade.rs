use wasm_bindgen::prelude::*;

use crate::core::random::{entropy_seed, seeded};
use crate::domain::StageConfig;

use super::perf_stats::PerfStats;
use super::render_extract::INSTANCE_STRIDE;
use super::StageCore;

/// JS handle to a headless stage. The page drives it with `advance(dt)` and
/// draws from the instance buffer; `mount_stage` wraps the same core with a
/// canvas and its own animation loop.
#[wasm_bindgen]
pub struct Stage {
    core: StageCore,
}

#[wasm_bindgen]
impl Stage {
    /// Create a stage with the default roster for a `width` x `height` viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_seed(width, height, entropy_seed())
    }

    /// Same as `new` with a fixed random seed (reproducible layouts)
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(width: f32, height: f32, seed: u64) -> Self {
        let mut config = StageConfig::default();
        config.viewport.width = width;
        config.viewport.height = height;
        Self {
            core: StageCore::headless(config, seeded(seed)),
        }
    }

    /// Create a stage from a JSON config overlay
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str, seed: u64) -> Result<Stage, JsValue> {
        let config = StageConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            core: StageCore::headless(config, seeded(seed)),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn wall_count(&self) -> usize { self.core.wall_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn is_alive(&self) -> bool { self.core.is_alive() }

    #[wasm_bindgen(getter)]
    pub fn is_inert(&self) -> bool { self.core.is_inert() }

    // === EVENTS ===

    pub fn resize(&mut self, width: f32, height: f32) {
        self.core.resize(width, height);
    }

    pub fn scroll(&mut self) {
        self.core.scroll();
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.core.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.core.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.core.pointer_up();
    }

    // === FRAME ===

    /// Run a single tick and refresh the instance buffer
    pub fn tick(&mut self) -> bool {
        let ran = self.core.tick();
        self.core.paint();
        ran
    }

    /// Run the ticks owed for `elapsed_ms` and refresh the instance buffer
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        self.core.advance(elapsed_ms)
    }

    /// Stop the stage and free its bodies. Later calls return false.
    pub fn teardown(&mut self) -> bool {
        self.core.teardown()
    }

    // === RENDER BUFFER ===

    /// Pointer into wasm memory for the instance buffer (`Float32Array` view)
    pub fn instances_ptr(&self) -> *const f32 {
        self.core.instances().as_ptr()
    }

    /// Length of the instance buffer in f32 elements
    pub fn instances_len(&self) -> usize {
        self.core.instances().len()
    }

    pub fn instance_stride(&self) -> usize {
        INSTANCE_STRIDE
    }

    // === PERF ===

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    /// Effective configuration as JSON
    pub fn config_json(&self) -> Result<String, JsValue> {
        self.core
            .config()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Stage {
    pub fn core(&self) -> &StageCore {
        &self.core
    }
}
