/// Fixed-step accumulator: turns variable frame gaps into whole ticks so the
/// physics does not depend on the display refresh rate.
#[derive(Clone, Debug)]
pub(crate) struct FixedStep {
    tick_ms: f64,
    max_frame_ms: f64,
    accumulator: f64,
}

impl FixedStep {
    pub(crate) fn new(ticks_per_second: f32, max_frame_ms: f32) -> Self {
        Self {
            tick_ms: 1000.0 / ticks_per_second.max(1.0) as f64,
            max_frame_ms: max_frame_ms.max(0.0) as f64,
            accumulator: 0.0,
        }
    }

    /// Feed a frame gap; returns how many ticks to run now
    pub(crate) fn advance(&mut self, elapsed_ms: f64) -> u32 {
        let elapsed = if elapsed_ms.is_finite() {
            elapsed_ms.clamp(0.0, self.max_frame_ms)
        } else {
            0.0
        };
        self.accumulator += elapsed;
        let ticks = (self.accumulator / self.tick_ms).floor();
        self.accumulator -= ticks * self.tick_ms;
        ticks as u32
    }

    pub(crate) fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
