//! Browser host: canvas surface, DOM listeners and the animation-frame loop.
//! Only built for wasm32.

mod canvas;
mod dom;

pub use canvas::CanvasSurface;
pub use dom::{mount_stage, mount_stage_with_config, StageHandle};
