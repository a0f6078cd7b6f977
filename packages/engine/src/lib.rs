//! Celebration Physics - decorative 2D physics background in WASM
//!
//! Balloons, cake slices and banknotes drift inside the browser window,
//! bounce off its edges and each other, follow a dragging pointer and get
//! tossed upward when the page scrolls.
//!
//! Architecture:
//! - core/          - Logging macros, random source
//! - domain/        - Value types, bodies, palettes, configuration
//! - systems/       - Walls, forcing, contacts, pointer constraint, roster
//! - simulation/    - Owned stage context, tick pipeline, JS facade
//! - host/          - Canvas, DOM listeners, animation-frame loop (wasm32)

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
#[cfg(target_arch = "wasm32")]
pub mod host;

#[doc(hidden)]
pub use web_sys as __web_sys;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🎈 Celebration physics initialized (v{})", env!("CARGO_PKG_VERSION"));
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::{StageConfig, StageError};
pub use simulation::{Lifecycle, PerfStats, Stage, StageCore, StageEvent, INSTANCE_STRIDE};

#[cfg(target_arch = "wasm32")]
pub use host::{mount_stage, StageHandle};
