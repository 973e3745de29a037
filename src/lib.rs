//! Contoura Engine - image tracing to physics emulation in WASM
//!
//! The JS frontend owns the canvas, pointer events and the animation loop;
//! this crate owns the state and the semantics:
//! - geometry/  - traced outline to physics vertex adapter
//! - trace/     - tracing-surface application state
//! - physics/   - narrow interface over the physics engine
//! - emulation/ - zone lifecycle, body spawning, render extraction

pub mod emulation;
pub mod geometry;
pub mod physics;
pub mod trace;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Contoura WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use emulation::{Emulator, EmulatorCore};
pub use geometry::{classify, to_vertex_list, Classified, Vertex};
pub use trace::{ShapeSettings, Tool};

// Export tool keys for JS
#[wasm_bindgen]
pub fn tool_line() -> String {
    Tool::Line.key().to_string()
}
#[wasm_bindgen]
pub fn tool_hand() -> String {
    Tool::Hand.key().to_string()
}
