use wasm_bindgen::prelude::*;

use super::EmulatorCore;

#[wasm_bindgen]
pub struct Emulator {
    core: EmulatorCore,
}

#[wasm_bindgen]
impl Emulator {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: EmulatorCore::new(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    // === TRACE STATE API ===

    /// Append a traced point (canvas-local coordinates, pan/zoom already
    /// applied by the stage).
    pub fn add_point(&mut self, x: f32, y: f32) {
        self.core.add_point(x, y);
    }

    /// Drop the most recently traced point (undo).
    pub fn undo_point(&mut self) {
        self.core.undo_point();
    }

    /// Replace the outline with an axis-aligned rectangle (demo shape).
    #[wasm_bindgen(js_name = autoFillRect)]
    pub fn auto_fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.core.auto_fill_rect(x, y, width, height);
    }

    #[wasm_bindgen(getter)]
    pub fn outline_len(&self) -> usize {
        self.core.outline_len()
    }

    /// Flat [x0, y0, x1, y1, ...] view of the in-progress outline for the
    /// drawing layer.
    pub fn outline_flat(&self) -> js_sys::Float32Array {
        let points = self.core.outline_points();
        let mut flat = Vec::with_capacity(points.len() * 2);
        for &(x, y) in points {
            flat.push(x);
            flat.push(y);
        }
        js_sys::Float32Array::from(flat.as_slice())
    }

    /// Select a tool by key ("line", "hand"). Returns false for unknown keys.
    pub fn select_tool(&mut self, key: &str) -> bool {
        self.core.select_tool(key)
    }

    #[wasm_bindgen(getter)]
    pub fn current_tool(&self) -> String {
        self.core.current_tool().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn previous_tool(&self) -> Option<String> {
        self.core.previous_tool().map(|key| key.to_string())
    }

    pub fn set_zoom(&mut self, percent: u32) {
        self.core.set_zoom(percent);
    }

    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> u32 {
        self.core.zoom()
    }

    /// Load an image into the single slot; discards the current outline.
    pub fn load_image(&mut self, texture: String, width: f32, height: f32) {
        self.core.load_image(&texture, width, height);
    }

    /// Empty the image slot; discards the current outline.
    pub fn clear_image(&mut self) {
        self.core.clear_image();
    }

    #[wasm_bindgen(getter)]
    pub fn has_image(&self) -> bool {
        self.core.has_image()
    }

    /// Merge a JSON settings patch, e.g. `{"xScale": 2}`. Unspecified
    /// fields keep their prior value.
    pub fn update_shape_settings(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .update_shape_settings(&json)
            .map_err(|e| JsValue::from_str(&e))?;

        web_sys::console::log_1(
            &format!("shape settings: {:?}", self.core.shape_settings()).into(),
        );
        Ok(())
    }

    // === EMULATION API ===

    /// Toggle the emulation zone. Opening installs boundaries around the
    /// viewport and drops the traced shape at its center; closing clears
    /// every body and releases the world.
    pub fn set_emulation(&mut self, active: bool, viewport_width: f32, viewport_height: f32) {
        if active {
            self.core.show_emulation(viewport_width, viewport_height);
        } else {
            self.core.hide_emulation();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn emulation_active(&self) -> bool {
        self.core.emulation_active()
    }

    /// Build a body from the traced outline and drop it at (x, y).
    /// Returns the body id, or 0 when nothing was spawned.
    pub fn spawn_body(&mut self, x: f32, y: f32) -> u32 {
        self.core.spawn_body(x, y)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize {
        self.core.body_count()
    }

    /// Advance the simulation one tick (called from the animation loop).
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Current body poses and sprite records as JSON for the renderer.
    pub fn render_state(&self) -> String {
        self.core.render_state_json()
    }
}

impl Default for Emulator {
    fn default() -> Self {
        Self::new()
    }
}
