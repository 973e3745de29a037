//! Emulation zone: the traced shape dropped into a live physics world.
//!
//! `EmulatorCore` owns the trace state and, while emulation is shown, the
//! physics zone. The wasm facade in `facade.rs` is a thin shell over it;
//! the actual work lives in the command/zone/spawn/render submodules as
//! free functions over the core.

use rapier2d::prelude::RigidBodyHandle;
use serde::Serialize;

use crate::geometry::Vertex;
use crate::physics::PhysicsWorld;
use crate::trace::{ShapeSettings, TraceState};

#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "spawn/spawn.rs"]
mod spawn;
#[path = "zone/zone.rs"]
mod zone;
mod facade;

pub use facade::Emulator;

/// Fill-mapping snapshot taken when a body is spawned. Later settings
/// changes leave existing bodies alone.
#[derive(Clone, Debug, Serialize)]
pub struct SpriteRecord {
    pub texture: String,
    #[serde(flatten)]
    pub settings: ShapeSettings,
}

/// Per-body record the renderer draws each frame.
#[derive(Clone, Debug)]
pub(crate) struct BodyRecord {
    id: u32,
    handle: RigidBodyHandle,
    sprite: SpriteRecord,
    /// Centroid-local ring, for the wireframe overlay.
    wireframe: Vec<Vertex>,
}

/// Live physics zone; exists only while emulation is shown.
pub(crate) struct EmulationZone {
    physics: PhysicsWorld,
    records: Vec<BodyRecord>,
    next_body_id: u32,
}

/// The engine core behind the wasm facade.
pub struct EmulatorCore {
    trace: TraceState,
    zone: Option<EmulationZone>,
    frame: u64,
}

impl EmulatorCore {
    pub fn new() -> Self {
        Self {
            trace: TraceState::new(),
            zone: None,
            frame: 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    // === TRACE STATE API ===

    /// Append a traced point (canvas-local coordinates).
    pub fn add_point(&mut self, x: f32, y: f32) {
        commands::add_point(self, x, y)
    }

    /// Drop the most recently traced point.
    pub fn undo_point(&mut self) {
        commands::undo_point(self)
    }

    /// Replace the outline with an axis-aligned rectangle (demo shape).
    pub fn auto_fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        commands::auto_fill_rect(self, x, y, width, height)
    }

    pub fn outline_len(&self) -> usize {
        self.trace.outline.len()
    }

    pub fn outline_points(&self) -> &[(f32, f32)] {
        self.trace.outline.points()
    }

    /// Select a tool by key ("line", "hand"). Returns false for unknown keys.
    pub fn select_tool(&mut self, key: &str) -> bool {
        commands::select_tool(self, key)
    }

    pub fn current_tool(&self) -> &'static str {
        self.trace.tools.current().key()
    }

    pub fn previous_tool(&self) -> Option<&'static str> {
        self.trace.tools.previous().map(|tool| tool.key())
    }

    pub fn set_zoom(&mut self, percent: u32) {
        commands::set_zoom(self, percent)
    }

    pub fn zoom(&self) -> u32 {
        self.trace.zoom
    }

    /// Load an image into the single slot; discards the current outline.
    pub fn load_image(&mut self, texture: &str, width: f32, height: f32) {
        commands::load_image(self, texture, width, height)
    }

    /// Empty the image slot; discards the current outline.
    pub fn clear_image(&mut self) {
        commands::clear_image(self)
    }

    pub fn has_image(&self) -> bool {
        self.trace.image.is_some()
    }

    /// Merge a JSON settings patch, e.g. `{"xScale": 2}`.
    pub fn update_shape_settings(&mut self, json: &str) -> Result<(), String> {
        commands::update_shape_settings(self, json)
    }

    pub fn shape_settings(&self) -> ShapeSettings {
        self.trace.shape_settings
    }

    // === EMULATION API ===

    /// Open the emulation zone: boundaries around the viewport, then the
    /// traced shape dropped in at the center.
    pub fn show_emulation(&mut self, viewport_width: f32, viewport_height: f32) {
        zone::activate(self, viewport_width, viewport_height)
    }

    /// Close the zone: all bodies cleared, resources released.
    pub fn hide_emulation(&mut self) {
        zone::deactivate(self)
    }

    pub fn emulation_active(&self) -> bool {
        self.zone.is_some()
    }

    /// Build a body from the traced outline and drop it at (x, y).
    /// Returns the body id, or 0 when nothing was spawned.
    pub fn spawn_body(&mut self, x: f32, y: f32) -> u32 {
        spawn::spawn_traced_body(self, x, y)
    }

    /// Bodies currently in the world, boundaries included.
    pub fn body_count(&self) -> usize {
        self.zone.as_ref().map_or(0, |zone| zone.physics.body_count())
    }

    /// Advance the simulation one tick.
    pub fn step(&mut self) {
        zone::step(self)
    }

    /// Current body poses and sprite records as JSON for the renderer.
    pub fn render_state_json(&self) -> String {
        render_extract::render_state_json(self)
    }
}

impl Default for EmulatorCore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
