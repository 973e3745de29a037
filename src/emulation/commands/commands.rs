use crate::trace::{LoadedImage, Tool};

use super::EmulatorCore;

pub(super) fn add_point(core: &mut EmulatorCore, x: f32, y: f32) {
    core.trace.outline.push(x, y);
}

pub(super) fn undo_point(core: &mut EmulatorCore) {
    core.trace.outline.undo();
}

pub(super) fn auto_fill_rect(core: &mut EmulatorCore, x: f32, y: f32, width: f32, height: f32) {
    core.trace.outline.fill_rect(x, y, width, height);
}

pub(super) fn select_tool(core: &mut EmulatorCore, key: &str) -> bool {
    match Tool::from_key(key) {
        Some(tool) => {
            core.trace.tools.select(tool);
            true
        }
        None => false,
    }
}

pub(super) fn set_zoom(core: &mut EmulatorCore, percent: u32) {
    core.trace.zoom = percent;
}

pub(super) fn load_image(core: &mut EmulatorCore, texture: &str, width: f32, height: f32) {
    core.trace.set_image(Some(LoadedImage {
        texture: texture.to_string(),
        width,
        height,
    }));
}

pub(super) fn clear_image(core: &mut EmulatorCore) {
    core.trace.set_image(None);
}

pub(super) fn update_shape_settings(core: &mut EmulatorCore, json: &str) -> Result<(), String> {
    core.trace.shape_settings.merge_json(json)
}
