//! Application state behind the tracing surface.
//!
//! The frontend kept this in a reactive store originally; here it is one
//! explicit struct, mutated only through the emulation command layer.

pub mod outline;
pub mod settings;
pub mod tools;

use serde::Serialize;

pub use outline::Outline;
pub use settings::{ShapeSettings, ShapeSettingsPatch, DEFAULT_SHAPE_SETTINGS};
pub use tools::{Tool, ToolChain};

/// The single loaded image: a texture key the frontend resolves back to
/// pixel data, plus the image dimensions in pixels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoadedImage {
    pub texture: String,
    pub width: f32,
    pub height: f32,
}

/// Everything the tracing surface reads and writes.
#[derive(Clone, Debug)]
pub struct TraceState {
    pub outline: Outline,
    pub tools: ToolChain,
    /// Zoom in percent; the pan/zoom math itself lives in the frontend.
    pub zoom: u32,
    pub image: Option<LoadedImage>,
    pub shape_settings: ShapeSettings,
}

impl TraceState {
    pub fn new() -> Self {
        Self {
            outline: Outline::new(),
            tools: ToolChain::new(),
            zoom: 100,
            image: None,
            shape_settings: ShapeSettings::default(),
        }
    }

    /// Swap the image slot. The outline was traced over the previous image,
    /// so any slot change discards it. Bodies already spawned keep the
    /// texture they were built with.
    pub fn set_image(&mut self, image: Option<LoadedImage>) {
        self.image = image;
        self.outline.clear();
    }
}

impl Default for TraceState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_swap_discards_outline() {
        let mut state = TraceState::new();
        state.outline.push(1.0, 2.0);
        state.outline.push(3.0, 4.0);

        state.set_image(Some(LoadedImage {
            texture: "blob:demo".to_string(),
            width: 300.0,
            height: 200.0,
        }));

        assert!(state.outline.is_empty());
        assert!(state.image.is_some());

        state.outline.push(5.0, 6.0);
        state.set_image(None);
        assert!(state.outline.is_empty());
        assert!(state.image.is_none());
    }
}
