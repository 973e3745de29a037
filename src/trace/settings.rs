use serde::{Deserialize, Serialize};

/// Scale/offset factors for mapping the loaded image onto a body surface.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeSettings {
    pub x_scale: f32,
    pub y_scale: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

/// Identity scale, fill centered on the body.
pub const DEFAULT_SHAPE_SETTINGS: ShapeSettings = ShapeSettings {
    x_scale: 1.0,
    y_scale: 1.0,
    x_offset: 0.5,
    y_offset: 0.5,
};

impl Default for ShapeSettings {
    fn default() -> Self {
        DEFAULT_SHAPE_SETTINGS
    }
}

/// Partial settings update; fields left out keep their prior value.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeSettingsPatch {
    pub x_scale: Option<f32>,
    pub y_scale: Option<f32>,
    pub x_offset: Option<f32>,
    pub y_offset: Option<f32>,
}

impl ShapeSettings {
    /// Merge a partial patch into the current settings. Takes effect on
    /// bodies constructed afterwards only.
    pub fn merge(&mut self, patch: ShapeSettingsPatch) {
        if let Some(v) = patch.x_scale {
            self.x_scale = v;
        }
        if let Some(v) = patch.y_scale {
            self.y_scale = v;
        }
        if let Some(v) = patch.x_offset {
            self.x_offset = v;
        }
        if let Some(v) = patch.y_offset {
            self.y_offset = v;
        }
    }

    /// Merge a JSON patch as sent by the frontend, e.g. `{"xScale": 2}`.
    pub fn merge_json(&mut self, json: &str) -> Result<(), String> {
        let patch: ShapeSettingsPatch = serde_json::from_str(json).map_err(|e| e.to_string())?;
        self.merge(patch);
        Ok(())
    }
}
