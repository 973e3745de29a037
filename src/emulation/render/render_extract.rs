use serde::Serialize;

use crate::geometry::Vertex;

use super::{EmulatorCore, SpriteRecord};

/// One drawable body, in the shape the JS renderer consumes.
#[derive(Serialize)]
struct RenderBody<'a> {
    id: u32,
    x: f32,
    y: f32,
    angle: f32,
    sprite: &'a SpriteRecord,
    wireframe: &'a [Vertex],
}

/// Serialize the spawned bodies with their current poses.
///
/// Boundaries are not included; the frontend knows the viewport it asked
/// the zone to fence in.
pub(super) fn render_state_json(core: &EmulatorCore) -> String {
    let mut out = Vec::new();

    if let Some(zone) = core.zone.as_ref() {
        for record in &zone.records {
            if let Some((x, y, angle)) = zone.physics.pose(record.handle) {
                out.push(RenderBody {
                    id: record.id,
                    x,
                    y,
                    angle,
                    sprite: &record.sprite,
                    wireframe: &record.wireframe,
                });
            }
        }
    }

    serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
}
