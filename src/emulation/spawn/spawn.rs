use crate::geometry::{self, Classified, Vertex};
use crate::physics;

use super::{BodyRecord, EmulatorCore, SpriteRecord};

/// Build a physics body from the traced outline and drop it at (x, y).
///
/// Returns the body id, or 0 when nothing was spawned: zone not open, no
/// loaded image (the texture has nowhere to come from), an outline too
/// short to form a polygon, or a ring the engine rejects as degenerate.
pub(super) fn spawn_traced_body(core: &mut EmulatorCore, x: f32, y: f32) -> u32 {
    if core.zone.is_none() {
        return 0;
    }
    let Some(image) = core.trace.image.as_ref() else {
        return 0;
    };
    if core.trace.outline.len() < 3 {
        return 0;
    }

    let vertices = geometry::to_vertex_list(core.trace.outline.points());
    let local = recenter(geometry::classify(vertices));

    let Some(shape) = physics::build_shape(&local) else {
        return 0;
    };

    let sprite = SpriteRecord {
        texture: image.texture.clone(),
        settings: core.trace.shape_settings,
    };

    let Some(zone) = core.zone.as_mut() else {
        return 0;
    };

    let handle = zone.physics.insert_dynamic(x, y, shape);
    let id = zone.next_body_id;
    zone.next_body_id = zone.next_body_id.saturating_add(1);

    zone.records.push(BodyRecord {
        id,
        handle,
        sprite,
        wireframe: local.into_ring(),
    });

    id
}

/// Rebase the ring on its area centroid, so the body pose reported by the
/// engine is the shape's center rather than the trace origin.
fn recenter(classified: Classified) -> Classified {
    match classified {
        Classified::Convex(ring) => Classified::Convex(rebase(ring)),
        Classified::Concave(ring) => Classified::Concave(rebase(ring)),
    }
}

fn rebase(ring: Vec<Vertex>) -> Vec<Vertex> {
    let center = geometry::centroid(&ring);
    ring.into_iter()
        .map(|v| Vertex::new(v.x - center.x, v.y - center.y))
        .collect()
}
