use crate::physics::{arena, PhysicsWorld};

use super::{EmulationZone, EmulatorCore};

/// Open the zone: fresh world, boundaries around the viewport, traced shape
/// dropped in at the viewport center. No-op when already open.
pub(super) fn activate(core: &mut EmulatorCore, viewport_width: f32, viewport_height: f32) {
    if core.zone.is_some() {
        return;
    }

    let mut physics = PhysicsWorld::new();
    arena::install_boundaries(&mut physics, viewport_width, viewport_height);

    core.zone = Some(EmulationZone {
        physics,
        records: Vec::new(),
        next_body_id: 1,
    });

    super::spawn::spawn_traced_body(core, viewport_width / 2.0, viewport_height / 2.0);
}

/// Close the zone. The caller has already stopped driving `step`; the world
/// is cleared before the zone (and with it the render records) is dropped.
pub(super) fn deactivate(core: &mut EmulatorCore) {
    if let Some(mut zone) = core.zone.take() {
        zone.physics.remove_all();
        zone.records.clear();
    }
}

pub(super) fn step(core: &mut EmulatorCore) {
    if let Some(zone) = core.zone.as_mut() {
        zone.physics.step();
        core.frame = core.frame.saturating_add(1);
    }
}
