use super::world::PhysicsWorld;

/// Boundary wall thickness in pixels.
pub const WALL_THICKNESS: f32 = 20.0;

/// Number of boundary bodies around the viewport.
pub const WALL_COUNT: usize = 4;

/// Install four static boundaries centered half a wall outside each edge of
/// the viewport rectangle, so their inner faces sit flush with it.
pub fn install_boundaries(world: &mut PhysicsWorld, width: f32, height: f32) {
    let half = WALL_THICKNESS / 2.0;

    // top, left, bottom, right
    world.insert_static_rect(width / 2.0, -half, width, WALL_THICKNESS);
    world.insert_static_rect(-half, height / 2.0, WALL_THICKNESS, height);
    world.insert_static_rect(width / 2.0, height + half, width, WALL_THICKNESS);
    world.insert_static_rect(width + half, height / 2.0, WALL_THICKNESS, height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rapier2d::prelude::SharedShape;

    #[test]
    fn installs_four_walls() {
        let mut world = PhysicsWorld::new();
        install_boundaries(&mut world, 800.0, 600.0);
        assert_eq!(world.body_count(), WALL_COUNT);
    }

    #[test]
    fn floor_catches_a_falling_body() {
        let mut world = PhysicsWorld::new();
        install_boundaries(&mut world, 200.0, 200.0);

        let handle = world.insert_dynamic(100.0, 50.0, SharedShape::cuboid(5.0, 5.0));
        for _ in 0..600 {
            world.step();
        }

        let (_, y, _) = world.pose(handle).expect("body should exist");
        // Resting on the floor: inside the arena, near the bottom edge.
        assert!(y < 200.0, "body fell through the floor, y = {y}");
        assert!(y > 150.0, "body never reached the floor, y = {y}");
    }
}
