use rapier2d::prelude::*;

use super::GRAVITY;

/// One self-contained physics world.
///
/// Owns every engine component exactly once. Callers identify bodies by the
/// handles returned from the insert methods and never touch the component
/// sets directly.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// New empty world with screen-space gravity.
    pub fn new() -> Self {
        Self {
            gravity: vector![0.0, GRAVITY],
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Insert a dynamic body with the given collision shape, centered at
    /// (x, y). The shape is expected in centroid-local coordinates.
    pub fn insert_dynamic(&mut self, x: f32, y: f32, shape: SharedShape) -> RigidBodyHandle {
        let body = RigidBodyBuilder::dynamic().translation(vector![x, y]).build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::new(shape).restitution(0.3).build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Insert a static rectangle (arena boundary), centered at (cx, cy).
    pub fn insert_static_rect(&mut self, cx: f32, cy: f32, width: f32, height: f32) -> RigidBodyHandle {
        let body = RigidBodyBuilder::fixed().translation(vector![cx, cy]).build();
        let handle = self.bodies.insert(body);
        let collider = ColliderBuilder::cuboid(width / 2.0, height / 2.0).build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);
        handle
    }

    /// Current pose of a body: position and rotation angle in radians.
    pub fn pose(&self, handle: RigidBodyHandle) -> Option<(f32, f32, f32)> {
        self.bodies.get(handle).map(|body| {
            let translation = body.translation();
            (translation.x, translation.y, body.rotation().angle())
        })
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advance the simulation one tick at the engine's own rate.
    pub fn step(&mut self) {
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    /// Remove every body and its colliders (emulation teardown).
    pub fn remove_all(&mut self) {
        let handles: Vec<RigidBodyHandle> = self.bodies.iter().map(|(handle, _)| handle).collect();
        for handle in handles {
            self.bodies.remove(
                handle,
                &mut self.islands,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            );
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}
