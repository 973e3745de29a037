//! Narrow interface over the physics engine (rapier2d).
//!
//! The rest of the crate creates bodies, steps the world and reads poses
//! through this module only; rapier types do not leak past it except for
//! body handles.

pub mod arena;
pub mod shape;
pub mod world;

pub use shape::build_shape;
pub use world::PhysicsWorld;

/// Downward gravity in pixels per second squared (screen coordinates,
/// y grows toward the bottom edge).
pub const GRAVITY: f32 = 981.0;
