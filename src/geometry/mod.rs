//! Geometry adapter between traced outlines and physics vertex sets.

pub mod ring;
pub mod vertex;

pub use ring::{centroid, classify, is_convex, signed_area, Classified};
pub use vertex::{to_vertex_list, Vertex};
