use rapier2d::na::Point2;
use rapier2d::prelude::{Real, SharedShape};

use crate::geometry::{Classified, Vertex};

/// Build a collision shape for a classified ring.
///
/// Convex rings become a single convex polygon. Concave rings go through
/// the engine's convex decomposition and come back as a compound of convex
/// parts. Either way the result inserts through the same world API, so no
/// caller branches on convexity after this point.
///
/// Returns `None` when the engine rejects the ring (degenerate or collinear
/// input); the spawn that asked for it simply produces no body.
pub fn build_shape(classified: &Classified) -> Option<SharedShape> {
    match classified {
        Classified::Convex(ring) => SharedShape::convex_hull(&to_points(ring)),
        Classified::Concave(ring) => {
            if ring.len() < 3 {
                return None;
            }
            let points = to_points(ring);
            let segments = closing_segments(points.len() as u32);
            Some(SharedShape::convex_decomposition(&points, &segments))
        }
    }
}

fn to_points(ring: &[Vertex]) -> Vec<Point2<Real>> {
    ring.iter().map(|v| Point2::new(v.x, v.y)).collect()
}

/// Segment indices tracing the ring boundary, last vertex closing back to
/// the first.
fn closing_segments(len: u32) -> Vec<[u32; 2]> {
    (0..len).map(|i| [i, (i + 1) % len]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{classify, to_vertex_list};

    #[test]
    fn convex_square_builds_directly() {
        let ring = to_vertex_list(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        let shape = build_shape(&classify(ring)).expect("square should build");
        assert!(shape.as_convex_polygon().is_some());
    }

    #[test]
    fn concave_arrow_decomposes_into_compound() {
        let ring = to_vertex_list(&[
            (0.0, 0.0),
            (10.0, 0.0),
            (5.0, 5.0),
            (10.0, 10.0),
            (0.0, 10.0),
        ]);
        let classified = classify(ring);
        assert!(!classified.is_convex());

        let shape = build_shape(&classified).expect("arrow should decompose");
        let compound = shape.as_compound().expect("decomposition yields a compound");
        assert!(compound.shapes().len() >= 2);
    }

    #[test]
    fn degenerate_ring_builds_nothing() {
        let line = to_vertex_list(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]);
        // Collinear points classify concave and survive neither path.
        assert!(build_shape(&Classified::Convex(line.clone())).is_none());
        assert!(build_shape(&Classified::Concave(Vec::new())).is_none());
    }
}
