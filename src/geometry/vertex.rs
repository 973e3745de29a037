use serde::Serialize;

/// 2D point with named fields, the form the physics engine consumes
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

impl Vertex {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Vertex {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Convert traced coordinate pairs into named-field vertices.
///
/// Pure structural transform: same length, same order, no coordinate
/// changes. Total over all inputs; degenerate sequences are rejected
/// downstream, not here.
pub fn to_vertex_list(coords: &[(f32, f32)]) -> Vec<Vertex> {
    coords.iter().map(|&(x, y)| Vertex { x, y }).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_length_and_order() {
        let coords = [(0.0, 1.0), (2.5, -3.0), (4.0, 4.0)];
        let vertices = to_vertex_list(&coords);

        assert_eq!(vertices.len(), coords.len());
        for (i, &(x, y)) in coords.iter().enumerate() {
            assert_eq!(vertices[i], Vertex::new(x, y));
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(to_vertex_list(&[]).is_empty());
    }

    #[test]
    fn too_short_sequences_pass_through() {
        assert_eq!(to_vertex_list(&[(7.0, 8.0)]), vec![Vertex::new(7.0, 8.0)]);
    }
}
