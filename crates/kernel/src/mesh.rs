use serde::{Deserialize, Serialize};

use crate::geometry::{Point3d, Vec3};
use crate::Tolerance;

/// Indexed triangle mesh. Faces wind counter-clockwise seen from outside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3d>,
    pub faces: Vec<[u32; 3]>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Corner positions of a face, or `None` if an index is out of range.
    pub fn triangle(&self, face: &[u32; 3]) -> Option<[Point3d; 3]> {
        let get = |i: u32| self.vertices.get(i as usize).copied();
        Some([get(face[0])?, get(face[1])?, get(face[2])?])
    }

    /// Unnormalized normal (twice the area) of a face.
    pub fn face_cross(&self, face: &[u32; 3]) -> Option<Vec3> {
        let [a, b, c] = self.triangle(face)?;
        Some((b - a).cross(&(c - a)))
    }

    pub fn face_normal(&self, face: &[u32; 3]) -> Option<Vec3> {
        self.face_cross(face)?.normalized()
    }

    pub fn face_area(&self, face: &[u32; 3]) -> f64 {
        self.face_cross(face).map_or(0.0, |n| 0.5 * n.length())
    }

    /// Reverse the winding of every face, turning normals inside out.
    pub fn flip_winding(&mut self) {
        for face in &mut self.faces {
            face.swap(1, 2);
        }
    }

    /// Copy of the mesh without zero-area faces. Vertices are kept as-is.
    pub fn without_degenerate_faces(&self, tol: &Tolerance) -> Self {
        let faces = self
            .faces
            .iter()
            .filter(|f| !tol.is_zero_area(self.face_area(f)))
            .copied()
            .collect();
        Self {
            vertices: self.vertices.clone(),
            faces,
        }
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounding_box(&self) -> Option<(Point3d, Point3d)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))),
        )
    }
}
