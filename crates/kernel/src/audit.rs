use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::GeometryError;
use crate::geometry::Point2d;
use crate::mesh::TriangleMesh;
use crate::default_tolerance;

/// Index-level closure checks for a triangle mesh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeshAudit {
    pub edge_count: usize,
    /// Edges used by only one face.
    pub boundary_edges: usize,
    /// Edges used by more than two faces.
    pub non_manifold_edges: usize,
    /// Edges used twice but in the same direction both times.
    pub inconsistent_edges: usize,
    /// Faces with an out-of-range or repeated vertex index.
    pub invalid_faces: usize,
}

impl MeshAudit {
    /// Every edge is shared by exactly two faces that traverse it in
    /// opposite directions.
    pub fn is_watertight(&self) -> bool {
        self.boundary_edges == 0
            && self.non_manifold_edges == 0
            && self.inconsistent_edges == 0
            && self.invalid_faces == 0
    }

    pub fn into_result(self) -> Result<Self, GeometryError> {
        if self.is_watertight() {
            Ok(self)
        } else {
            Err(GeometryError::NonWatertightMesh {
                boundary_edges: self.boundary_edges,
                non_manifold_edges: self.non_manifold_edges,
                inconsistent_edges: self.inconsistent_edges,
                invalid_faces: self.invalid_faces,
            })
        }
    }
}

#[derive(Default)]
struct EdgeUse {
    forward: usize,
    backward: usize,
}

#[instrument(skip(mesh), fields(triangles = mesh.triangle_count()))]
pub fn audit_mesh(mesh: &TriangleMesh) -> MeshAudit {
    let vertex_count = mesh.vertex_count();
    let mut edges: HashMap<(u32, u32), EdgeUse> = HashMap::with_capacity(mesh.triangle_count() * 3 / 2);
    let mut audit = MeshAudit::default();

    for face in &mesh.faces {
        let out_of_range = face.iter().any(|&i| i as usize >= vertex_count);
        let repeated = face[0] == face[1] || face[1] == face[2] || face[0] == face[2];
        if out_of_range || repeated {
            audit.invalid_faces += 1;
            continue;
        }
        for k in 0..3 {
            let (a, b) = (face[k], face[(k + 1) % 3]);
            let entry = edges.entry((a.min(b), a.max(b))).or_default();
            if a < b {
                entry.forward += 1;
            } else {
                entry.backward += 1;
            }
        }
    }

    audit.edge_count = edges.len();
    for use_ in edges.values() {
        match use_.forward + use_.backward {
            1 => audit.boundary_edges += 1,
            2 if use_.forward != 1 => audit.inconsistent_edges += 1,
            2 => {}
            _ => audit.non_manifold_edges += 1,
        }
    }

    info!(
        edges = audit.edge_count,
        boundary_edges = audit.boundary_edges,
        non_manifold_edges = audit.non_manifold_edges,
        inconsistent_edges = audit.inconsistent_edges,
        invalid_faces = audit.invalid_faces,
        watertight = audit.is_watertight(),
        "mesh audit complete"
    );
    audit
}

/// True when the closed loop `points -> points[0]` has no two non-adjacent
/// edges that touch or cross.
///
/// A simple loop in the r >= 0 half-plane revolves to a solid without
/// self-intersections. Loops with fewer than three points are not simple.
pub fn is_simple_loop(points: &[Point2d]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let edge = |i: usize| (points[i], points[(i + 1) % n]);
    for i in 0..n {
        // skip i+1 (shares a vertex) and, for edge 0, the closing edge n-1
        let last = if i == 0 { n - 1 } else { n };
        for k in (i + 2)..last {
            let (a, b) = edge(i);
            let (c, d) = edge(k);
            if segments_intersect(a, b, c, d) {
                return false;
            }
        }
    }
    true
}

fn orient(a: Point2d, b: Point2d, c: Point2d) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn within_box(p: Point2d, a: Point2d, b: Point2d, eps: f64) -> bool {
    p.x >= a.x.min(b.x) - eps
        && p.x <= a.x.max(b.x) + eps
        && p.y >= a.y.min(b.y) - eps
        && p.y <= a.y.max(b.y) + eps
}

fn segments_intersect(a: Point2d, b: Point2d, c: Point2d, d: Point2d) -> bool {
    let eps = default_tolerance().collinear;
    let sign = |v: f64| if v > eps { 1 } else if v < -eps { -1 } else { 0 };

    let d1 = sign(orient(c, d, a));
    let d2 = sign(orient(c, d, b));
    let d3 = sign(orient(a, b, c));
    let d4 = sign(orient(a, b, d));

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }
    let touch = default_tolerance().coincidence;
    (d1 == 0 && within_box(a, c, d, touch))
        || (d2 == 0 && within_box(b, c, d, touch))
        || (d3 == 0 && within_box(c, a, b, touch))
        || (d4 == 0 && within_box(d, a, b, touch))
}
