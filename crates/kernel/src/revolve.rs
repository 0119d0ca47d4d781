use tracing::{debug, instrument};

use crate::error::{GeometryError, Insufficient};
use crate::geometry::{Point2d, Point3d};
use crate::mesh::TriangleMesh;

pub const MIN_PROFILE_POINTS: usize = 2;
pub const MIN_ANGULAR_RESOLUTION: usize = 3;

/// Revolve a closed profile loop a full turn about the z axis.
///
/// # Arguments
///
/// * `profile_loop` - Cross-section in the (r, z) plane, traversed from the
///   axis outward along the top surface and back inward along the bottom.
///   `r = |x|`. A trailing repeat of the first point is ignored.
/// * `angular_resolution` - Number of angular steps. Must be at least 3.
///
/// Vertex `i * m + j` is profile point `i` at angle `2πj/m`. Each quad between
/// rings `i` and `i + 1` (wrapping to ring 0) splits into two triangles with
/// outward normals. Points on the axis keep one vertex per angle, so faces
/// touching the axis have zero area but the mesh stays index-closed.
#[instrument(skip(profile_loop), fields(points = profile_loop.len()))]
pub fn revolve(profile_loop: &[Point2d], angular_resolution: usize) -> Result<TriangleMesh, GeometryError> {
    let profile = match profile_loop {
        [first, .., last] if first == last => &profile_loop[..profile_loop.len() - 1],
        _ => profile_loop,
    };

    let n = profile.len();
    if n < MIN_PROFILE_POINTS {
        return Err(GeometryError::InsufficientGeometry(Insufficient::ProfilePoints {
            required: MIN_PROFILE_POINTS,
            provided: n,
        }));
    }
    let m = angular_resolution;
    if m < MIN_ANGULAR_RESOLUTION {
        return Err(GeometryError::InsufficientGeometry(Insufficient::AngularResolution {
            required: MIN_ANGULAR_RESOLUTION,
            provided: m,
        }));
    }
    if let Some(bad) = profile.iter().find(|p| !p.is_finite()) {
        return Err(GeometryError::NonFiniteCoordinate { x: bad.x, y: bad.y });
    }

    let count = match n.checked_mul(m) {
        Some(count) if u32::try_from(count).is_ok() => count,
        Some(count) => return Err(GeometryError::TooManyVertices { count }),
        None => return Err(GeometryError::TooManyVertices { count: usize::MAX }),
    };

    let angles: Vec<(f64, f64)> = (0..m)
        .map(|j| {
            let phi = std::f64::consts::TAU * j as f64 / m as f64;
            (phi.cos(), phi.sin())
        })
        .collect();

    let mut mesh = TriangleMesh::with_capacity(count, 2 * count);
    for p in profile {
        let r = p.x.abs();
        mesh.vertices
            .extend(angles.iter().map(|&(c, s)| Point3d::new(r * c, r * s, p.y)));
    }

    // count fits in u32, so every index below does too
    let idx = |ring: usize, step: usize| (ring * m + step) as u32;
    for i in 0..n {
        let next_ring = (i + 1) % n;
        for j in 0..m {
            let next_step = (j + 1) % m;
            let v1 = idx(i, j);
            let v2 = idx(i, next_step);
            let v3 = idx(next_ring, j);
            let v4 = idx(next_ring, next_step);
            mesh.faces.push([v1, v3, v2]);
            mesh.faces.push([v2, v3, v4]);
        }
    }

    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "revolved profile"
    );
    Ok(mesh)
}
