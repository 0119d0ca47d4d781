//! Profile geometry for discs of revolution: Bézier profile sampling,
//! revolution meshing, mesh auditing and volume estimation.

pub mod audit;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod mesh;
pub mod revolve;
pub mod volume;

pub use audit::{MeshAudit, audit_mesh, is_simple_loop};
pub use curve::{axis_closed_loop, build_profile, landmark_profile};
pub use error::{GeometryError, Insufficient};
pub use geometry::{Point2d, Point3d, Vec3};
pub use mesh::TriangleMesh;
pub use revolve::revolve;
pub use volume::{
    FallbackInputs, FallbackReason, MeshVolume, VolumeEstimate, estimate_solid_volume,
    estimate_volume,
};

/// Tolerances for geometric comparisons, in millimetre units.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Points closer than this are considered coincident (mm).
    pub coincidence: f64,
    /// Triangles with less area than this are degenerate (mm²).
    pub area: f64,
    /// Orientation determinants below this are treated as collinear.
    pub collinear: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            coincidence: 1e-9,
            area: 1e-12,
            collinear: 1e-12,
        }
    }
}

impl Tolerance {
    pub fn points_coincident(&self, a: &Point2d, b: &Point2d) -> bool {
        a.distance_to(b) < self.coincidence
    }

    pub fn is_zero_area(&self, area: f64) -> bool {
        area.abs() < self.area
    }
}

pub fn default_tolerance() -> Tolerance {
    Tolerance::default()
}
