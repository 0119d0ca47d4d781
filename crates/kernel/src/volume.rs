use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::audit::{audit_mesh, is_simple_loop};
use crate::error::GeometryError;
use crate::geometry::Point2d;
use crate::mesh::TriangleMesh;
use crate::revolve::revolve;

/// Share of the bounding cylinder a typical driver's material fills.
pub const FILL_FACTOR: f64 = 0.18;

pub const MM3_PER_CM3: f64 = 1000.0;

/// Meshes enclosing less than this (mm³) are treated as degenerate.
pub const MIN_SOLID_VOLUME_MM3: f64 = 1.0;

/// Substituted for unusable fallback inputs.
pub const REFERENCE_RADIUS_MM: f64 = 105.0;
pub const REFERENCE_THICKNESS_MM: f64 = 12.0;

/// Bounds applied to fallback inputs.
pub const FALLBACK_RADIUS_RANGE: (f64, f64) = (10.0, 500.0);
pub const FALLBACK_THICKNESS_RANGE: (f64, f64) = (0.5, 100.0);

pub fn mm3_to_cm3(volume_mm3: f64) -> f64 {
    volume_mm3 / MM3_PER_CM3
}

pub fn cylinder_volume_mm3(radius: f64, height: f64) -> f64 {
    std::f64::consts::PI * radius * radius * height
}

/// Signed enclosed volume by the divergence theorem: the sum of
/// `v0 · (v1 × v2) / 6` over all faces. Positive for outward winding.
/// Faces with out-of-range indices contribute nothing.
pub fn signed_volume(mesh: &TriangleMesh) -> f64 {
    let sum: f64 = mesh
        .faces
        .iter()
        .filter_map(|f| mesh.triangle(f))
        .map(|[a, b, c]| a.to_vec3().triple(&b.to_vec3(), &c.to_vec3()))
        .sum();
    sum / 6.0
}

/// Volume of a watertight mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshVolume {
    pub volume_mm3: f64,
    /// The mesh was wound inward and had to be flipped.
    pub flipped: bool,
}

/// Audit the mesh and compute its enclosed volume.
///
/// An inward-wound mesh is flipped and measured again. Returns
/// [`GeometryError::NonWatertightMesh`] if any edge is not shared by exactly
/// two oppositely oriented faces.
#[instrument(skip(mesh), fields(triangles = mesh.triangle_count()))]
pub fn estimate_volume(mesh: &TriangleMesh) -> Result<MeshVolume, GeometryError> {
    audit_mesh(mesh).into_result()?;

    let raw = signed_volume(mesh);
    if raw >= 0.0 {
        return Ok(MeshVolume {
            volume_mm3: raw,
            flipped: false,
        });
    }

    warn!(signed_volume = raw, "mesh wound inward, flipping faces");
    let mut flipped = mesh.clone();
    flipped.flip_winding();
    Ok(MeshVolume {
        volume_mm3: signed_volume(&flipped).abs(),
        flipped: true,
    })
}

/// Inputs to the analytic volume approximation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackInputs {
    pub radius: f64,
    pub thickness: f64,
    pub fill_factor: f64,
}

impl FallbackInputs {
    pub fn new(radius: f64, thickness: f64) -> Self {
        Self {
            radius,
            thickness,
            fill_factor: FILL_FACTOR,
        }
    }

    pub fn with_fill_factor(mut self, fill_factor: f64) -> Self {
        self.fill_factor = fill_factor;
        self
    }
}

fn sanitize(value: f64, reference: f64, (lo, hi): (f64, f64)) -> f64 {
    if value.is_finite() && value > 0.0 {
        value.clamp(lo, hi)
    } else {
        reference
    }
}

/// `π · r² · t · fill_factor`, always finite and positive.
///
/// Non-finite or non-positive inputs fall back to the reference driver
/// dimensions; everything is clamped to bounded ranges.
pub fn analytic_fallback_volume(inputs: &FallbackInputs) -> f64 {
    let radius = sanitize(inputs.radius, REFERENCE_RADIUS_MM, FALLBACK_RADIUS_RANGE);
    let thickness = sanitize(inputs.thickness, REFERENCE_THICKNESS_MM, FALLBACK_THICKNESS_RANGE);
    let fill = sanitize(inputs.fill_factor, FILL_FACTOR, (f64::MIN_POSITIVE, 1.0));
    cylinder_volume_mm3(radius, thickness) * fill
}

/// Why the mesh volume was not used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    InsufficientGeometry,
    NonWatertight,
    SelfIntersectingProfile,
    DegenerateVolume,
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientGeometry => write!(f, "profile cannot be meshed"),
            Self::NonWatertight => write!(f, "mesh is not watertight"),
            Self::SelfIntersectingProfile => write!(f, "profile crosses itself"),
            Self::DegenerateVolume => write!(f, "mesh encloses no usable volume"),
        }
    }
}

impl From<&GeometryError> for FallbackReason {
    fn from(err: &GeometryError) -> Self {
        match err {
            GeometryError::NonWatertightMesh { .. } => Self::NonWatertight,
            GeometryError::InsufficientGeometry(_)
            | GeometryError::NonFiniteCoordinate { .. }
            | GeometryError::TooManyVertices { .. } => Self::InsufficientGeometry,
        }
    }
}

/// A solid's volume, from the mesh when possible and analytically otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VolumeEstimate {
    Exact { volume_mm3: f64, flipped: bool },
    Approximate { volume_mm3: f64, reason: FallbackReason },
}

impl VolumeEstimate {
    pub fn volume_mm3(&self) -> f64 {
        match self {
            Self::Exact { volume_mm3, .. } | Self::Approximate { volume_mm3, .. } => *volume_mm3,
        }
    }

    pub fn volume_cm3(&self) -> f64 {
        mm3_to_cm3(self.volume_mm3())
    }

    pub fn is_approximate(&self) -> bool {
        matches!(self, Self::Approximate { .. })
    }

    pub fn fallback_reason(&self) -> Option<FallbackReason> {
        match self {
            Self::Exact { .. } => None,
            Self::Approximate { reason, .. } => Some(*reason),
        }
    }
}

fn mesh_volume(profile_loop: &[Point2d], angular_resolution: usize) -> Result<MeshVolume, FallbackReason> {
    let mesh = revolve(profile_loop, angular_resolution).map_err(|e| FallbackReason::from(&e))?;

    let outline = match profile_loop {
        [first, .., last] if first == last => &profile_loop[..profile_loop.len() - 1],
        _ => profile_loop,
    };
    let radial: Vec<Point2d> = outline.iter().map(Point2d::with_abs_x).collect();
    if !is_simple_loop(&radial) {
        return Err(FallbackReason::SelfIntersectingProfile);
    }

    let measured = estimate_volume(&mesh).map_err(|e| FallbackReason::from(&e))?;
    if !measured.volume_mm3.is_finite() || measured.volume_mm3 < MIN_SOLID_VOLUME_MM3 {
        return Err(FallbackReason::DegenerateVolume);
    }
    Ok(measured)
}

/// Volume of the solid swept by `profile_loop`, falling back to
/// [`analytic_fallback_volume`] whenever the mesh route fails.
///
/// Never fails and always returns a finite, positive volume.
#[instrument(skip(profile_loop, fallback), fields(points = profile_loop.len()))]
pub fn estimate_solid_volume(
    profile_loop: &[Point2d],
    angular_resolution: usize,
    fallback: &FallbackInputs,
) -> VolumeEstimate {
    match mesh_volume(profile_loop, angular_resolution) {
        Ok(measured) => {
            info!(
                volume_mm3 = measured.volume_mm3,
                flipped = measured.flipped,
                "mesh volume computed"
            );
            VolumeEstimate::Exact {
                volume_mm3: measured.volume_mm3,
                flipped: measured.flipped,
            }
        }
        Err(reason) => {
            let volume_mm3 = analytic_fallback_volume(fallback);
            warn!(%reason, volume_mm3, "using analytic volume approximation");
            VolumeEstimate::Approximate { volume_mm3, reason }
        }
    }
}
