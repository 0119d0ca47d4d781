use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use disc_kernel::{axis_closed_loop, default_tolerance, revolve, Point2d, TriangleMesh};

use crate::error::ExportError;
use crate::simplify::simplify_profile;

/// Profile points kept for the printable mesh.
pub const DEFAULT_EXPORT_POINTS: usize = 12;
/// Angular steps of the printable mesh.
pub const DEFAULT_EXPORT_RESOLUTION: usize = 16;

/// Fewest loop points that revolve into a closed solid.
const MIN_LOOP_POINTS: usize = 3;

/// Coarseness of the exported mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub profile_points: usize,
    pub angular_resolution: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            profile_points: DEFAULT_EXPORT_POINTS,
            angular_resolution: DEFAULT_EXPORT_RESOLUTION,
        }
    }
}

/// Build the coarse printable mesh for a sampled profile curve.
///
/// The curve is reduced to `settings.profile_points`, capped onto the axis,
/// revolved at `settings.angular_resolution` steps, and stripped of the
/// zero-area faces that collapse onto the axis.
#[instrument(skip(curve), fields(points = curve.len()))]
pub fn export_mesh(curve: &[Point2d], settings: &ExportSettings) -> Result<TriangleMesh, ExportError> {
    let simplified = simplify_profile(curve, settings.profile_points);
    let outline = axis_closed_loop(&simplified);
    if outline.len() < MIN_LOOP_POINTS {
        return Err(ExportError::TooFewProfilePoints {
            required: MIN_LOOP_POINTS,
            provided: outline.len(),
        });
    }

    let mesh = revolve(&outline, settings.angular_resolution)?;
    let cleaned = mesh.without_degenerate_faces(&default_tolerance());
    debug!(
        loop_points = outline.len(),
        triangles = cleaned.triangle_count(),
        dropped = mesh.triangle_count() - cleaned.triangle_count(),
        "export mesh built"
    );
    Ok(cleaned)
}
