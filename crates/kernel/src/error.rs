use std::fmt;

/// Failures while turning a profile into a mesh or a mesh into a volume.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("insufficient geometry: {0}")]
    InsufficientGeometry(Insufficient),

    #[error(
        "mesh is not watertight: {boundary_edges} boundary, {non_manifold_edges} non-manifold, \
         {inconsistent_edges} inconsistently oriented edges, {invalid_faces} invalid faces"
    )]
    NonWatertightMesh {
        boundary_edges: usize,
        non_manifold_edges: usize,
        inconsistent_edges: usize,
        invalid_faces: usize,
    },

    #[error("profile coordinate ({x}, {y}) is not finite")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("mesh needs {count} vertices, more than 32-bit indices can address")]
    TooManyVertices { count: usize },
}

/// Which input was too small to build a mesh from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insufficient {
    ProfilePoints { required: usize, provided: usize },
    AngularResolution { required: usize, provided: usize },
}

impl fmt::Display for Insufficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProfilePoints { required, provided } => {
                write!(f, "profile has {provided} points, need at least {required}")
            }
            Self::AngularResolution { required, provided } => {
                write!(f, "need at least {required} angular steps, got {provided}")
            }
        }
    }
}
