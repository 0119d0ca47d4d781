use serde::{Deserialize, Serialize};

/// Dimensions derived from a profile, in millimetres, cm³ and grams.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedDimensions {
    pub radius: f64,
    pub diameter: f64,
    pub flight_plate_thickness: f64,
    pub disc_thickness: f64,
    pub rim_depth: f64,
    pub rim_width: f64,
    pub volume_cm3: f64,
    pub estimated_weight: f64,
    /// True when the volume came from the analytic fallback instead of the mesh.
    pub weight_is_approximate: bool,
}
