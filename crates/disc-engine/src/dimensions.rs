use serde::Serialize;
use tracing::{debug, instrument};

use disc_kernel::volume::{estimate_solid_volume, FallbackInputs, VolumeEstimate};
use disc_kernel::landmark_profile;
use disc_types::{ControlPoint, DerivedDimensions, Material, PointIndex, POINT_COUNT};

use crate::config::EngineConfig;
use crate::profile::DiscProfile;

/// Linear dimensions read straight off the control points (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurements {
    pub radius: f64,
    pub diameter: f64,
    pub flight_plate_thickness: f64,
    pub disc_thickness: f64,
    pub rim_depth: f64,
    pub rim_width: f64,
}

pub fn measure(points: &[ControlPoint; POINT_COUNT]) -> Measurements {
    let p = |i: PointIndex| points[i.slot()];
    let top = p(PointIndex::FLIGHT_PLATE_TOP);
    let nose = p(PointIndex::NOSE);
    let rim_bottom = p(PointIndex::RIM_BOTTOM);

    let radius = nose.radius();
    Measurements {
        radius,
        diameter: 2.0 * radius,
        flight_plate_thickness: (top.y - p(PointIndex::FLIGHT_PLATE_BOTTOM).y).abs(),
        disc_thickness: (top.y - rim_bottom.y).abs(),
        rim_depth: (rim_bottom.y - nose.y).abs(),
        rim_width: (p(PointIndex::RIM_WALL).x - nose.x).abs(),
    }
}

/// Inputs for the analytic volume used when the mesh cannot be trusted.
pub fn fallback_inputs(m: &Measurements, config: &EngineConfig) -> FallbackInputs {
    FallbackInputs::new(m.radius, m.disc_thickness).with_fill_factor(config.fill_factor)
}

/// Volume of the solid swept by the landmark outline of the profile.
pub fn landmark_volume(profile: &DiscProfile, config: &EngineConfig) -> VolumeEstimate {
    let m = measure(profile.points());
    estimate_solid_volume(
        &landmark_profile(profile.points()),
        config.volume_resolution,
        &fallback_inputs(&m, config),
    )
}

/// Combine measurements, a volume and a material into derived dimensions.
pub fn derive(profile: &DiscProfile, material: Material, volume: &VolumeEstimate) -> DerivedDimensions {
    let m = measure(profile.points());
    let volume_cm3 = volume.volume_cm3();
    DerivedDimensions {
        radius: m.radius,
        diameter: m.diameter,
        flight_plate_thickness: m.flight_plate_thickness,
        disc_thickness: m.disc_thickness,
        rim_depth: m.rim_depth,
        rim_width: m.rim_width,
        volume_cm3,
        estimated_weight: volume_cm3 * material.density_g_cm3(),
        weight_is_approximate: volume.is_approximate(),
    }
}

/// Derived dimensions of a profile in a material. Never fails: a profile
/// whose mesh is unusable gets the analytic volume instead.
#[instrument(skip(profile, config), fields(material = material.key()))]
pub fn compute(profile: &DiscProfile, material: Material, config: &EngineConfig) -> DerivedDimensions {
    let volume = landmark_volume(profile, config);
    let dims = derive(profile, material, &volume);
    debug!(
        diameter = dims.diameter,
        weight = dims.estimated_weight,
        approximate = dims.weight_is_approximate,
        "dimensions computed"
    );
    dims
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_driver_measurements() {
        let m = measure(DiscProfile::new().points());
        assert_eq!(m.radius, 105.0);
        assert_eq!(m.diameter, 210.0);
        assert_eq!(m.flight_plate_thickness, 2.0);
        assert_eq!(m.disc_thickness, 12.0);
        assert_eq!(m.rim_depth, 7.0);
        assert_eq!(m.rim_width, 25.0);
    }

    #[test]
    fn test_driver_weight_from_mesh() {
        let dims = compute(&DiscProfile::new(), Material::Petg, &EngineConfig::default());
        assert!(!dims.weight_is_approximate);
        assert_relative_eq!(dims.volume_cm3, 117.9068, epsilon = 1e-3);
        assert!((150.0..=180.0).contains(&dims.estimated_weight), "{}", dims.estimated_weight);
    }

    #[test]
    fn test_weight_scales_with_density() {
        let profile = DiscProfile::new();
        let config = EngineConfig::default();
        let petg = compute(&profile, Material::Petg, &config);
        let abs = compute(&profile, Material::Abs, &config);
        assert_relative_eq!(petg.volume_cm3, abs.volume_cm3);
        assert_relative_eq!(abs.estimated_weight / petg.estimated_weight, 1.05 / 1.28, epsilon = 1e-12);
    }

    #[test]
    fn test_collapsed_profile_uses_fallback() {
        let mut profile = DiscProfile::new();
        // fold the rim bottom back across the top surface
        profile.set_point(PointIndex::RIM_BOTTOM, -80.0, 5.0).unwrap();
        let dims = compute(&profile, Material::Petg, &EngineConfig::default());
        assert!(dims.weight_is_approximate);
        assert!(dims.estimated_weight > 0.0);
    }
}
