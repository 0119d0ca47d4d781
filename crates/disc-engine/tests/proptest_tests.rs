//! Property-based tests for derived dimensions using the `proptest` crate.

use proptest::prelude::*;

use disc_engine::{compute, validate_geometry, DiscProfile, EngineConfig, KeyParameters};
use disc_types::{Material, SegmentKey, SEGMENT_COUNT};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Key parameters anywhere inside the UI ranges.
fn arb_key_parameters() -> impl Strategy<Value = KeyParameters> {
    (105.0f64..=115.0, 80.0f64..=100.0, 15.0f64..=35.0, 8.0f64..=20.0, 1.0f64..=4.0).prop_map(
        |(radius, shoulder_offset, rim_width, total_height, flight_plate_thickness)| KeyParameters {
            radius,
            shoulder_offset,
            rim_width,
            total_height,
            flight_plate_thickness,
        },
    )
}

fn arb_curves() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((-2.0f64..=2.0, -180.0f64..=180.0), SEGMENT_COUNT)
}

fn profile_with_height(height: f64) -> DiscProfile {
    let mut profile = DiscProfile::new();
    profile.set_total_height(height).unwrap();
    profile
}

// ---------------------------------------------------------------------------
// 1. Taller discs are thicker and never lighter
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn total_height_is_monotonic(low in 8.0f64..20.0, step in 0.01f64..4.0) {
        let config = EngineConfig::default();
        let shorter = compute(&profile_with_height(low), Material::Petg, &config);
        let taller = compute(&profile_with_height(low + step), Material::Petg, &config);

        prop_assert!(!shorter.weight_is_approximate);
        prop_assert!(!taller.weight_is_approximate);
        prop_assert!(taller.disc_thickness > shorter.disc_thickness);
        prop_assert!(taller.estimated_weight >= shorter.estimated_weight);
    }
}

// ---------------------------------------------------------------------------
// 2. Curve shape does not move the landmarks the dimensions are read from
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn curve_parameters_leave_dimensions_unchanged(curves in arb_curves()) {
        let config = EngineConfig::default();
        let straight = DiscProfile::new();
        let mut curved = straight.clone();
        for (key, (strength, angle)) in SegmentKey::ALL.into_iter().zip(curves) {
            curved.set_segment(key, strength, angle).unwrap();
        }

        prop_assert_eq!(
            compute(&curved, Material::Petg, &config),
            compute(&straight, Material::Petg, &config)
        );
        prop_assert_eq!(validate_geometry(curved.points()), validate_geometry(straight.points()));
    }
}

// ---------------------------------------------------------------------------
// 3. Weight is finite and positive across the whole parameter space
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn weight_always_finite_and_positive(params in arb_key_parameters()) {
        let mut profile = DiscProfile::new();
        profile.apply_key_parameters(&params).unwrap();

        let dims = compute(&profile, Material::Pla, &EngineConfig::preview());
        prop_assert!(dims.volume_cm3.is_finite() && dims.volume_cm3 > 0.0);
        prop_assert!(dims.estimated_weight.is_finite() && dims.estimated_weight > 0.0);
        prop_assert_eq!(dims.diameter, 2.0 * params.radius);
    }
}
