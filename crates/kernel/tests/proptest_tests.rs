//! Property-based tests for profile and mesh invariants using the `proptest` crate.

use proptest::prelude::*;

use disc_kernel::audit::audit_mesh;
use disc_kernel::curve::{bezier_handles, build_profile, profile_len};
use disc_kernel::geometry::Point2d;
use disc_kernel::revolve::revolve;
use disc_kernel::volume::{FallbackInputs, estimate_solid_volume, estimate_volume};
use disc_types::{ControlPoint, CurveSegment, POINT_COUNT, PointIndex, SEGMENT_COUNT, SegmentKey};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Arbitrary profile coordinate in the disc's working half-plane.
fn arb_coord() -> impl Strategy<Value = (f64, f64)> {
    (-130.0f64..0.0, -25.0f64..0.0)
}

fn arb_points() -> impl Strategy<Value = [ControlPoint; POINT_COUNT]> {
    prop::collection::vec(arb_coord(), POINT_COUNT).prop_map(|coords| {
        let mut points = PointIndex::ALL.map(|i| ControlPoint::new(i, 0.0, 0.0));
        for (p, (x, y)) in points.iter_mut().zip(coords) {
            p.x = x;
            p.y = y;
        }
        points
    })
}

fn arb_segments() -> impl Strategy<Value = [CurveSegment; SEGMENT_COUNT]> {
    prop::collection::vec((-2.0f64..2.0, -180.0f64..180.0), SEGMENT_COUNT).prop_map(|params| {
        let mut segments = SegmentKey::ALL.map(CurveSegment::straight);
        for (s, (strength, angle)) in segments.iter_mut().zip(params) {
            s.curve_strength = strength;
            s.tangent_angle_deg = angle;
        }
        segments
    })
}

const TOL: f64 = 1e-9;

// ---------------------------------------------------------------------------
// 1. Profiles are closed and have 7n - 6 points
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn profile_closed_with_expected_length(
        points in arb_points(),
        segments in arb_segments(),
        samples in 2usize..80,
    ) {
        let profile = build_profile(&points, &segments, samples);
        prop_assert_eq!(profile.len(), 7 * samples - 6);
        prop_assert_eq!(profile.len(), profile_len(samples));
        prop_assert_eq!(profile.first(), profile.last());
    }
}

// ---------------------------------------------------------------------------
// 2. Building a profile is deterministic
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn profile_build_idempotent(
        points in arb_points(),
        segments in arb_segments(),
        samples in 2usize..60,
    ) {
        let a = build_profile(&points, &segments, samples);
        let b = build_profile(&points, &segments, samples);
        prop_assert_eq!(a, b);
    }
}

// ---------------------------------------------------------------------------
// 3. Bézier handles never leave the segment's bounding box
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn handles_clamped(
        (ax, ay) in arb_coord(),
        (bx, by) in arb_coord(),
        strength in -2.0f64..2.0,
        angle in -180.0f64..180.0,
    ) {
        let a = Point2d::new(ax, ay);
        let b = Point2d::new(bx, by);
        let seg = CurveSegment { key: SegmentKey::ALL[0], curve_strength: strength, tangent_angle_deg: angle };
        let (c1, c2) = bezier_handles(a, b, &seg);
        for c in [c1, c2] {
            prop_assert!(c.x >= ax.min(bx) && c.x <= ax.max(bx));
            prop_assert!(c.y >= ay.min(by) && c.y <= ay.max(by));
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Revolved rectangles are watertight prisms of the expected volume
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn revolved_rectangle_watertight(
        radius in 1.0f64..200.0,
        height in 0.5f64..50.0,
        steps in 3usize..64,
    ) {
        let outline = [
            Point2d::new(0.0, height),
            Point2d::new(radius, height),
            Point2d::new(radius, 0.0),
            Point2d::new(0.0, 0.0),
        ];
        let mesh = revolve(&outline, steps).unwrap();
        prop_assert!(audit_mesh(&mesh).is_watertight());

        // inscribed regular polygon prism
        let m = steps as f64;
        let expected = 0.5 * m * (std::f64::consts::TAU / m).sin() * radius * radius * height;
        let v = estimate_volume(&mesh).unwrap();
        prop_assert!(!v.flipped);
        prop_assert!((v.volume_mm3 - expected).abs() / expected < TOL * 1e3,
            "volume {} != prism {}", v.volume_mm3, expected);
    }
}

// ---------------------------------------------------------------------------
// 5. Revolving is deterministic
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn revolve_idempotent(
        points in arb_points(),
        segments in arb_segments(),
        steps in 3usize..24,
    ) {
        let profile = build_profile(&points, &segments, 6);
        prop_assert_eq!(revolve(&profile, steps).unwrap(), revolve(&profile, steps).unwrap());
    }
}

// ---------------------------------------------------------------------------
// 6. The solid volume estimate is always finite and positive
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn solid_volume_always_usable(
        coords in prop::collection::vec(arb_coord(), 0..12),
        steps in 0usize..40,
        radius in prop_oneof![Just(f64::NAN), -10.0f64..300.0],
        thickness in prop_oneof![Just(f64::INFINITY), -5.0f64..40.0],
    ) {
        let outline: Vec<Point2d> = coords.into_iter().map(|(x, y)| Point2d::new(x, y)).collect();
        let est = estimate_solid_volume(&outline, steps, &FallbackInputs::new(radius, thickness));
        prop_assert!(est.volume_mm3().is_finite());
        prop_assert!(est.volume_mm3() > 0.0);

        let again = estimate_solid_volume(&outline, steps, &FallbackInputs::new(radius, thickness));
        prop_assert_eq!(est.volume_mm3().to_bits(), again.volume_mm3().to_bits());
    }
}
