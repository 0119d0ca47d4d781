use disc_types::{ControlPoint, CurveSegment, POINT_COUNT, SEGMENT_COUNT, SegmentKey};

use crate::geometry::Point2d;
use crate::default_tolerance;

/// Samples per segment used by the interactive profile.
pub const DEFAULT_SEGMENT_SAMPLES: usize = 50;

/// Fewest samples that still include both segment endpoints.
pub const MIN_SEGMENT_SAMPLES: usize = 2;

/// Length of a profile built with `samples` per segment: seven segments
/// (six curves plus the closing edge) sharing their endpoints.
pub fn profile_len(samples: usize) -> usize {
    let n = samples.max(MIN_SEGMENT_SAMPLES);
    POINT_COUNT * n - (POINT_COUNT - 1)
}

/// Bézier handles for the segment `p1 -> p2`.
///
/// Each handle sits a third of the segment's extent away from its endpoint,
/// scaled by `curve_strength` and turned by `tangent_angle_deg`, then clamped
/// into the endpoints' bounding box so the curve cannot overshoot it.
pub fn bezier_handles(p1: Point2d, p2: Point2d, segment: &CurveSegment) -> (Point2d, Point2d) {
    let dx = (p2.x - p1.x).abs() / 3.0;
    let dy = (p2.y - p1.y).abs() / 3.0;
    let s = segment.curve_strength;
    let angle = segment.tangent_angle_deg.to_radians();
    let back = angle + std::f64::consts::PI;

    let cp1 = Point2d::new(p1.x + s * angle.cos() * dx, p1.y + s * angle.sin() * dy);
    let cp2 = Point2d::new(p2.x - s * back.cos() * dx, p2.y - s * back.sin() * dy);

    (clamp_to_box(cp1, p1, p2), clamp_to_box(cp2, p1, p2))
}

fn clamp_to_box(p: Point2d, a: Point2d, b: Point2d) -> Point2d {
    Point2d::new(
        p.x.clamp(a.x.min(b.x), a.x.max(b.x)),
        p.y.clamp(a.y.min(b.y), a.y.max(b.y)),
    )
}

/// Evaluate a cubic Bézier in Bernstein form at `t`.
pub fn cubic_bezier(p0: Point2d, p1: Point2d, p2: Point2d, p3: Point2d, t: f64) -> Point2d {
    let u = 1.0 - t;
    let b0 = u * u * u;
    let b1 = 3.0 * u * u * t;
    let b2 = 3.0 * u * t * t;
    let b3 = t * t * t;
    Point2d::new(
        b0 * p0.x + b1 * p1.x + b2 * p2.x + b3 * p3.x,
        b0 * p0.y + b1 * p1.y + b2 * p2.y + b3 * p3.y,
    )
}

fn sample_params(samples: usize) -> impl Iterator<Item = f64> {
    let last = (samples - 1) as f64;
    (0..samples).map(move |i| i as f64 / last)
}

/// `samples` points along the curved segment, both endpoints included.
pub fn sample_segment(p1: Point2d, p2: Point2d, segment: &CurveSegment, samples: usize) -> Vec<Point2d> {
    let samples = samples.max(MIN_SEGMENT_SAMPLES);
    let (c1, c2) = bezier_handles(p1, p2, segment);
    sample_params(samples)
        .map(|t| cubic_bezier(p1, c1, c2, p2, t))
        .collect()
}

/// `samples` evenly spaced points on the straight edge `a -> b`.
pub fn sample_line(a: Point2d, b: Point2d, samples: usize) -> Vec<Point2d> {
    let samples = samples.max(MIN_SEGMENT_SAMPLES);
    sample_params(samples).map(|t| a.lerp(&b, t)).collect()
}

/// Sample the closed profile P1 -> P2 -> ... -> P7 -> P1.
///
/// Segments 1-2 through 6-7 are cubic Béziers shaped by their
/// [`CurveSegment`]; the closing edge 7-1 is straight. Consecutive segments
/// share their joining point, so the result has [`profile_len`] points and
/// its last point equals its first.
pub fn build_profile(
    points: &[ControlPoint; POINT_COUNT],
    segments: &[CurveSegment; SEGMENT_COUNT],
    samples_per_segment: usize,
) -> Vec<Point2d> {
    let samples = samples_per_segment.max(MIN_SEGMENT_SAMPLES);
    let anchors: Vec<Point2d> = points.iter().map(|p| Point2d::new(p.x, p.y)).collect();

    let mut profile = Vec::with_capacity(profile_len(samples));
    for slot in 0..SEGMENT_COUNT {
        let segment = segments
            .iter()
            .find(|s| s.key.slot() == slot)
            .copied()
            .unwrap_or_else(|| CurveSegment::straight(SegmentKey::ALL[slot]));
        let sampled = sample_segment(anchors[slot], anchors[slot + 1], &segment, samples);
        let skip = usize::from(slot > 0);
        profile.extend(sampled.into_iter().skip(skip));
    }

    let closing = sample_line(anchors[POINT_COUNT - 1], anchors[0], samples);
    profile.extend(closing.into_iter().skip(1));
    profile
}

/// The coarse revolution loop through the control points themselves:
/// `(0, y1), (|x2|, y2), ..., (|x7|, y7), (0, y7)`.
pub fn landmark_profile(points: &[ControlPoint; POINT_COUNT]) -> Vec<Point2d> {
    let mut outline = Vec::with_capacity(POINT_COUNT + 1);
    outline.push(Point2d::new(0.0, points[0].y));
    outline.extend(points[1..].iter().map(|p| Point2d::new(p.radius(), p.y)));
    outline.push(Point2d::new(0.0, points[POINT_COUNT - 1].y));
    dedup_consecutive(outline)
}

/// Turn a profile polyline into a closed loop in the r >= 0 half-plane.
///
/// Coordinates are mirrored to `|x|`. Where the polyline starts or ends off
/// the axis, an axis point at the same height is added so the revolved solid
/// is capped. Consecutive duplicates and a trailing repeat of the first point
/// are removed.
pub fn axis_closed_loop(polyline: &[Point2d]) -> Vec<Point2d> {
    let tol = default_tolerance();
    let mut outline: Vec<Point2d> = Vec::with_capacity(polyline.len() + 2);

    if let (Some(first), Some(last)) = (polyline.first(), polyline.last()) {
        if first.x.abs() > tol.coincidence {
            outline.push(Point2d::new(0.0, first.y));
        }
        outline.extend(polyline.iter().map(Point2d::with_abs_x));
        if last.x.abs() > tol.coincidence {
            outline.push(Point2d::new(0.0, last.y));
        }
    }

    let mut outline = dedup_consecutive(outline);
    if outline.len() > 1 {
        if let (Some(first), Some(last)) = (outline.first(), outline.last()) {
            if tol.points_coincident(first, last) {
                outline.pop();
            }
        }
    }
    outline
}

fn dedup_consecutive(mut points: Vec<Point2d>) -> Vec<Point2d> {
    let tol = default_tolerance();
    points.dedup_by(|b, a| tol.points_coincident(a, b));
    points
}
