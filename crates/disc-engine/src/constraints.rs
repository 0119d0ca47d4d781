use std::fmt;

use serde::Serialize;

use disc_types::{ControlPoint, PointIndex, POINT_COUNT};

/// Smallest nose radius that still gives a full-size disc (mm).
pub const MIN_NOSE_RADIUS: f64 = 105.0;
/// Deepest the rim bottom may sit below the flight-plate top (mm).
pub const MAX_RIM_BOTTOM_DEPTH: f64 = 20.0;
/// Rim bottom and rim wall x may differ by at most this much (mm).
pub const RIM_WALL_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstraintRule {
    ShoulderPlacement,
    NoseRadius,
    RimWallVertical,
    RimBottomDepth,
    FlightPlateBetween,
    DescendingHeights,
}

/// A broken geometric rule. Advisory: the design is still computed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstraintViolation {
    pub rule: ConstraintRule,
    pub message: String,
}

impl ConstraintViolation {
    fn new(rule: ConstraintRule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Check the raw control points against the geometric rules.
pub fn validate_geometry(points: &[ControlPoint; POINT_COUNT]) -> Vec<ConstraintViolation> {
    use ConstraintRule::*;

    let p = |i: PointIndex| &points[i.slot()];
    let shoulder = p(PointIndex::SHOULDER);
    let nose = p(PointIndex::NOSE);
    let rim_bottom = p(PointIndex::RIM_BOTTOM);
    let rim_wall = p(PointIndex::RIM_WALL);
    let top = p(PointIndex::FLIGHT_PLATE_TOP);
    let plate_bottom = p(PointIndex::FLIGHT_PLATE_BOTTOM);

    let mut violations = Vec::new();

    if shoulder.radius() >= nose.radius() {
        violations.push(ConstraintViolation::new(
            ShoulderPlacement,
            format!(
                "P2 (Shoulder) at r={:.1} must sit inboard of P3 (Nose) at r={:.1}",
                shoulder.radius(),
                nose.radius()
            ),
        ));
    }
    if shoulder.radius() <= rim_wall.radius() {
        violations.push(ConstraintViolation::new(
            ShoulderPlacement,
            format!(
                "P2 (Shoulder) at r={:.1} must sit outboard of P6 (Rim Wall) at r={:.1}",
                shoulder.radius(),
                rim_wall.radius()
            ),
        ));
    }
    if nose.radius() < MIN_NOSE_RADIUS {
        violations.push(ConstraintViolation::new(
            NoseRadius,
            format!(
                "P3 (Nose) at r={:.1} must be at least {MIN_NOSE_RADIUS:.1} from the axis",
                nose.radius()
            ),
        ));
    }
    if (rim_bottom.x - rim_wall.x).abs() > RIM_WALL_TOLERANCE {
        violations.push(ConstraintViolation::new(
            RimWallVertical,
            format!(
                "P5 (Rim Bottom) x={:.1} and P6 (Rim Wall) x={:.1} must align vertically",
                rim_bottom.x, rim_wall.x
            ),
        ));
    }
    if rim_bottom.y.abs() > MAX_RIM_BOTTOM_DEPTH {
        violations.push(ConstraintViolation::new(
            RimBottomDepth,
            format!(
                "P5 (Rim Bottom) depth {:.1} exceeds {MAX_RIM_BOTTOM_DEPTH:.1}",
                rim_bottom.y.abs()
            ),
        ));
    }
    if !(plate_bottom.y < top.y && plate_bottom.y > shoulder.y) {
        violations.push(ConstraintViolation::new(
            FlightPlateBetween,
            format!(
                "P7 (Flight Plate Bottom) y={:.1} must lie between P2 y={:.1} and P1 y={:.1}",
                plate_bottom.y, shoulder.y, top.y
            ),
        ));
    }

    let descent = [
        PointIndex::FLIGHT_PLATE_TOP,
        PointIndex::SHOULDER,
        PointIndex::NOSE,
        PointIndex::LOWER_RIM,
        PointIndex::RIM_BOTTOM,
    ];
    for pair in descent.windows(2) {
        let (upper, lower) = (p(pair[0]), p(pair[1]));
        if upper.y <= lower.y {
            violations.push(ConstraintViolation::new(
                DescendingHeights,
                format!(
                    "{} ({}) must be above {} ({})",
                    upper.index,
                    upper.name(),
                    lower.index,
                    lower.name()
                ),
            ));
        }
    }

    violations
}
