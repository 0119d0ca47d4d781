use std::fmt;

use serde::{Deserialize, Serialize};

use disc_types::{ControlPoint, PointIndex, POINT_COUNT};

/// Allowed interval and UI step of an editable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterRange {
    pub name: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterRange {
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn notice(&self, value: f64) -> Option<RangeNotice> {
        (!self.contains(value)).then_some(RangeNotice {
            parameter: self.name,
            value,
            min: self.min,
            max: self.max,
        })
    }
}

pub const RADIUS: ParameterRange = ParameterRange { name: "radius", min: 105.0, max: 115.0, step: 0.5 };
pub const SHOULDER_OFFSET: ParameterRange = ParameterRange { name: "shoulder_offset", min: 80.0, max: 100.0, step: 1.0 };
pub const RIM_WIDTH: ParameterRange = ParameterRange { name: "rim_width", min: 15.0, max: 35.0, step: 1.0 };
pub const TOTAL_HEIGHT: ParameterRange = ParameterRange { name: "total_height", min: 8.0, max: 20.0, step: 0.5 };
pub const FLIGHT_PLATE_THICKNESS: ParameterRange =
    ParameterRange { name: "flight_plate_thickness", min: 1.0, max: 4.0, step: 0.1 };
pub const CURVE_STRENGTH: ParameterRange = ParameterRange { name: "curve_strength", min: -2.0, max: 2.0, step: 0.1 };
pub const TANGENT_ANGLE: ParameterRange = ParameterRange { name: "tangent_angle", min: -180.0, max: 180.0, step: 10.0 };

/// Every editable range, for rendering controls.
pub const ALL_RANGES: [ParameterRange; 7] = [
    RADIUS,
    SHOULDER_OFFSET,
    RIM_WIDTH,
    TOTAL_HEIGHT,
    FLIGHT_PLATE_THICKNESS,
    CURVE_STRENGTH,
    TANGENT_ANGLE,
];

/// A parameter value outside its UI range. Such values are still applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeNotice {
    pub parameter: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

impl fmt::Display for RangeNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {:.1} is outside the supported range {:.1}-{:.1}",
            self.parameter, self.value, self.min, self.max
        )
    }
}

/// The five headline parameters. Each one drives one or more control
/// point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyParameters {
    pub radius: f64,
    pub shoulder_offset: f64,
    pub rim_width: f64,
    pub total_height: f64,
    pub flight_plate_thickness: f64,
}

impl KeyParameters {
    /// Read the parameters back from control points.
    pub fn read(points: &[ControlPoint; POINT_COUNT]) -> Self {
        let p = |i: PointIndex| points[i.slot()];
        Self {
            radius: p(PointIndex::NOSE).x.abs(),
            shoulder_offset: p(PointIndex::SHOULDER).x.abs(),
            rim_width: (p(PointIndex::NOSE).x - p(PointIndex::RIM_WALL).x).abs(),
            total_height: p(PointIndex::RIM_BOTTOM).y.abs(),
            flight_plate_thickness: p(PointIndex::FLIGHT_PLATE_BOTTOM).y.abs(),
        }
    }

    /// Write the parameters into control points.
    ///
    /// The nose sits at `-radius`, the lower rim a third of the rim width
    /// inboard of it, and the rim bottom and rim wall share `x = -radius + rim_width`.
    pub fn write(&self, points: &mut [ControlPoint; POINT_COUNT]) {
        let rim_x = -self.radius + self.rim_width;
        points[PointIndex::SHOULDER.slot()].x = -self.shoulder_offset;
        points[PointIndex::NOSE.slot()].x = -self.radius;
        points[PointIndex::LOWER_RIM.slot()].x = -self.radius + self.rim_width / 3.0;
        points[PointIndex::RIM_BOTTOM.slot()].x = rim_x;
        points[PointIndex::RIM_WALL.slot()].x = rim_x;
        points[PointIndex::RIM_BOTTOM.slot()].y = -self.total_height;
        points[PointIndex::FLIGHT_PLATE_BOTTOM.slot()].y = -self.flight_plate_thickness;
    }

    pub fn values(&self) -> [(&'static str, f64); 5] {
        [
            (RADIUS.name, self.radius),
            (SHOULDER_OFFSET.name, self.shoulder_offset),
            (RIM_WIDTH.name, self.rim_width),
            (TOTAL_HEIGHT.name, self.total_height),
            (FLIGHT_PLATE_THICKNESS.name, self.flight_plate_thickness),
        ]
    }

    pub fn out_of_range(&self) -> Vec<RangeNotice> {
        [
            RADIUS.notice(self.radius),
            SHOULDER_OFFSET.notice(self.shoulder_offset),
            RIM_WIDTH.notice(self.rim_width),
            TOTAL_HEIGHT.notice(self.total_height),
            FLIGHT_PLATE_THICKNESS.notice(self.flight_plate_thickness),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

pub(crate) fn curve_notices(strength: f64, angle: f64) -> impl Iterator<Item = RangeNotice> {
    [CURVE_STRENGTH.notice(strength), TANGENT_ANGLE.notice(angle)]
        .into_iter()
        .flatten()
}
