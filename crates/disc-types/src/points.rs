use serde::{Deserialize, Serialize};
use std::fmt;

use crate::POINT_COUNT;

/// One-based index of a profile control point (P1..P7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PointIndex(u8);

impl PointIndex {
    pub const FLIGHT_PLATE_TOP: Self = Self(1);
    pub const SHOULDER: Self = Self(2);
    pub const NOSE: Self = Self(3);
    pub const LOWER_RIM: Self = Self(4);
    pub const RIM_BOTTOM: Self = Self(5);
    pub const RIM_WALL: Self = Self(6);
    pub const FLIGHT_PLATE_BOTTOM: Self = Self(7);

    pub const ALL: [Self; POINT_COUNT] = [
        Self::FLIGHT_PLATE_TOP,
        Self::SHOULDER,
        Self::NOSE,
        Self::LOWER_RIM,
        Self::RIM_BOTTOM,
        Self::RIM_WALL,
        Self::FLIGHT_PLATE_BOTTOM,
    ];

    pub fn new(index: u8) -> Option<Self> {
        (1..=POINT_COUNT as u8).contains(&index).then_some(Self(index))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based array slot.
    pub fn slot(self) -> usize {
        usize::from(self.0) - 1
    }

    /// Human-readable role of the point.
    pub fn name(self) -> &'static str {
        match self.0 {
            1 => "Flight Plate Top",
            2 => "Shoulder",
            3 => "Nose",
            4 => "Lower Rim",
            5 => "Rim Bottom",
            6 => "Rim Wall",
            _ => "Flight Plate Bottom",
        }
    }

    /// Axis locks every profile applies to this point.
    pub fn default_lock(self) -> AxisLock {
        match self.0 {
            1 => AxisLock::BOTH,
            7 => AxisLock::X,
            _ => AxisLock::NONE,
        }
    }
}

impl fmt::Display for PointIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl TryFrom<u8> for PointIndex {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("point index {value} outside 1..={POINT_COUNT}"))
    }
}

impl From<PointIndex> for u8 {
    fn from(index: PointIndex) -> Self {
        index.0
    }
}

/// Which coordinates of a control point are fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisLock {
    pub x: bool,
    pub y: bool,
}

impl AxisLock {
    pub const NONE: Self = Self { x: false, y: false };
    pub const X: Self = Self { x: true, y: false };
    pub const BOTH: Self = Self { x: true, y: true };
}

/// A profile control point in the (x, y) cross-section plane, millimetres.
///
/// `x` is signed: presets place the profile at negative x and the revolution
/// uses `|x|` as the radius. `y = 0` is the flight-plate top and grows upward,
/// so the disc body lives at negative y.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub index: PointIndex,
    pub x: f64,
    pub y: f64,
    pub lock: AxisLock,
}

impl ControlPoint {
    pub fn new(index: PointIndex, x: f64, y: f64) -> Self {
        Self {
            index,
            x,
            y,
            lock: index.default_lock(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.index.name()
    }

    /// Distance from the axis of revolution.
    pub fn radius(&self) -> f64 {
        self.x.abs()
    }
}
