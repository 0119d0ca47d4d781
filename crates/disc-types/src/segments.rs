use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{PointIndex, SEGMENT_COUNT};

/// Identifies the curve between two adjacent control points, smaller index
/// first ("2-3"). The closing edge 7-1 is always straight and has no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SegmentKey {
    start: PointIndex,
}

impl SegmentKey {
    pub const ALL: [Self; SEGMENT_COUNT] = [
        Self { start: PointIndex::FLIGHT_PLATE_TOP },
        Self { start: PointIndex::SHOULDER },
        Self { start: PointIndex::NOSE },
        Self { start: PointIndex::LOWER_RIM },
        Self { start: PointIndex::RIM_BOTTOM },
        Self { start: PointIndex::RIM_WALL },
    ];

    /// Key for the segment between `a` and `b`, in either order.
    pub fn between(a: PointIndex, b: PointIndex) -> Option<Self> {
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        (hi.get() == lo.get() + 1).then_some(Self { start: lo })
    }

    pub fn start(self) -> PointIndex {
        self.start
    }

    pub fn end(self) -> PointIndex {
        // start is at most 6, so start + 1 is a valid index
        PointIndex::ALL[self.start.slot() + 1]
    }

    /// Zero-based array slot.
    pub fn slot(self) -> usize {
        self.start.slot()
    }
}

impl fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.get(), self.end().get())
    }
}

impl FromStr for SegmentKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once('-')
            .ok_or_else(|| format!("segment key '{s}' is not of the form 'a-b'"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u8>()
                .ok()
                .and_then(PointIndex::new)
                .ok_or_else(|| format!("segment key '{s}' names an unknown point"))
        };
        let (a, b) = (parse(a)?, parse(b)?);
        Self::between(a, b).ok_or_else(|| format!("segment key '{s}' does not join adjacent points"))
    }
}

impl TryFrom<String> for SegmentKey {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SegmentKey> for String {
    fn from(key: SegmentKey) -> Self {
        key.to_string()
    }
}

/// Shape parameters of one Bézier segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub key: SegmentKey,
    /// Scale of the tangent handles; 0 gives a straight segment.
    pub curve_strength: f64,
    /// Handle direction in degrees.
    pub tangent_angle_deg: f64,
}

impl CurveSegment {
    pub fn straight(key: SegmentKey) -> Self {
        Self {
            key,
            curve_strength: 0.0,
            tangent_angle_deg: 0.0,
        }
    }

    pub fn is_straight(&self) -> bool {
        self.curve_strength == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_orders_smaller_first() {
        let key = SegmentKey::between(PointIndex::NOSE, PointIndex::SHOULDER).unwrap();
        assert_eq!(key.to_string(), "2-3");
        assert_eq!(key.slot(), 1);
    }

    #[test]
    fn test_closing_edge_has_no_key() {
        assert!(SegmentKey::between(PointIndex::FLIGHT_PLATE_BOTTOM, PointIndex::FLIGHT_PLATE_TOP).is_none());
        assert!("7-1".parse::<SegmentKey>().is_err());
        assert!("1-3".parse::<SegmentKey>().is_err());
    }

    #[test]
    fn test_parse_accepts_reversed_pair() {
        let key: SegmentKey = "5-4".parse().unwrap();
        assert_eq!(key, SegmentKey::ALL[3]);
    }

    #[test]
    fn test_all_keys_cover_chain() {
        let names: Vec<String> = SegmentKey::ALL.iter().map(|k| k.to_string()).collect();
        assert_eq!(names, ["1-2", "2-3", "3-4", "4-5", "5-6", "6-7"]);
    }
}
