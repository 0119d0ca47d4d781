use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use disc_types::{
    ControlPoint, CurveSegment, PointIndex, SegmentKey, POINT_COUNT, SEGMENT_COUNT,
};

use crate::params::{curve_notices, KeyParameters, RangeNotice};

/// Coordinate axis of the profile plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors from editing a profile.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),

    #[error("{index} ({name}) has a locked {axis} coordinate")]
    AxisLocked {
        index: PointIndex,
        name: &'static str,
        axis: Axis,
    },

    #[error("invalid segment: {0}")]
    InvalidSegment(String),

    #[error("{what} must be finite, got {value}")]
    NonFinite { what: &'static str, value: f64 },
}

fn finite(what: &'static str, value: f64) -> Result<f64, ProfileError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ProfileError::NonFinite { what, value })
    }
}

/// Semantic parameters a preset seeds the profile from, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PresetParameters {
    pub radius: f64,
    pub shoulder_offset: f64,
    pub rim_width: f64,
    pub total_height: f64,
    pub flight_plate_thickness: f64,
    pub shoulder_drop: f64,
    pub nose_drop: f64,
}

impl PresetParameters {
    pub const DRIVER: Self = Self {
        radius: 105.0,
        shoulder_offset: 90.0,
        rim_width: 25.0,
        total_height: 12.0,
        flight_plate_thickness: 2.0,
        shoulder_drop: 3.0,
        nose_drop: 5.0,
    };

    pub fn seed_points(&self) -> [ControlPoint; POINT_COUNT] {
        let rim_x = -self.radius + self.rim_width;
        let coords = [
            (0.0, 0.0),
            (-self.shoulder_offset, -self.shoulder_drop),
            (-self.radius, -self.nose_drop),
            (-self.radius + self.rim_width / 3.0, -self.nose_drop - 3.0),
            (rim_x, -self.total_height),
            (rim_x, -self.shoulder_drop - 2.0),
            (0.0, -self.flight_plate_thickness),
        ];
        let mut points = PointIndex::ALL.map(|i| ControlPoint::new(i, 0.0, 0.0));
        for (point, (x, y)) in points.iter_mut().zip(coords) {
            point.x = x;
            point.y = y;
        }
        points
    }
}

/// Named starting shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Driver,
}

impl Preset {
    pub const ALL: [Self; 1] = [Self::Driver];

    pub fn name(self) -> &'static str {
        match self {
            Self::Driver => "driver",
        }
    }

    pub fn parameters(self) -> PresetParameters {
        match self {
            Self::Driver => PresetParameters::DRIVER,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ProfileError::UnknownPreset(s.to_string()))
    }
}

const KEY_LEN: usize = 2 * POINT_COUNT + 2 * SEGMENT_COUNT;

/// Exact identity of a profile's shape, usable as a hash key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileKey([u64; KEY_LEN]);

fn canonical_bits(value: f64) -> u64 {
    // +0.0 and -0.0 describe the same shape
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

/// The disc cross-section: seven control points and the six curve
/// segments between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscProfile {
    preset: Preset,
    points: [ControlPoint; POINT_COUNT],
    segments: [CurveSegment; SEGMENT_COUNT],
}

impl Default for DiscProfile {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

impl DiscProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_preset(preset: Preset) -> Self {
        Self {
            preset,
            points: preset.parameters().seed_points(),
            segments: SegmentKey::ALL.map(CurveSegment::straight),
        }
    }

    /// Re-seed every point and segment from the preset.
    pub fn reset(&mut self) {
        *self = Self::from_preset(self.preset);
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn points(&self) -> &[ControlPoint; POINT_COUNT] {
        &self.points
    }

    pub fn point(&self, index: PointIndex) -> &ControlPoint {
        &self.points[index.slot()]
    }

    pub fn segments(&self) -> &[CurveSegment; SEGMENT_COUNT] {
        &self.segments
    }

    pub fn segment(&self, key: SegmentKey) -> &CurveSegment {
        &self.segments[key.slot()]
    }

    /// Move a point. Writing a locked coordinate is allowed only if it
    /// leaves the value unchanged.
    pub fn set_point(&mut self, index: PointIndex, x: f64, y: f64) -> Result<(), ProfileError> {
        let x = finite("x", x)?;
        let y = finite("y", y)?;
        let point = &mut self.points[index.slot()];
        let locked = |axis| ProfileError::AxisLocked {
            index,
            name: index.name(),
            axis,
        };
        if point.lock.x && x != point.x {
            return Err(locked(Axis::X));
        }
        if point.lock.y && y != point.y {
            return Err(locked(Axis::Y));
        }
        point.x = x;
        point.y = y;
        Ok(())
    }

    pub fn set_segment(&mut self, key: SegmentKey, curve_strength: f64, tangent_angle_deg: f64) -> Result<(), ProfileError> {
        let segment = &mut self.segments[key.slot()];
        segment.curve_strength = finite("curve_strength", curve_strength)?;
        segment.tangent_angle_deg = finite("tangent_angle", tangent_angle_deg)?;
        Ok(())
    }

    /// Replace all segments at once, e.g. from a saved design.
    pub fn set_segments(&mut self, segments: &[CurveSegment]) -> Result<(), ProfileError> {
        if segments.len() != SEGMENT_COUNT {
            return Err(ProfileError::InvalidSegment(format!(
                "expected {SEGMENT_COUNT} segments, got {}",
                segments.len()
            )));
        }
        for key in SegmentKey::ALL {
            if !segments.iter().any(|s| s.key == key) {
                return Err(ProfileError::InvalidSegment(format!("missing segment {key}")));
            }
        }
        for s in segments {
            finite("curve_strength", s.curve_strength)?;
            finite("tangent_angle", s.tangent_angle_deg)?;
        }
        for s in segments {
            self.segments[s.key.slot()] = *s;
        }
        Ok(())
    }

    pub fn key_parameters(&self) -> KeyParameters {
        KeyParameters::read(&self.points)
    }

    pub fn apply_key_parameters(&mut self, params: &KeyParameters) -> Result<(), ProfileError> {
        for (name, value) in params.values() {
            finite(name, value)?;
        }
        params.write(&mut self.points);
        Ok(())
    }

    fn edit_key_parameters(&mut self, edit: impl FnOnce(&mut KeyParameters)) -> Result<(), ProfileError> {
        let mut params = self.key_parameters();
        edit(&mut params);
        self.apply_key_parameters(&params)
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), ProfileError> {
        self.edit_key_parameters(|p| p.radius = radius)
    }

    pub fn set_shoulder_offset(&mut self, offset: f64) -> Result<(), ProfileError> {
        self.edit_key_parameters(|p| p.shoulder_offset = offset)
    }

    pub fn set_rim_width(&mut self, width: f64) -> Result<(), ProfileError> {
        self.edit_key_parameters(|p| p.rim_width = width)
    }

    pub fn set_total_height(&mut self, height: f64) -> Result<(), ProfileError> {
        self.edit_key_parameters(|p| p.total_height = height)
    }

    pub fn set_flight_plate_thickness(&mut self, thickness: f64) -> Result<(), ProfileError> {
        self.edit_key_parameters(|p| p.flight_plate_thickness = thickness)
    }

    /// Parameters currently outside their UI ranges.
    pub fn range_notices(&self) -> Vec<RangeNotice> {
        let mut notices = self.key_parameters().out_of_range();
        for s in &self.segments {
            notices.extend(curve_notices(s.curve_strength, s.tangent_angle_deg));
        }
        notices
    }

    pub fn cache_key(&self) -> ProfileKey {
        let mut bits = [0u64; KEY_LEN];
        let coords = self
            .points
            .iter()
            .flat_map(|p| [p.x, p.y])
            .chain(self.segments.iter().flat_map(|s| [s.curve_strength, s.tangent_angle_deg]));
        for (slot, value) in bits.iter_mut().zip(coords) {
            *slot = canonical_bits(value);
        }
        ProfileKey(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_seed_points() {
        let profile = DiscProfile::new();
        let coords: Vec<(f64, f64)> = profile.points().iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            coords,
            [
                (0.0, 0.0),
                (-90.0, -3.0),
                (-105.0, -5.0),
                (-105.0 + 25.0 / 3.0, -8.0),
                (-80.0, -12.0),
                (-80.0, -5.0),
                (0.0, -2.0),
            ]
        );
        assert!(profile.segments().iter().all(CurveSegment::is_straight));
    }

    #[test]
    fn test_locked_axis_rejected() {
        let mut profile = DiscProfile::new();
        let err = profile.set_point(PointIndex::FLIGHT_PLATE_TOP, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, ProfileError::AxisLocked { axis: Axis::Y, .. }));
        let err = profile.set_point(PointIndex::FLIGHT_PLATE_BOTTOM, -3.0, -2.0).unwrap_err();
        assert!(matches!(err, ProfileError::AxisLocked { axis: Axis::X, .. }));

        // y of P7 is free
        profile.set_point(PointIndex::FLIGHT_PLATE_BOTTOM, 0.0, -3.0).unwrap();
        assert_eq!(profile.point(PointIndex::FLIGHT_PLATE_BOTTOM).y, -3.0);
    }

    #[test]
    fn test_set_point_rejects_nan() {
        let mut profile = DiscProfile::new();
        assert!(profile.set_point(PointIndex::NOSE, f64::NAN, 0.0).is_err());
        assert_eq!(profile, DiscProfile::new());
    }

    #[test]
    fn test_radius_cascade_keeps_rim_width() {
        let mut profile = DiscProfile::new();
        profile.set_radius(110.0).unwrap();
        let params = profile.key_parameters();
        assert_eq!(params.radius, 110.0);
        assert_eq!(params.rim_width, 25.0);
        assert_eq!(profile.point(PointIndex::RIM_WALL).x, -85.0);
    }

    #[test]
    fn test_reset_restores_preset() {
        let mut profile = DiscProfile::new();
        profile.set_total_height(18.0).unwrap();
        profile.set_segment(SegmentKey::ALL[2], 1.0, 45.0).unwrap();
        profile.reset();
        assert_eq!(profile, DiscProfile::new());
    }

    #[test]
    fn test_cache_key_tracks_shape() {
        let a = DiscProfile::new();
        let mut b = DiscProfile::new();
        assert_eq!(a.cache_key(), b.cache_key());
        b.set_segment(SegmentKey::ALL[0], 0.1, 0.0).unwrap();
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn test_preset_parse() {
        assert_eq!("Driver".parse::<Preset>().unwrap(), Preset::Driver);
        assert!(matches!("putter".parse::<Preset>(), Err(ProfileError::UnknownPreset(_))));
    }

    #[test]
    fn test_set_segments_requires_all_keys() {
        let mut profile = DiscProfile::new();
        let mut segments = SegmentKey::ALL.map(CurveSegment::straight).to_vec();
        segments[5].key = SegmentKey::ALL[0];
        assert!(profile.set_segments(&segments).is_err());
        assert!(profile.set_segments(&segments[..3]).is_err());
    }
}
