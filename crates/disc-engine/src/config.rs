use serde::{Deserialize, Serialize};

use disc_export::ExportSettings;
use disc_kernel::curve::{DEFAULT_SEGMENT_SAMPLES, MIN_SEGMENT_SAMPLES};
use disc_kernel::revolve::MIN_ANGULAR_RESOLUTION;
use disc_kernel::volume::FILL_FACTOR;

/// Upper bound on sample counts and angular resolutions.
pub const MAX_RESOLUTION: usize = 4096;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Resolutions and calibration constants of the geometry pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Samples per Bézier segment of the smooth profile.
    pub segment_samples: usize,
    /// Angular steps of the mesh used for volume.
    pub volume_resolution: usize,
    /// Angular steps of the preview mesh.
    pub display_resolution: usize,
    /// Profile points kept in the printable mesh.
    pub export_profile_points: usize,
    /// Angular steps of the printable mesh.
    pub export_resolution: usize,
    /// Material share of the bounding cylinder, for the analytic fallback.
    pub fill_factor: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let export = ExportSettings::default();
        Self {
            segment_samples: DEFAULT_SEGMENT_SAMPLES,
            volume_resolution: 32,
            display_resolution: 48,
            export_profile_points: export.profile_points,
            export_resolution: export.angular_resolution,
            fill_factor: FILL_FACTOR,
        }
    }
}

impl EngineConfig {
    /// Coarse meshes for fast interactive feedback.
    pub fn preview() -> Self {
        Self {
            segment_samples: 20,
            display_resolution: 24,
            ..Self::default()
        }
    }

    /// Finer meshes; the volume mesh converges toward the exact solid.
    pub fn precise() -> Self {
        Self {
            segment_samples: 100,
            volume_resolution: 128,
            display_resolution: 96,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = |field: &'static str, value: usize, min: usize| {
            if value < min || value > MAX_RESOLUTION {
                Err(ConfigError::Invalid {
                    field,
                    reason: format!("{value} is outside {min}-{MAX_RESOLUTION}"),
                })
            } else {
                Ok(())
            }
        };
        in_range("segment_samples", self.segment_samples, MIN_SEGMENT_SAMPLES)?;
        in_range("volume_resolution", self.volume_resolution, MIN_ANGULAR_RESOLUTION)?;
        in_range("display_resolution", self.display_resolution, MIN_ANGULAR_RESOLUTION)?;
        in_range("export_resolution", self.export_resolution, MIN_ANGULAR_RESOLUTION)?;
        in_range("export_profile_points", self.export_profile_points, 3)?;

        if !(self.fill_factor > 0.0 && self.fill_factor <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "fill_factor",
                reason: format!("{} is outside (0, 1]", self.fill_factor),
            });
        }
        Ok(())
    }

    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            profile_points: self.export_profile_points,
            angular_resolution: self.export_resolution,
        }
    }
}
