use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument};

use disc_export::{dimension_table, export_mesh, write_ascii_stl, write_binary_stl, ExportError, TableRow};
use disc_kernel::{axis_closed_loop, build_profile, revolve, GeometryError, Point2d, TriangleMesh, VolumeEstimate};
use disc_types::{DerivedDimensions, Material, PointIndex, SegmentKey};

use crate::cache::{GeometryCache, GeometryCacheStats, MeshTier};
use crate::config::EngineConfig;
use crate::constraints::{validate_geometry, ConstraintViolation};
use crate::dimensions::{derive, landmark_volume};
use crate::materials::resolve_material;
use crate::params::{KeyParameters, RangeNotice};
use crate::profile::{DiscProfile, Preset, ProfileError};
use crate::standards::{check_standards, StandardsReport};
use crate::undo::{Command, UndoStack};

/// Everything derived from the current design in one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignReport {
    pub material: Material,
    pub key_parameters: KeyParameters,
    pub dimensions: DerivedDimensions,
    pub volume: VolumeEstimate,
    pub constraint_violations: Vec<ConstraintViolation>,
    pub standards: StandardsReport,
    pub range_notices: Vec<RangeNotice>,
}

impl DesignReport {
    /// Legal by the standards and free of geometric violations.
    pub fn is_compliant(&self) -> bool {
        self.standards.is_legal() && self.constraint_violations.is_empty()
    }
}

/// The editable design: one profile, one material, their history and the
/// geometry derived from them.
///
/// Every edit is recorded for undo and drops all cached geometry.
#[derive(Debug)]
pub struct DesignSession {
    profile: DiscProfile,
    material: Material,
    config: EngineConfig,
    history: UndoStack,
    cache: GeometryCache,
}

impl Default for DesignSession {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl DesignSession {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_preset(Preset::default(), config)
    }

    pub fn with_preset(preset: Preset, config: EngineConfig) -> Self {
        Self {
            profile: DiscProfile::from_preset(preset),
            material: Material::default(),
            config,
            history: UndoStack::new(),
            cache: GeometryCache::new(),
        }
    }

    pub fn profile(&self) -> &DiscProfile {
        &self.profile
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache_stats(&self) -> GeometryCacheStats {
        self.cache.stats()
    }

    // ── Editing ────────────────────────────────────────────────────────

    /// Apply an edit to a copy of the profile and commit it if it succeeds
    /// and changes something.
    pub fn edit(&mut self, f: impl FnOnce(&mut DiscProfile) -> Result<(), ProfileError>) -> Result<(), ProfileError> {
        let mut edited = self.profile.clone();
        f(&mut edited)?;
        self.commit(edited);
        Ok(())
    }

    /// Replace the profile, recording the change. No-op if nothing changed.
    fn commit(&mut self, edited: DiscProfile) {
        if edited == self.profile {
            return;
        }
        let before = std::mem::replace(&mut self.profile, edited);
        self.history.push(Command::EditProfile {
            before: Box::new(before),
            after: Box::new(self.profile.clone()),
        });
        self.cache.clear();
    }

    pub fn set_point(&mut self, index: PointIndex, x: f64, y: f64) -> Result<(), ProfileError> {
        self.edit(|p| p.set_point(index, x, y))
    }

    pub fn set_segment(&mut self, key: SegmentKey, curve_strength: f64, tangent_angle_deg: f64) -> Result<(), ProfileError> {
        self.edit(|p| p.set_segment(key, curve_strength, tangent_angle_deg))
    }

    pub fn apply_key_parameters(&mut self, params: &KeyParameters) -> Result<(), ProfileError> {
        self.edit(|p| p.apply_key_parameters(params))
    }

    pub fn set_material(&mut self, material: Material) {
        if material == self.material {
            return;
        }
        self.history.push(Command::ChangeMaterial {
            before: self.material,
            after: material,
        });
        self.material = material;
        self.cache.clear();
    }

    /// Select a material by key or label; unknown keys select PETG.
    pub fn set_material_key(&mut self, key: &str) -> Material {
        let material = resolve_material(key);
        self.set_material(material);
        material
    }

    /// Re-seed the profile from its preset. Undoable.
    pub fn reset(&mut self) {
        let mut seeded = self.profile.clone();
        seeded.reset();
        self.commit(seeded);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Revert the last edit. Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(cmd) = self.history.undo() else {
            return false;
        };
        match cmd {
            Command::EditProfile { before, .. } => self.profile = (**before).clone(),
            Command::ChangeMaterial { before, .. } => self.material = *before,
        }
        self.cache.clear();
        true
    }

    /// Re-apply the last undone edit. Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(cmd) = self.history.redo() else {
            return false;
        };
        match cmd {
            Command::EditProfile { after, .. } => self.profile = (**after).clone(),
            Command::ChangeMaterial { after, .. } => self.material = *after,
        }
        self.cache.clear();
        true
    }

    // ── Derived geometry ───────────────────────────────────────────────

    /// The smooth closed profile curve.
    pub fn profile_curve(&mut self) -> Arc<Vec<Point2d>> {
        let profile = &self.profile;
        let samples = self.config.segment_samples;
        self.cache.get_or_insert_curve(profile.cache_key(), samples, || {
            build_profile(profile.points(), profile.segments(), samples)
        })
    }

    /// Dense mesh of the smooth profile, for the 3D preview.
    pub fn display_mesh(&mut self) -> Result<Arc<TriangleMesh>, GeometryError> {
        let curve = self.profile_curve();
        let resolution = self.config.display_resolution;
        self.cache.get_or_try_insert_mesh(
            self.profile.cache_key(),
            self.config.segment_samples,
            MeshTier::Display,
            resolution,
            || revolve(&axis_closed_loop(&curve), resolution),
        )
    }

    /// Coarse mesh for printing.
    pub fn export_mesh(&mut self) -> Result<Arc<TriangleMesh>, ExportError> {
        let curve = self.profile_curve();
        let settings = self.config.export_settings();
        self.cache.get_or_try_insert_mesh(
            self.profile.cache_key(),
            self.config.segment_samples,
            MeshTier::Export {
                profile_points: settings.profile_points,
            },
            settings.angular_resolution,
            || export_mesh(&curve, &settings),
        )
    }

    pub fn export_stl_binary(&mut self, name: &str) -> Result<Vec<u8>, ExportError> {
        let mesh = self.export_mesh()?;
        write_binary_stl(&mesh, name)
    }

    pub fn export_stl_ascii(&mut self, name: &str) -> Result<String, ExportError> {
        let mesh = self.export_mesh()?;
        write_ascii_stl(&mesh, name)
    }

    pub fn volume(&mut self) -> VolumeEstimate {
        let profile = &self.profile;
        let config = &self.config;
        self.cache.get_or_insert_volume(
            profile.cache_key(),
            config.volume_resolution,
            config.fill_factor,
            || landmark_volume(profile, config),
        )
    }

    pub fn dimensions(&mut self) -> DerivedDimensions {
        let volume = self.volume();
        derive(&self.profile, self.material, &volume)
    }

    pub fn dimension_table(&mut self) -> Vec<TableRow> {
        dimension_table(&self.dimensions())
    }

    #[instrument(skip(self), fields(material = self.material.key()))]
    pub fn evaluate(&mut self) -> DesignReport {
        let volume = self.volume();
        let dimensions = derive(&self.profile, self.material, &volume);
        let report = DesignReport {
            material: self.material,
            key_parameters: self.profile.key_parameters(),
            dimensions,
            volume,
            constraint_violations: validate_geometry(self.profile.points()),
            standards: check_standards(&dimensions),
            range_notices: self.profile.range_notices(),
        };
        info!(
            diameter = dimensions.diameter,
            weight = dimensions.estimated_weight,
            approximate = dimensions.weight_is_approximate,
            constraint_violations = report.constraint_violations.len(),
            standards_violations = report.standards.violations.len(),
            standards_warnings = report.standards.warnings.len(),
            "design evaluated"
        );
        report
    }
}
