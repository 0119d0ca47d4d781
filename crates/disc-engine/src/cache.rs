//! Memoized profile curves, meshes and volumes for a design session.
//!
//! Entries are keyed on the exact bit pattern of every profile input plus
//! the requested resolution. The session clears the whole cache whenever
//! the profile or material changes.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use disc_kernel::{Point2d, TriangleMesh, VolumeEstimate};

use crate::profile::ProfileKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CurveKey {
    profile: ProfileKey,
    samples: usize,
}

/// Which fidelity tier a cached mesh belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshTier {
    Display,
    Export { profile_points: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct MeshKey {
    curve: CurveKey,
    tier: MeshTier,
    resolution: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct VolumeKey {
    profile: ProfileKey,
    resolution: usize,
    fill_factor: u64,
}

type SharedCurve = Arc<Vec<Point2d>>;
type SharedMesh = Arc<TriangleMesh>;

#[derive(Debug, Default)]
pub struct GeometryCache {
    curves: HashMap<CurveKey, SharedCurve>,
    meshes: HashMap<MeshKey, SharedMesh>,
    volumes: HashMap<VolumeKey, VolumeEstimate>,
    hits: usize,
    misses: usize,
}

/// Cache statistics for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeometryCacheStats {
    pub curve_entries: usize,
    pub mesh_entries: usize,
    pub volume_entries: usize,
    pub hits: usize,
    pub misses: usize,
}

impl GeometryCacheStats {
    pub fn total_entries(&self) -> usize {
        self.curve_entries + self.mesh_entries + self.volume_entries
    }
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, hit: bool, kind: &'static str) {
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        debug!(kind, hit, "geometry cache lookup");
    }

    pub fn get_or_insert_curve(
        &mut self,
        profile: ProfileKey,
        samples: usize,
        build: impl FnOnce() -> Vec<Point2d>,
    ) -> SharedCurve {
        let key = CurveKey { profile, samples };
        if let Some(curve) = self.curves.get(&key) {
            let curve = Arc::clone(curve);
            self.record(true, "curve");
            return curve;
        }
        self.record(false, "curve");
        let curve = Arc::new(build());
        self.curves.insert(key, Arc::clone(&curve));
        curve
    }

    /// Look up a mesh, building it on a miss. Failed builds are not cached.
    pub fn get_or_try_insert_mesh<E>(
        &mut self,
        profile: ProfileKey,
        samples: usize,
        tier: MeshTier,
        resolution: usize,
        build: impl FnOnce() -> Result<TriangleMesh, E>,
    ) -> Result<SharedMesh, E> {
        let key = MeshKey {
            curve: CurveKey { profile, samples },
            tier,
            resolution,
        };
        if let Some(mesh) = self.meshes.get(&key) {
            let mesh = Arc::clone(mesh);
            self.record(true, "mesh");
            return Ok(mesh);
        }
        self.record(false, "mesh");
        let mesh = Arc::new(build()?);
        self.meshes.insert(key, Arc::clone(&mesh));
        Ok(mesh)
    }

    pub fn get_or_insert_volume(
        &mut self,
        profile: ProfileKey,
        resolution: usize,
        fill_factor: f64,
        build: impl FnOnce() -> VolumeEstimate,
    ) -> VolumeEstimate {
        let key = VolumeKey {
            profile,
            resolution,
            fill_factor: fill_factor.to_bits(),
        };
        if let Some(volume) = self.volumes.get(&key) {
            let volume = *volume;
            self.record(true, "volume");
            return volume;
        }
        self.record(false, "volume");
        let volume = build();
        self.volumes.insert(key, volume);
        volume
    }

    /// Drop every entry. Statistics are kept.
    pub fn clear(&mut self) {
        self.curves.clear();
        self.meshes.clear();
        self.volumes.clear();
    }

    pub fn stats(&self) -> GeometryCacheStats {
        GeometryCacheStats {
            curve_entries: self.curves.len(),
            mesh_entries: self.meshes.len(),
            volume_entries: self.volumes.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::DiscProfile;

    #[test]
    fn test_curve_built_once() {
        let mut cache = GeometryCache::new();
        let key = DiscProfile::new().cache_key();
        let mut builds = 0;
        for _ in 0..3 {
            cache.get_or_insert_curve(key, 10, || {
                builds += 1;
                vec![Point2d::ORIGIN]
            });
        }
        assert_eq!(builds, 1);
        let stats = cache.stats();
        assert_eq!((stats.hits, stats.misses), (2, 1));
    }

    #[test]
    fn test_resolution_is_part_of_key() {
        let mut cache = GeometryCache::new();
        let key = DiscProfile::new().cache_key();
        cache.get_or_insert_curve(key, 10, Vec::new);
        cache.get_or_insert_curve(key, 20, Vec::new);
        assert_eq!(cache.stats().curve_entries, 2);
    }

    #[test]
    fn test_failed_mesh_not_cached() {
        let mut cache = GeometryCache::new();
        let key = DiscProfile::new().cache_key();
        let result: Result<_, &str> = cache.get_or_try_insert_mesh(key, 10, MeshTier::Display, 3, || Err("boom"));
        assert!(result.is_err());
        assert_eq!(cache.stats().mesh_entries, 0);
    }

    #[test]
    fn test_clear_drops_entries() {
        let mut cache = GeometryCache::new();
        let key = DiscProfile::new().cache_key();
        cache.get_or_insert_curve(key, 10, Vec::new);
        cache.get_or_insert_volume(key, 32, 0.18, || VolumeEstimate::Exact {
            volume_mm3: 1.0,
            flipped: false,
        });
        assert_eq!(cache.stats().total_entries(), 2);
        cache.clear();
        assert_eq!(cache.stats().total_entries(), 0);
    }
}
