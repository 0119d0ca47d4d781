use tracing::warn;

use disc_types::Material;

/// Look up a material by key or label; unknown keys resolve to the default
/// (PETG) so weight estimation keeps working.
pub fn resolve_material(key: &str) -> Material {
    Material::from_key(key).unwrap_or_else(|| {
        let fallback = Material::default();
        warn!(key, fallback = fallback.key(), "unknown material, using default");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_material_is_petg() {
        assert_eq!(resolve_material("unobtanium"), Material::Petg);
        assert_eq!(resolve_material(""), Material::Petg);
    }

    #[test]
    fn test_known_material_resolves() {
        assert_eq!(resolve_material("abs"), Material::Abs);
        assert_eq!(resolve_material("PLA (Lighter)"), Material::Pla);
    }
}
