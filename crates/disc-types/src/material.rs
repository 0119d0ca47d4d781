use serde::{Deserialize, Serialize};
use std::fmt;

/// Print material with a fixed density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Pla,
    #[default]
    Petg,
    Abs,
    /// Density of injection-moulded commercial discs, kept for comparison.
    CommercialReference,
}

impl Material {
    pub const ALL: [Self; 4] = [Self::Pla, Self::Petg, Self::Abs, Self::CommercialReference];

    /// Density in g/cm³.
    pub fn density_g_cm3(self) -> f64 {
        match self {
            Self::Pla => 1.24,
            Self::Petg => 1.28,
            Self::Abs => 1.05,
            Self::CommercialReference => 1.60,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Pla => "pla",
            Self::Petg => "petg",
            Self::Abs => "abs",
            Self::CommercialReference => "commercial",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pla => "PLA (Lighter)",
            Self::Petg => "PETG (Recommended)",
            Self::Abs => "ABS (Stronger)",
            Self::CommercialReference => "Commercial Plastic (Reference)",
        }
    }

    /// Looks up a material by short key or display label, ignoring case.
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|m| {
            m.key().eq_ignore_ascii_case(key) || m.label().eq_ignore_ascii_case(key)
        })
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_petg() {
        assert_eq!(Material::default(), Material::Petg);
        assert!((Material::default().density_g_cm3() - 1.28).abs() < 1e-12);
    }

    #[test]
    fn test_lookup_by_key_and_label() {
        assert_eq!(Material::from_key("PLA"), Some(Material::Pla));
        assert_eq!(Material::from_key("petg (recommended)"), Some(Material::Petg));
        assert_eq!(Material::from_key("commercial"), Some(Material::CommercialReference));
        assert_eq!(Material::from_key("ABS (Stronger)"), Some(Material::Abs));
        assert_eq!(Material::from_key("nylon"), None);
    }
}
