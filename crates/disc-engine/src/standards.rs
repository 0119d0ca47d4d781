use serde::Serialize;

use disc_types::DerivedDimensions;

pub const MIN_DIAMETER: f64 = 210.0;
pub const MAX_DIAMETER: f64 = 230.0;
pub const MIN_HEIGHT: f64 = 10.0;
pub const MAX_HEIGHT: f64 = 30.0;
pub const MIN_WEIGHT: f64 = 150.0;
pub const MAX_WEIGHT: f64 = 180.0;
pub const MIN_RIM_DEPTH: f64 = 5.0;
pub const MAX_RIM_DEPTH: f64 = 25.0;
pub const MIN_RIM_WIDTH: f64 = 10.0;
pub const MAX_RIM_WIDTH: f64 = 25.0;
pub const MIN_FLIGHT_PLATE_THICKNESS: f64 = 1.0;
pub const MAX_FLIGHT_PLATE_THICKNESS: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Outside the regulatory limits.
    Violation,
    /// Outside the recommended range.
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Diameter,
    Height,
    Weight,
    RimDepth,
    RimWidth,
    FlightPlateThickness,
}

impl Dimension {
    pub fn label(self) -> &'static str {
        match self {
            Self::Diameter => "Diameter",
            Self::Height => "Height",
            Self::Weight => "Weight",
            Self::RimDepth => "Rim depth",
            Self::RimWidth => "Rim width",
            Self::FlightPlateThickness => "Flight plate thickness",
        }
    }

    fn measure(self, dims: &DerivedDimensions) -> f64 {
        match self {
            Self::Diameter => dims.diameter,
            Self::Height => dims.disc_thickness,
            Self::Weight => dims.estimated_weight,
            Self::RimDepth => dims.rim_depth,
            Self::RimWidth => dims.rim_width,
            Self::FlightPlateThickness => dims.flight_plate_thickness,
        }
    }
}

/// One row of the standards table. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandardBound {
    pub dimension: Dimension,
    pub min: f64,
    pub max: f64,
    pub unit: &'static str,
    pub severity: Severity,
}

const STANDARDS: [StandardBound; 6] = [
    StandardBound { dimension: Dimension::Diameter, min: MIN_DIAMETER, max: MAX_DIAMETER, unit: "mm", severity: Severity::Violation },
    StandardBound { dimension: Dimension::Height, min: MIN_HEIGHT, max: MAX_HEIGHT, unit: "mm", severity: Severity::Violation },
    StandardBound { dimension: Dimension::Weight, min: MIN_WEIGHT, max: MAX_WEIGHT, unit: "g", severity: Severity::Violation },
    StandardBound { dimension: Dimension::RimDepth, min: MIN_RIM_DEPTH, max: MAX_RIM_DEPTH, unit: "mm", severity: Severity::Warning },
    StandardBound { dimension: Dimension::RimWidth, min: MIN_RIM_WIDTH, max: MAX_RIM_WIDTH, unit: "mm", severity: Severity::Warning },
    StandardBound {
        dimension: Dimension::FlightPlateThickness,
        min: MIN_FLIGHT_PLATE_THICKNESS,
        max: MAX_FLIGHT_PLATE_THICKNESS,
        unit: "mm",
        severity: Severity::Warning,
    },
];

/// The standards table, for display next to a design.
pub fn standards_reference() -> &'static [StandardBound] {
    &STANDARDS
}

/// A derived dimension outside its bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardsFinding {
    pub dimension: Dimension,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StandardsReport {
    pub violations: Vec<StandardsFinding>,
    pub warnings: Vec<StandardsFinding>,
}

impl StandardsReport {
    /// No hard violations. Warnings do not affect legality.
    pub fn is_legal(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violates(&self, dimension: Dimension) -> bool {
        self.violations.iter().any(|f| f.dimension == dimension)
    }
}

pub fn check_standards(dims: &DerivedDimensions) -> StandardsReport {
    let mut report = StandardsReport::default();
    for bound in &STANDARDS {
        let value = bound.dimension.measure(dims);
        if (bound.min..=bound.max).contains(&value) {
            continue;
        }
        let verb = match bound.severity {
            Severity::Violation => "must",
            Severity::Warning => "should",
        };
        let finding = StandardsFinding {
            dimension: bound.dimension,
            value,
            min: bound.min,
            max: bound.max,
            severity: bound.severity,
            message: format!(
                "{} ({value:.1}{unit}) {verb} be between {}-{}{unit}",
                bound.dimension.label(),
                bound.min,
                bound.max,
                unit = bound.unit,
            ),
        };
        match bound.severity {
            Severity::Violation => report.violations.push(finding),
            Severity::Warning => report.warnings.push(finding),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legal() -> DerivedDimensions {
        DerivedDimensions {
            radius: 105.0,
            diameter: 210.0,
            flight_plate_thickness: 2.0,
            disc_thickness: 12.0,
            rim_depth: 7.0,
            rim_width: 25.0,
            volume_cm3: 120.0,
            estimated_weight: 155.0,
            weight_is_approximate: false,
        }
    }

    #[test]
    fn test_bounds_inclusive() {
        let report = check_standards(&legal());
        assert!(report.is_legal());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_diameter_violation() {
        let dims = DerivedDimensions { diameter: 232.0, ..legal() };
        let report = check_standards(&dims);
        assert!(report.violates(Dimension::Diameter));
        assert_eq!(report.violations[0].message, "Diameter (232.0mm) must be between 210-230mm");
    }

    #[test]
    fn test_rim_width_is_warning_only() {
        let dims = DerivedDimensions { rim_width: 30.0, ..legal() };
        let report = check_standards(&dims);
        assert!(report.is_legal());
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].dimension, Dimension::RimWidth);
    }

    #[test]
    fn test_light_disc_violates_weight() {
        let dims = DerivedDimensions { estimated_weight: 120.0, ..legal() };
        assert!(check_standards(&dims).violates(Dimension::Weight));
    }

    #[test]
    fn test_reference_table() {
        let table = standards_reference();
        assert_eq!(table.len(), 6);
        assert_eq!(table.iter().filter(|b| b.severity == Severity::Violation).count(), 3);
    }
}
