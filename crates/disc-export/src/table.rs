use serde::Serialize;

use disc_types::DerivedDimensions;

/// One named measurement in the flat dimension record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableRow {
    pub name: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

/// Flatten derived dimensions into a fixed-order name/value record.
pub fn dimension_table(dims: &DerivedDimensions) -> Vec<TableRow> {
    let row = |name, value, unit| TableRow { name, value, unit };
    vec![
        row("radius", dims.radius, "mm"),
        row("diameter", dims.diameter, "mm"),
        row("flight_plate_thickness", dims.flight_plate_thickness, "mm"),
        row("disc_thickness", dims.disc_thickness, "mm"),
        row("rim_depth", dims.rim_depth, "mm"),
        row("rim_width", dims.rim_width, "mm"),
        row("volume", dims.volume_cm3, "cm3"),
        row("estimated_weight", dims.estimated_weight, "g"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_order_is_stable() {
        let dims = DerivedDimensions {
            radius: 105.0,
            diameter: 210.0,
            flight_plate_thickness: 2.0,
            disc_thickness: 12.0,
            rim_depth: 7.0,
            rim_width: 25.0,
            volume_cm3: 117.9,
            estimated_weight: 150.9,
            weight_is_approximate: false,
        };
        let table = dimension_table(&dims);
        let names: Vec<&str> = table.iter().map(|r| r.name).collect();
        assert_eq!(names[0], "radius");
        assert_eq!(names[7], "estimated_weight");
        assert_eq!(table[1].value, 210.0);
        assert_eq!(table[7].unit, "g");

        let json = serde_json::to_value(table[6]).unwrap();
        assert_eq!(json["unit"], "cm3");
    }
}
