//! Source-literal emission, the default output format.
//!
//! Each unit renders as one object block ending in `},` so the
//! concatenated stream forms a valid array body once wrapped in `[ ]`
//! by whatever mock-data file it is pasted into.

use crate::error::ExportError;
use crate::model::Unit;
use std::io::Write;

/// Renders one unit as a source-literal object block.
///
/// Keys are unquoted and emitted in a fixed order; string values are
/// double-quoted, numbers are bare, and statusHistory/amenities render
/// as nested literals.
#[must_use]
pub fn unit_literal(unit: &Unit) -> String {
    let history: Vec<String> = unit
        .status_history
        .iter()
        .map(|e| {
            format!(
                "{{ date: \"{}\", status: \"{}\", user: \"{}\" }}",
                e.date, e.status, e.user
            )
        })
        .collect();
    let amenities: Vec<String> = unit.amenities.iter().map(|a| format!("\"{a}\"")).collect();

    let mut block = String::new();
    block.push_str("  {\n");
    block.push_str(&format!("    id: \"{}\",\n", unit.id));
    block.push_str(&format!("    unitNo: \"{}\",\n", unit.unit_no));
    block.push_str(&format!("    projectName: \"{}\",\n", unit.project_name));
    block.push_str(&format!("    towerName: \"{}\",\n", unit.tower_name));
    block.push_str(&format!("    floor: {},\n", unit.floor));
    block.push_str(&format!("    type: \"{}\",\n", unit.unit_type));
    block.push_str(&format!("    carpetArea: {},\n", unit.carpet_area));
    block.push_str(&format!("    price: {},\n", unit.price));
    block.push_str(&format!("    pricePerSqFt: {},\n", unit.price_per_sq_ft));
    block.push_str(&format!("    status: \"{}\",\n", unit.status));
    block.push_str(&format!("    statusHistory: [{}],\n", history.join(", ")));
    block.push_str(&format!("    amenities: [{}]\n", amenities.join(", ")));
    block.push_str("  },\n");
    block
}

/// Writes one unit's literal block to the sink.
pub fn write_unit<W: Write>(out: &mut W, unit: &Unit) -> Result<(), ExportError> {
    out.write_all(unit_literal(unit).as_bytes())
        .map_err(|e| ExportError::WriteError {
            message: e.to_string(),
        })
}
