use crate::error::ExportError;
use crate::model::Unit;
use std::fs::File;
use std::path::Path;

pub fn export_csv<P: AsRef<Path>>(units: &[Unit], path: P) -> Result<(), ExportError> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref).map_err(|source| ExportError::FileCreate {
        path: path_ref.to_path_buf(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record([
        "Id",
        "Unit No",
        "Project",
        "Tower",
        "Floor",
        "Type",
        "Carpet Area",
        "Price",
        "Price/SqFt",
        "Status",
        "Listed On",
        "Amenities",
    ])?;

    for unit in units {
        let listed_on = unit
            .status_history
            .first()
            .map(|e| e.date.clone())
            .unwrap_or_default();
        writer.write_record([
            unit.id.clone(),
            unit.unit_no.clone(),
            unit.project_name.clone(),
            unit.tower_name.clone(),
            unit.floor.to_string(),
            unit.unit_type.clone(),
            unit.carpet_area.to_string(),
            unit.price.to_string(),
            unit.price_per_sq_ft.to_string(),
            unit.status.clone(),
            listed_on,
            unit.amenities.join("; "),
        ])?;
    }

    writer.flush().map_err(|e| ExportError::WriteError {
        message: e.to_string(),
    })?;

    Ok(())
}
