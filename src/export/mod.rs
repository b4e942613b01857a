pub mod csv;
pub mod json;
pub mod literal;

pub use crate::error::ExportError;
pub use csv::export_csv;
pub use json::export_json;
pub use literal::{unit_literal, write_unit};
