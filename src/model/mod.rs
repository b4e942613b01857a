pub mod project;
pub mod unit;

pub use project::{default_projects, load_projects, ProjectDefinition};
pub use unit::{carpet_area_for, StatusEvent, Unit};
