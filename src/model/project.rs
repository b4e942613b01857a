use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Static configuration describing one tower/wing and its unit templates.
///
/// `unit_types` and `base_prices` are positionally paired: `base_prices[i]`
/// is the base price for `unit_types[i]`. Equal lengths are an unchecked
/// precondition of generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDefinition {
    pub name: String,
    pub tower: String,
    /// Inclusive [start, end] floor bounds.
    pub floor_range: [i32; 2],
    pub units_per_floor: u32,
    pub unit_prefix: String,
    pub unit_types: Vec<String>,
    pub base_prices: Vec<i64>,
}

impl ProjectDefinition {
    #[must_use]
    pub fn start_floor(&self) -> i32 {
        self.floor_range[0]
    }

    #[must_use]
    pub fn end_floor(&self) -> i32 {
        self.floor_range[1]
    }

    /// Number of units this project contributes: floors × units per floor.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        let floors = (self.end_floor() - self.start_floor() + 1).max(0) as usize;
        floors * self.units_per_floor as usize
    }
}

/// The reference configuration: two residential towers and one retail wing.
#[must_use]
pub fn default_projects() -> Vec<ProjectDefinition> {
    vec![
        ProjectDefinition {
            name: "Samarth Heights".to_string(),
            tower: "Tower A".to_string(),
            floor_range: [3, 9],
            units_per_floor: 4,
            unit_prefix: "A".to_string(),
            unit_types: vec!["2 BHK".to_string(), "3 BHK".to_string()],
            base_prices: vec![7_500_000, 10_500_000],
        },
        ProjectDefinition {
            name: "Samarth Heights".to_string(),
            tower: "Tower B".to_string(),
            floor_range: [2, 6],
            units_per_floor: 4,
            unit_prefix: "B".to_string(),
            unit_types: vec!["2 BHK".to_string(), "4 BHK".to_string()],
            base_prices: vec![8_100_000, 16_200_000],
        },
        ProjectDefinition {
            name: "Samarth Plaza".to_string(),
            tower: "Wing A (Retail)".to_string(),
            floor_range: [1, 3],
            units_per_floor: 6,
            unit_prefix: "S".to_string(),
            unit_types: vec!["Shop".to_string(), "Office".to_string()],
            base_prices: vec![12_500_000, 18_000_000],
        },
    ]
}

/// Loads project definitions from a JSON file.
///
/// The file must contain an array of project objects with camelCase keys
/// (`name`, `tower`, `floorRange`, `unitsPerFloor`, `unitPrefix`,
/// `unitTypes`, `basePrices`).
///
/// # Errors
///
/// Returns [`ConfigError::FileRead`] if the file cannot be read.
/// Returns [`ConfigError::InvalidConfig`] if the JSON is malformed.
pub fn load_projects<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectDefinition>, ConfigError> {
    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    let projects = serde_json::from_str(&content)?;
    Ok(projects)
}
