use serde::{Deserialize, Serialize};

/// One entry in a unit's status history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEvent {
    pub date: String,
    pub status: String,
    pub user: String,
}

/// One generated inventory unit (apartment/shop/office).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub unit_no: String,
    pub project_name: String,
    pub tower_name: String,
    pub floor: i32,
    #[serde(rename = "type")]
    pub unit_type: String,
    pub carpet_area: u32,
    pub price: i64,
    pub price_per_sq_ft: i64,
    pub status: String,
    pub status_history: Vec<StatusEvent>,
    pub amenities: Vec<String>,
}

/// Carpet area in square feet for a unit type.
///
/// Substring match, first match wins; anything that is not a BHK
/// configuration (shops, offices) falls back to 500 sq ft.
#[must_use]
pub fn carpet_area_for(unit_type: &str) -> u32 {
    if unit_type.contains("2 BHK") {
        850
    } else if unit_type.contains("3 BHK") {
        1200
    } else if unit_type.contains("4 BHK") {
        1800
    } else {
        500
    }
}
