pub mod pick;
pub mod units;

pub use units::{UnitGenerator, AMENITIES, ID_START, STATUSES};
