//! # Estate Fixtures
//!
//! A fixture generator for real-estate unit inventory.
//!
//! ## Features
//!
//! - Enumerate every (project × floor × slot) combination from a set of
//!   project/tower definitions
//! - Randomize unit type, sale status, and amenities per unit (seedable)
//! - Stream source-literal object blocks for mock-data arrays
//! - Export to CSV and JSON
//!
//! ## Example
//!
//! ```
//! use estate_fixtures::generator::UnitGenerator;
//! use estate_fixtures::model::default_projects;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let rng = StdRng::seed_from_u64(42);
//! for unit in UnitGenerator::new(default_projects(), rng) {
//!     println!("{} ({})", unit.unit_no, unit.unit_type);
//! }
//! ```

pub mod error;
pub mod export;
pub mod generator;
pub mod model;
