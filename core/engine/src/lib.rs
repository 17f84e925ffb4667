//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the pole RAB engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod aggregate;
pub mod category;
pub mod classifier;
pub mod currency;
pub mod geo;
pub mod pole;
pub mod price;
pub mod project;
pub mod registry;

// Re-export commonly used types at the crate root
pub use aggregate::{aggregate, Aggregate, AggregateRow};
pub use category::{Category, ParseCategoryError, PoleSource, Position};
pub use classifier::{classify, parse_angle_input, parse_lenient};
pub use currency::{format_rupiah, RUPIAH_NUM_FORMAT};
pub use geo::{angle_diff, bearing, deflection_angles, LatLon};
pub use pole::{PoleId, PoleRecord};
pub use price::{ParsePriceFieldError, PriceEntry, PriceField, PriceTable};
pub use project::Project;
pub use registry::PoleRegistry;
