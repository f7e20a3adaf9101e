//! Data model for the historical games results dataset.
//!
//! - **enums**: `Medal`, `MedalCategory` and `Sex`
//! - **record**: the canonical `EventRecord` and the region mapping entry
//! - **dataset**: the immutable, shareable `Dataset` handle
//! - **filter**: the `Filter` variant and the `OVERALL` sentinel

pub mod dataset;
pub mod enums;
pub mod filter;
pub mod record;

pub use dataset::Dataset;
pub use enums::{Medal, MedalCategory, Sex};
pub use filter::{Filter, OVERALL};
pub use record::{EventRecord, MedalIndicators, RegionEntry};
