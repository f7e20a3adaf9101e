//! Results ingestion.
//!
//! This crate loads the raw events table and the NOC-to-region mapping from
//! CSV into Polars DataFrames and normalizes them into the canonical
//! [`Dataset`].
//!
//! # Example
//!
//! ```ignore
//! use medal_ingest::{DataSources, load_dataset};
//!
//! let sources = DataSources::new("athlete_events.csv", "noc_regions.csv");
//! let dataset = load_dataset(&sources)?;
//! ```

mod error;
mod normalize;
mod reader;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info_span;

use medal_model::Dataset;

// === Error Types ===
pub use error::{DataLoadError, Result, TableKind};

// === CSV Reading ===
pub use reader::{
    EVENT_COLUMNS, REGION_COLUMNS, read_csv_frame, read_events_table, read_regions_table,
};

// === Normalization ===
pub use normalize::{IN_SCOPE_SEASON, normalize, region_entries};

/// Default file name of the events table.
pub const DEFAULT_EVENTS_FILE: &str = "athlete_events.csv";

/// Default file name of the region mapping table.
pub const DEFAULT_REGIONS_FILE: &str = "noc_regions.csv";

/// Locations of the two input tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataSources {
    pub events: PathBuf,
    pub regions: PathBuf,
}

impl Default for DataSources {
    fn default() -> Self {
        Self {
            events: PathBuf::from(DEFAULT_EVENTS_FILE),
            regions: PathBuf::from(DEFAULT_REGIONS_FILE),
        }
    }
}

impl DataSources {
    pub fn new(events: impl Into<PathBuf>, regions: impl Into<PathBuf>) -> Self {
        Self {
            events: events.into(),
            regions: regions.into(),
        }
    }
}

/// Reads both tables and normalizes them into the canonical dataset.
pub fn load_dataset(sources: &DataSources) -> Result<Dataset> {
    let span = info_span!(
        "load",
        events = %sources.events.display(),
        regions = %sources.regions.display()
    );
    let _guard = span.enter();

    let events = read_events_table(&sources.events)?;
    let regions = read_regions_table(&sources.regions)?;
    normalize(&events, &regions)
}
