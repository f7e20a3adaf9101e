//! Normalization of the raw tables into the canonical dataset.
//!
//! The events table is left-joined to the region mapping on NOC, restricted to
//! the in-scope season, and converted to typed [`EventRecord`]s with medal
//! indicators materialized.

use std::collections::HashMap;

use polars::prelude::DataFrame;
use tracing::{info, warn};

use medal_model::{Dataset, EventRecord, Medal, MedalIndicators, RegionEntry, Sex};

use crate::error::{DataLoadError, Result, TableKind};
use crate::reader::{
    EVENT_COLUMNS, REGION_COLUMNS, REGION_NOTES_COLUMN, require_columns, text_column,
};

/// The only season kept in the canonical dataset.
pub const IN_SCOPE_SEASON: &str = "Summer";

/// Converts the region mapping frame into entries, in file order.
pub fn region_entries(regions: &DataFrame) -> Result<Vec<RegionEntry>> {
    require_columns(regions, TableKind::Regions, &REGION_COLUMNS)?;
    let nocs = text_column(regions, TableKind::Regions, "NOC")?;
    let names = text_column(regions, TableKind::Regions, "region")?;
    let notes = if regions.column(REGION_NOTES_COLUMN).is_ok() {
        text_column(regions, TableKind::Regions, REGION_NOTES_COLUMN)?
    } else {
        vec![None; regions.height()]
    };

    let mut entries = Vec::with_capacity(regions.height());
    for (idx, ((noc, region), note)) in nocs.into_iter().zip(names).zip(notes).enumerate() {
        let Some(noc) = noc else {
            return Err(DataLoadError::InvalidValue {
                table: TableKind::Regions,
                row: idx + 1,
                column: "NOC".to_string(),
                value: String::new(),
            });
        };
        entries.push(RegionEntry {
            noc,
            region,
            notes: note,
        });
    }
    Ok(entries)
}

/// Builds the NOC lookup; the first entry for a code wins.
fn region_lookup(entries: Vec<RegionEntry>) -> HashMap<String, Option<String>> {
    let mut lookup = HashMap::with_capacity(entries.len());
    for entry in entries {
        lookup.entry(entry.noc).or_insert(entry.region);
    }
    lookup
}

/// The events table as typed string columns.
struct EventColumns {
    columns: HashMap<&'static str, Vec<Option<String>>>,
}

impl EventColumns {
    fn extract(events: &DataFrame) -> Result<Self> {
        let mut columns = HashMap::with_capacity(EVENT_COLUMNS.len());
        for name in EVENT_COLUMNS {
            columns.insert(name, text_column(events, TableKind::Events, name)?);
        }
        Ok(Self { columns })
    }

    fn get(&self, name: &str, idx: usize) -> Option<&str> {
        self.columns
            .get(name)
            .and_then(|values| values.get(idx))
            .and_then(|value| value.as_deref())
    }

    fn required(&self, name: &str, idx: usize) -> Result<String> {
        self.get(name, idx)
            .map(str::to_string)
            .ok_or_else(|| invalid(idx, name, ""))
    }

    fn parsed<T: std::str::FromStr>(&self, name: &str, idx: usize) -> Result<Option<T>> {
        match self.get(name, idx) {
            None => Ok(None),
            Some(raw) => raw
                .parse::<T>()
                .map(Some)
                .map_err(|_| invalid(idx, name, raw)),
        }
    }
}

fn invalid(idx: usize, column: &str, value: &str) -> DataLoadError {
    DataLoadError::InvalidValue {
        table: TableKind::Events,
        row: idx + 1,
        column: column.to_string(),
        value: value.to_string(),
    }
}

/// Parses a year cell, accepting an integral float rendering such as "1992.0".
fn parse_year(raw: &str) -> Option<u32> {
    if let Ok(year) = raw.parse::<u32>() {
        return (year > 0).then_some(year);
    }
    let value = raw.parse::<f64>().ok()?;
    if value.fract() == 0.0 && value >= 1.0 && value <= f64::from(u32::MAX) {
        Some(value as u32)
    } else {
        None
    }
}

fn build_record(
    columns: &EventColumns,
    idx: usize,
    season: String,
    lookup: &HashMap<String, Option<String>>,
) -> Result<EventRecord> {
    let sex_raw = columns.required("Sex", idx)?;
    let sex = sex_raw
        .parse::<Sex>()
        .map_err(|_| invalid(idx, "Sex", &sex_raw))?;

    let year_raw = columns.required("Year", idx)?;
    let year = parse_year(&year_raw).ok_or_else(|| invalid(idx, "Year", &year_raw))?;

    let medal = match columns.get("Medal", idx) {
        None => None,
        Some(raw) => Some(raw.parse::<Medal>().map_err(|_| invalid(idx, "Medal", raw))?),
    };

    let noc = columns.required("NOC", idx)?;
    let region = lookup.get(&noc).cloned().flatten();

    Ok(EventRecord {
        name: columns.required("Name", idx)?,
        sex,
        age: columns.parsed("Age", idx)?,
        height: columns.parsed("Height", idx)?,
        weight: columns.parsed("Weight", idx)?,
        team: columns.required("Team", idx)?,
        noc,
        games: columns.required("Games", idx)?,
        year,
        season,
        city: columns.required("City", idx)?,
        sport: columns.required("Sport", idx)?,
        event: columns.required("Event", idx)?,
        medal,
        region,
        indicators: MedalIndicators::from_medal(medal),
    })
}

/// Joins, filters and types the raw tables into the canonical dataset.
///
/// Unmapped NOC codes keep the row with `region = None`. Rows outside
/// [`IN_SCOPE_SEASON`] are dropped before any other field is validated.
pub fn normalize(events: &DataFrame, regions: &DataFrame) -> Result<Dataset> {
    require_columns(events, TableKind::Events, &EVENT_COLUMNS)?;
    let lookup = region_lookup(region_entries(regions)?);
    let columns = EventColumns::extract(events)?;

    let mut records = Vec::with_capacity(events.height());
    let mut other_season = 0usize;
    let mut unmapped = 0usize;
    for idx in 0..events.height() {
        let season = columns.required("Season", idx)?;
        if season != IN_SCOPE_SEASON {
            other_season += 1;
            continue;
        }
        let record = build_record(&columns, idx, season, &lookup)?;
        if record.region.is_none() {
            unmapped += 1;
        }
        records.push(record);
    }

    info!(
        raw_rows = events.height(),
        records = records.len(),
        other_season,
        "normalized events table"
    );
    if unmapped > 0 {
        warn!(
            rows = unmapped,
            "rows with NOC codes missing from the region mapping"
        );
    }
    Ok(Dataset::new(records))
}
