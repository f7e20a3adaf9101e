//! Typed result tables returned by the aggregation engine.
//!
//! Every table implements [`TabularReport`], which exposes ordered column
//! headers and stringified cells for presentation, and `Serialize` for
//! machine-readable output.

use std::collections::HashMap;

use serde::Serialize;

use medal_model::{MedalCategory, Sex};

/// Ordered columns and stringified cells of a result table.
pub trait TabularReport {
    fn headers(&self) -> Vec<String>;
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Formats a floating-point number without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn optional_numeric(value: Option<f64>) -> String {
    value.map(format_numeric).unwrap_or_default()
}

fn strings<const N: usize>(names: [&str; N]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

// ----------------------------------------------------------------------------
// Medal tally
// ----------------------------------------------------------------------------

/// Which key a medal tally was grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TallyGrouping {
    /// One row per country (no country filter).
    Region,
    /// One row per edition of a single country.
    Year,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum TallyKey {
    Region(String),
    Year(u32),
}

impl std::fmt::Display for TallyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TallyKey::Region(region) => f.write_str(region),
            TallyKey::Year(year) => write!(f, "{year}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyRow {
    pub key: TallyKey,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub grouping: TallyGrouping,
    pub rows: Vec<TallyRow>,
}

impl MedalTally {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up the row for a region or year label.
    pub fn row(&self, key: &TallyKey) -> Option<&TallyRow> {
        self.rows.iter().find(|row| &row.key == key)
    }
}

impl TabularReport for MedalTally {
    fn headers(&self) -> Vec<String> {
        let key = match self.grouping {
            TallyGrouping::Region => "region",
            TallyGrouping::Year => "Year",
        };
        strings([key, "Gold", "Silver", "Bronze", "total"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                vec![
                    row.key.to_string(),
                    row.gold.to_string(),
                    row.silver.to_string(),
                    row.bronze.to_string(),
                    row.total.to_string(),
                ]
            })
            .collect()
    }
}

// ----------------------------------------------------------------------------
// Filter domains
// ----------------------------------------------------------------------------

/// Selectable filter values, each list starting with "Overall".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub years: Vec<String>,
    pub countries: Vec<String>,
}

// ----------------------------------------------------------------------------
// Time series
// ----------------------------------------------------------------------------

/// Column counted per edition by a time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Dimension {
    /// Participating nations.
    Region,
    /// Events held.
    Event,
    /// Competing athletes (by name).
    Athlete,
}

impl Dimension {
    /// Column label of the counted value.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Region => "region",
            Dimension::Event => "Event",
            Dimension::Athlete => "Name",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EditionCount {
    pub edition: u32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeries {
    pub dimension: Dimension,
    pub points: Vec<EditionCount>,
}

impl TabularReport for TimeSeries {
    fn headers(&self) -> Vec<String> {
        strings(["Edition", self.dimension.label()])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.points
            .iter()
            .map(|point| vec![point.edition.to_string(), point.count.to_string()])
            .collect()
    }
}

// ----------------------------------------------------------------------------
// Athlete rankings
// ----------------------------------------------------------------------------

/// Most successful athletes overall or within one sport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteRanking {
    pub name: String,
    pub medals: usize,
    pub sport: String,
    pub region: Option<String>,
}

impl TabularReport for [AthleteRanking] {
    fn headers(&self) -> Vec<String> {
        strings(["Name", "Medals", "Sport", "region"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|row| {
                vec![
                    row.name.clone(),
                    row.medals.to_string(),
                    row.sport.clone(),
                    row.region.clone().unwrap_or_default(),
                ]
            })
            .collect()
    }
}

/// Most successful athletes of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryAthleteRanking {
    pub name: String,
    pub medals: usize,
    pub sport: String,
}

impl TabularReport for [CountryAthleteRanking] {
    fn headers(&self) -> Vec<String> {
        strings(["Name", "Medals", "Sport"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|row| vec![row.name.clone(), row.medals.to_string(), row.sport.clone()])
            .collect()
    }
}

// ----------------------------------------------------------------------------
// Country views
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: u32,
    pub medals: usize,
}

impl TabularReport for [YearCount] {
    fn headers(&self) -> Vec<String> {
        strings(["Year", "Medal"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|row| vec![row.year.to_string(), row.medals.to_string()])
            .collect()
    }
}

/// Sport × year count matrix; absent combinations are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Row labels, alphabetical.
    pub sports: Vec<String>,
    /// Column labels, ascending.
    pub years: Vec<u32>,
    /// `counts[i][j]` is the count for `sports[i]` in `years[j]`.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Builds the dense matrix from sparse (sport, year) counts.
    pub fn from_counts<'a, I>(cells: I) -> Self
    where
        I: IntoIterator<Item = ((&'a str, u32), usize)>,
    {
        let cells: HashMap<(&str, u32), usize> = cells.into_iter().collect();
        let mut sports: Vec<String> = cells.keys().map(|(s, _)| (*s).to_string()).collect();
        sports.sort();
        sports.dedup();
        let mut years: Vec<u32> = cells.keys().map(|(_, y)| *y).collect();
        years.sort_unstable();
        years.dedup();

        let counts = sports
            .iter()
            .map(|sport| {
                years
                    .iter()
                    .map(|year| cells.get(&(sport.as_str(), *year)).copied().unwrap_or(0))
                    .collect()
            })
            .collect();
        Self {
            sports,
            years,
            counts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }

    pub fn get(&self, sport: &str, year: u32) -> Option<usize> {
        let row = self.sports.iter().position(|s| s == sport)?;
        let col = self.years.iter().position(|y| *y == year)?;
        Some(self.counts[row][col])
    }
}

impl TabularReport for Heatmap {
    fn headers(&self) -> Vec<String> {
        std::iter::once("Sport".to_string())
            .chain(self.years.iter().map(u32::to_string))
            .collect()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.sports
            .iter()
            .zip(&self.counts)
            .map(|(sport, counts)| {
                std::iter::once(sport.clone())
                    .chain(counts.iter().map(usize::to_string))
                    .collect()
            })
            .collect()
    }
}

// ----------------------------------------------------------------------------
// Athlete views
// ----------------------------------------------------------------------------

/// One athlete of the unique-athlete view, for scatter distributions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AthleteProfile {
    pub name: String,
    pub sex: Sex,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub sport: String,
    pub region: Option<String>,
    pub medal: MedalCategory,
}

impl TabularReport for [AthleteProfile] {
    fn headers(&self) -> Vec<String> {
        strings(["Name", "Sex", "Age", "Height", "Weight", "Sport", "region", "Medal"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|row| {
                vec![
                    row.name.clone(),
                    row.sex.to_string(),
                    optional_numeric(row.age),
                    optional_numeric(row.height),
                    optional_numeric(row.weight),
                    row.sport.clone(),
                    row.region.clone().unwrap_or_default(),
                    row.medal.to_string(),
                ]
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SexParticipation {
    pub year: u32,
    pub male: usize,
    pub female: usize,
}

impl TabularReport for [SexParticipation] {
    fn headers(&self) -> Vec<String> {
        strings(["Year", "Male", "Female"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter()
            .map(|row| {
                vec![
                    row.year.to_string(),
                    row.male.to_string(),
                    row.female.to_string(),
                ]
            })
            .collect()
    }
}

/// Age samples of one group of athletes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeSeries {
    pub label: String,
    pub ages: Vec<f64>,
}

impl AgeSeries {
    pub fn new(label: impl Into<String>, mut ages: Vec<f64>) -> Self {
        ages.sort_by(f64::total_cmp);
        Self {
            label: label.into(),
            ages,
        }
    }

    pub fn count(&self) -> usize {
        self.ages.len()
    }

    pub fn min(&self) -> Option<f64> {
        self.ages.first().copied()
    }

    pub fn max(&self) -> Option<f64> {
        self.ages.last().copied()
    }

    pub fn median(&self) -> Option<f64> {
        let n = self.ages.len();
        if n == 0 {
            return None;
        }
        if n % 2 == 1 {
            Some(self.ages[n / 2])
        } else {
            Some((self.ages[n / 2 - 1] + self.ages[n / 2]) / 2.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeDistribution {
    pub overall: AgeSeries,
    pub gold: AgeSeries,
    pub silver: AgeSeries,
    pub bronze: AgeSeries,
}

impl AgeDistribution {
    pub fn series(&self) -> [&AgeSeries; 4] {
        [&self.overall, &self.gold, &self.silver, &self.bronze]
    }
}

impl TabularReport for AgeDistribution {
    fn headers(&self) -> Vec<String> {
        strings(["Group", "Athletes", "Min", "Median", "Max"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.series()
            .iter()
            .map(|series| {
                vec![
                    series.label.clone(),
                    series.count().to_string(),
                    optional_numeric(series.min()),
                    optional_numeric(series.median()),
                    optional_numeric(series.max()),
                ]
            })
            .collect()
    }
}

// ----------------------------------------------------------------------------
// Overview
// ----------------------------------------------------------------------------

/// Headline counts for the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    pub editions: usize,
    pub hosts: usize,
    pub sports: usize,
    pub events: usize,
    pub athletes: usize,
    pub nations: usize,
}

impl TabularReport for OverviewStats {
    fn headers(&self) -> Vec<String> {
        strings(["Editions", "Hosts", "Sports", "Events", "Nations", "Athletes"])
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.editions.to_string(),
            self.hosts.to_string(),
            self.sports.to_string(),
            self.events.to_string(),
            self.nations.to_string(),
            self.athletes.to_string(),
        ]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_numeric_trims_trailing_zeros() {
        assert_eq!(format_numeric(180.0), "180");
        assert_eq!(format_numeric(72.5), "72.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(100.0), "100");
    }

    #[test]
    fn heatmap_fills_missing_cells_with_zero() {
        let heatmap = Heatmap::from_counts([
            (("Swimming", 2004), 3),
            (("Athletics", 2008), 1),
            (("Swimming", 2008), 2),
        ]);
        assert_eq!(heatmap.sports, vec!["Athletics", "Swimming"]);
        assert_eq!(heatmap.years, vec![2004, 2008]);
        assert_eq!(heatmap.counts, vec![vec![0, 1], vec![3, 2]]);
        assert_eq!(heatmap.get("Athletics", 2004), Some(0));
        assert_eq!(heatmap.get("Fencing", 2004), None);
        assert_eq!(
            heatmap.headers(),
            vec!["Sport".to_string(), "2004".to_string(), "2008".to_string()]
        );
    }

    #[test]
    fn athlete_profile_rows_include_age() {
        let profiles = [AthleteProfile {
            name: "Swimmer".to_string(),
            sex: Sex::Female,
            age: Some(22.0),
            height: Some(175.0),
            weight: None,
            sport: "Swimming".to_string(),
            region: Some("France".to_string()),
            medal: MedalCategory::NoMedal,
        }];
        let report: &[AthleteProfile] = &profiles;
        assert_eq!(
            report.headers(),
            vec!["Name", "Sex", "Age", "Height", "Weight", "Sport", "region", "Medal"]
        );
        assert_eq!(
            report.rows(),
            vec![vec!["Swimmer", "F", "22", "175", "", "Swimming", "France", "No Medal"]]
        );
    }

    #[test]
    fn age_series_summaries() {
        let series = AgeSeries::new("Gold Medalist", vec![30.0, 20.0, 25.0, 21.0]);
        assert_eq!(series.count(), 4);
        assert_eq!(series.min(), Some(20.0));
        assert_eq!(series.max(), Some(30.0));
        assert_eq!(series.median(), Some(23.0));
        assert_eq!(AgeSeries::new("empty", Vec::new()).median(), None);
    }
}
