//! Aggregation engine for the historical games results dataset.
//!
//! This crate provides:
//!
//! - **dedupe**: the award and athlete deduplication policies
//! - **group**: the group-and-aggregate primitives shared by all views
//! - **filter**: validation of raw filter selections into `Filter` values
//! - **engine**: medal tallies, time series, rankings, heatmaps and
//!   demographic views
//! - **tables**: typed result tables and the `TabularReport` trait
//!
//! # Example
//!
//! ```ignore
//! use medal_core::{FilterDomain, medal_tally};
//!
//! let domain = FilterDomain::from_dataset(&dataset);
//! let year = domain.year("2004")?;
//! let country = domain.country("Overall")?;
//! let tally = medal_tally(&dataset, &year, &country);
//! ```

pub mod dedupe;
pub mod engine;
mod error;
pub mod filter;
pub mod group;
mod outcome;
pub mod tables;

#[cfg(test)]
mod test_support;

pub use dedupe::{AthleteKey, AwardKey, athletes_of, awards_of, dedupe_athletes, dedupe_awards};
pub use engine::{
    TOP_ATHLETES, TOP_COUNTRY_ATHLETES, age_distribution, country_sport_heatmap,
    events_per_sport_heatmap, height_weight_by_sport, list_sports, list_years_and_countries,
    medal_tally, overview_stats, series_over_time, sex_participation_over_time, top_athletes,
    top_athletes_for_country, yearwise_medals_for_country,
};
pub use error::{FilterDimension, QueryError, Result};
pub use filter::FilterDomain;
pub use outcome::Outcome;
pub use tables::{
    AgeDistribution, AgeSeries, AthleteProfile, AthleteRanking, CountryAthleteRanking, Dimension,
    EditionCount, FilterOptions, Heatmap, MedalTally, OverviewStats, SexParticipation,
    TabularReport, TallyGrouping, TallyKey, TallyRow, YearCount,
};
