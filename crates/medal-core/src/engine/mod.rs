//! Aggregation operations over the canonical dataset.
//!
//! Every operation borrows the dataset, applies the deduplication policy that
//! matches its question, and returns a freshly built table. Nothing here
//! mutates the dataset or keeps state between calls.

mod athletes;
mod country;
mod options;
mod overview;
mod series;
mod tally;

pub use athletes::{
    TOP_ATHLETES, age_distribution, height_weight_by_sport, sex_participation_over_time,
    top_athletes,
};
pub use country::{
    TOP_COUNTRY_ATHLETES, country_sport_heatmap, top_athletes_for_country,
    yearwise_medals_for_country,
};
pub use options::{list_sports, list_years_and_countries};
pub use overview::overview_stats;
pub use series::{events_per_sport_heatmap, series_over_time};
pub use tally::medal_tally;
