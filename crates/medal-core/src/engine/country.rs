use tracing::debug;

use medal_model::{Dataset, EventRecord, Filter};

use crate::dedupe::awards_of;
use crate::engine::athletes::first_occurrences;
use crate::group::{count_by, ranked_counts};
use crate::outcome::Outcome;
use crate::tables::{CountryAthleteRanking, Heatmap, YearCount};

/// Number of athletes in a country ranking.
pub const TOP_COUNTRY_ATHLETES: usize = 10;

/// Deduplicated medal-winning awards of one country (or of every country).
fn country_awards<'a>(dataset: &'a Dataset, country: &Filter<String>) -> Vec<&'a EventRecord> {
    awards_of(dataset.iter().filter(|r| r.has_medal()))
        .into_iter()
        .filter(|r| country.matches_str(r.region()))
        .collect()
}

/// Medals won per edition, ascending by year.
pub fn yearwise_medals_for_country(
    dataset: &Dataset,
    country: &Filter<String>,
) -> Outcome<Vec<YearCount>> {
    let awards = country_awards(dataset, country);
    if awards.is_empty() {
        debug!(country = %country, "no medals for country");
        return Outcome::Empty;
    }

    let rows: Vec<YearCount> = count_by(awards, |r| Some(r.year))
        .into_iter()
        .map(|(year, medals)| YearCount { year, medals })
        .collect();
    debug!(country = %country, editions = rows.len(), "yearwise medals");
    Outcome::Data(rows)
}

/// Medals won per sport and edition.
pub fn country_sport_heatmap(dataset: &Dataset, country: &Filter<String>) -> Outcome<Heatmap> {
    let awards = country_awards(dataset, country);
    if awards.is_empty() {
        debug!(country = %country, "no medals for country");
        return Outcome::Empty;
    }

    let heatmap = Heatmap::from_counts(count_by(awards, |r| Some((r.sport.as_str(), r.year))));
    debug!(
        country = %country,
        sports = heatmap.sports.len(),
        editions = heatmap.years.len(),
        "country sport heatmap"
    );
    Outcome::Data(heatmap)
}

/// The country's athletes with the most medal rows.
///
/// Counting follows [`top_athletes`](crate::top_athletes): every medal row
/// counts and the sport comes from the athlete's first row in the dataset.
pub fn top_athletes_for_country(
    dataset: &Dataset,
    country: &Filter<String>,
) -> Outcome<Vec<CountryAthleteRanking>> {
    let medal_rows: Vec<&EventRecord> = dataset
        .iter()
        .filter(|r| r.has_medal() && country.matches_str(r.region()))
        .collect();
    if medal_rows.is_empty() {
        debug!(country = %country, "no medal rows for country");
        return Outcome::Empty;
    }

    let ranked: Vec<(&str, usize)> = ranked_counts(medal_rows, |r| r.name.as_str())
        .into_iter()
        .take(TOP_COUNTRY_ATHLETES)
        .collect();
    let names: Vec<&str> = ranked.iter().map(|(name, _)| *name).collect();
    let first = first_occurrences(dataset, &names);

    let rows: Vec<CountryAthleteRanking> = ranked
        .into_iter()
        .map(|(name, medals)| CountryAthleteRanking {
            name: name.to_string(),
            medals,
            sport: first.get(name).map(|r| r.sport.clone()).unwrap_or_default(),
        })
        .collect();
    debug!(country = %country, rows = rows.len(), "top athletes for country");
    Outcome::Data(rows)
}
