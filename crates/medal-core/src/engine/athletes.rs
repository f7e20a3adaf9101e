use std::collections::{HashMap, HashSet};

use tracing::debug;

use medal_model::{Dataset, EventRecord, Filter, Medal, MedalCategory, Sex};

use crate::dedupe::dedupe_athletes;
use crate::group::{group_aggregate, ranked_counts};
use crate::tables::{AgeDistribution, AgeSeries, AthleteProfile, AthleteRanking, SexParticipation};

/// Number of athletes in the overall ranking.
pub const TOP_ATHLETES: usize = 15;

/// First row of each wanted athlete name, in canonical dataset order.
///
/// An athlete who competed in several sports or for several regions resolves
/// to whichever row comes first.
pub(crate) fn first_occurrences<'a>(
    dataset: &'a Dataset,
    names: &[&str],
) -> HashMap<&'a str, &'a EventRecord> {
    let wanted: HashSet<&str> = names.iter().copied().collect();
    let mut first = HashMap::with_capacity(wanted.len());
    for record in dataset {
        if first.len() == wanted.len() {
            break;
        }
        if wanted.contains(record.name.as_str()) {
            first.entry(record.name.as_str()).or_insert(record);
        }
    }
    first
}

/// Athletes with the most medal rows, optionally within one sport.
///
/// Every medal row counts, including each member's row of a team medal.
/// Sport and region come from the athlete's first row in the whole dataset.
pub fn top_athletes(dataset: &Dataset, sport: &Filter<String>) -> Vec<AthleteRanking> {
    let medal_rows = dataset
        .iter()
        .filter(|r| r.has_medal() && sport.matches(&r.sport));
    let ranked: Vec<(&str, usize)> = ranked_counts(medal_rows, |r| r.name.as_str())
        .into_iter()
        .take(TOP_ATHLETES)
        .collect();

    let names: Vec<&str> = ranked.iter().map(|(name, _)| *name).collect();
    let first = first_occurrences(dataset, &names);
    let rows: Vec<AthleteRanking> = ranked
        .into_iter()
        .map(|(name, medals)| {
            let origin = first.get(name);
            AthleteRanking {
                name: name.to_string(),
                medals,
                sport: origin.map(|r| r.sport.clone()).unwrap_or_default(),
                region: origin.and_then(|r| r.region.clone()),
            }
        })
        .collect();

    debug!(sport = %sport, rows = rows.len(), "top athletes");
    rows
}

/// Unique athletes with their body measurements and medal outcome.
///
/// The sport filter applies after deduplication, so an athlete appears under
/// the sport of their first row. The result is not truncated.
pub fn height_weight_by_sport(dataset: &Dataset, sport: &Filter<String>) -> Vec<AthleteProfile> {
    let rows: Vec<AthleteProfile> = dedupe_athletes(dataset)
        .into_iter()
        .filter(|r| sport.matches(&r.sport))
        .map(|r| AthleteProfile {
            name: r.name.clone(),
            sex: r.sex,
            age: r.age,
            height: r.height,
            weight: r.weight,
            sport: r.sport.clone(),
            region: r.region.clone(),
            medal: MedalCategory::from(r.medal),
        })
        .collect();

    debug!(sport = %sport, rows = rows.len(), "height and weight by sport");
    rows
}

/// Distinct male and female athletes per edition, ascending by year.
///
/// A year in which only one sex competed reports zero for the other.
pub fn sex_participation_over_time(dataset: &Dataset) -> Vec<SexParticipation> {
    let groups = group_aggregate(
        dedupe_athletes(dataset),
        |r| Some(r.year),
        || (0usize, 0usize),
        |(male, female), r| match r.sex {
            Sex::Male => *male += 1,
            Sex::Female => *female += 1,
        },
    );
    let rows: Vec<SexParticipation> = groups
        .into_iter()
        .map(|(year, (male, female))| SexParticipation { year, male, female })
        .collect();

    debug!(editions = rows.len(), "participation by sex");
    rows
}

/// Ages of unique athletes, overall and per medal.
pub fn age_distribution(dataset: &Dataset) -> AgeDistribution {
    let athletes = dedupe_athletes(dataset);
    let ages = |medal: Option<Medal>| -> Vec<f64> {
        athletes
            .iter()
            .filter(|r| medal.is_none() || r.medal == medal)
            .filter_map(|r| r.age)
            .collect()
    };

    AgeDistribution {
        overall: AgeSeries::new("Overall Age", ages(None)),
        gold: AgeSeries::new("Gold Medalist", ages(Some(Medal::Gold))),
        silver: AgeSeries::new("Silver Medalist", ages(Some(Medal::Silver))),
        bronze: AgeSeries::new("Bronze Medalist", ages(Some(Medal::Bronze))),
    }
}
