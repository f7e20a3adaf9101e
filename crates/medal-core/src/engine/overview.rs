use std::collections::HashSet;

use medal_model::{Dataset, EventRecord};

use crate::tables::OverviewStats;

fn distinct<'a, T, F>(dataset: &'a Dataset, value: F) -> usize
where
    T: Eq + std::hash::Hash,
    F: Fn(&'a EventRecord) -> Option<T>,
{
    dataset.iter().filter_map(value).collect::<HashSet<T>>().len()
}

/// Headline counts: editions, host cities, sports, events, athletes and
/// nations (regions with a resolved name).
///
/// `editions` is the number of distinct Summer years, with no adjustment for
/// the 1906 Intercalated Games. When 1906 is present it is one higher than a
/// count that excludes that year.
pub fn overview_stats(dataset: &Dataset) -> OverviewStats {
    OverviewStats {
        editions: distinct(dataset, |r| Some(r.year)),
        hosts: distinct(dataset, |r| Some(r.city.as_str())),
        sports: distinct(dataset, |r| Some(r.sport.as_str())),
        events: distinct(dataset, |r| Some(r.event.as_str())),
        athletes: distinct(dataset, |r| Some(r.name.as_str())),
        nations: distinct(dataset, EventRecord::region),
    }
}
