use std::collections::BTreeMap;

use tracing::debug;

use medal_model::{Dataset, Filter, MedalIndicators};

use crate::dedupe::dedupe_awards;
use crate::group::group_aggregate;
use crate::tables::{MedalTally, TallyGrouping, TallyKey, TallyRow};

/// Gold, silver and bronze counts per country or per edition.
///
/// Awards are deduplicated first so a team medal counts once. Without a
/// country filter the table has one row per region (rows with no resolved
/// region are not grouped); with one, it has one row per year for that
/// country. Rows are in ascending key order.
pub fn medal_tally(dataset: &Dataset, year: &Filter<u32>, country: &Filter<String>) -> MedalTally {
    let awards = dedupe_awards(dataset);
    let selected = awards
        .into_iter()
        .filter(|r| year.matches(&r.year) && country.matches_str(r.region()));

    let tally = if country.is_all() {
        let groups = group_aggregate(
            selected,
            |r| r.region(),
            MedalIndicators::default,
            |acc, r| *acc += r.indicators,
        );
        MedalTally {
            grouping: TallyGrouping::Region,
            rows: tally_rows(groups, |region| TallyKey::Region(region.to_string())),
        }
    } else {
        let groups = group_aggregate(
            selected,
            |r| Some(r.year),
            MedalIndicators::default,
            |acc, r| *acc += r.indicators,
        );
        MedalTally {
            grouping: TallyGrouping::Year,
            rows: tally_rows(groups, TallyKey::Year),
        }
    };

    debug!(
        year = %year,
        country = %country,
        rows = tally.rows.len(),
        "medal tally"
    );
    tally
}

fn tally_rows<K>(
    groups: BTreeMap<K, MedalIndicators>,
    to_key: impl Fn(K) -> TallyKey,
) -> Vec<TallyRow> {
    groups
        .into_iter()
        .map(|(key, medals)| TallyRow {
            key: to_key(key),
            gold: medals.gold,
            silver: medals.silver,
            bronze: medals.bronze,
            total: medals.total(),
        })
        .collect()
}
