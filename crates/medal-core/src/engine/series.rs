use tracing::debug;

use medal_model::{Dataset, EventRecord};

use crate::dedupe::dedupe_by;
use crate::group::count_by;
use crate::tables::{Dimension, EditionCount, Heatmap, TimeSeries};

fn dimension_value(record: &EventRecord, dimension: Dimension) -> Option<&str> {
    match dimension {
        Dimension::Region => record.region(),
        Dimension::Event => Some(&record.event),
        Dimension::Athlete => Some(&record.name),
    }
}

/// Distinct values of `dimension` per edition, ascending by year.
///
/// A missing region counts as one value of its own.
pub fn series_over_time(dataset: &Dataset, dimension: Dimension) -> TimeSeries {
    let distinct = dedupe_by(dataset, |r| (r.year, dimension_value(r, dimension)));
    let points: Vec<EditionCount> = count_by(distinct, |r| Some(r.year))
        .into_iter()
        .map(|(edition, count)| EditionCount { edition, count })
        .collect();

    debug!(dimension = dimension.label(), editions = points.len(), "series over time");
    TimeSeries { dimension, points }
}

/// Number of distinct events per sport and edition.
pub fn events_per_sport_heatmap(dataset: &Dataset) -> Heatmap {
    let events = dedupe_by(dataset, |r| (r.year, r.sport.as_str(), r.event.as_str()));
    let cells = count_by(events, |r| Some((r.sport.as_str(), r.year)));
    let heatmap = Heatmap::from_counts(cells);

    debug!(
        sports = heatmap.sports.len(),
        editions = heatmap.years.len(),
        "events per sport heatmap"
    );
    heatmap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordBuilder;

    fn dataset() -> Dataset {
        Dataset::new(vec![
            RecordBuilder::new("A").year(2000).event("100m").build(),
            RecordBuilder::new("B").year(2000).event("100m").region(Some("UK")).build(),
            RecordBuilder::new("C").year(2000).event("200m").region(None).build(),
            RecordBuilder::new("A").year(2004).event("100m").build(),
        ])
    }

    #[test]
    fn nations_per_edition_count_missing_region_once() {
        let series = series_over_time(&dataset(), Dimension::Region);
        assert_eq!(
            series.points,
            vec![
                EditionCount { edition: 2000, count: 3 },
                EditionCount { edition: 2004, count: 1 },
            ]
        );
    }

    #[test]
    fn events_and_athletes_per_edition() {
        let events = series_over_time(&dataset(), Dimension::Event);
        assert_eq!(events.points[0].count, 2);
        assert_eq!(events.points[1].count, 1);

        let athletes = series_over_time(&dataset(), Dimension::Athlete);
        assert_eq!(athletes.points[0].count, 3);
        assert_eq!(athletes.points[1].count, 1);
    }

    #[test]
    fn heatmap_counts_distinct_events() {
        let dataset = Dataset::new(vec![
            RecordBuilder::new("A").year(2000).event("100m").sport("Athletics").build(),
            RecordBuilder::new("B").year(2000).event("100m").sport("Athletics").build(),
            RecordBuilder::new("C").year(2000).event("200m").sport("Athletics").build(),
            RecordBuilder::new("D").year(2004).event("K1").sport("Canoeing").build(),
        ]);

        let heatmap = events_per_sport_heatmap(&dataset);
        assert_eq!(heatmap.get("Athletics", 2000), Some(2));
        assert_eq!(heatmap.get("Athletics", 2004), Some(0));
        assert_eq!(heatmap.get("Canoeing", 2004), Some(1));
    }
}
