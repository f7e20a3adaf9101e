//! Tests for medal-model types.

use medal_model::{Dataset, EventRecord, Medal, MedalIndicators, Sex};

fn record(name: &str, medal: Option<Medal>) -> EventRecord {
    EventRecord {
        name: name.to_string(),
        sex: Sex::Female,
        age: Some(24.0),
        height: None,
        weight: None,
        team: "Norway".to_string(),
        noc: "NOR".to_string(),
        games: "1994 Summer".to_string(),
        year: 1994,
        season: "Summer".to_string(),
        city: "Lillehammer".to_string(),
        sport: "Biathlon".to_string(),
        event: "Biathlon Women's 15 kilometres".to_string(),
        medal,
        region: Some("Norway".to_string()),
        indicators: MedalIndicators::from_medal(medal),
    }
}

#[test]
fn indicators_mark_exactly_one_medal() {
    for medal in Medal::ALL {
        let indicators = MedalIndicators::from_medal(Some(medal));
        assert_eq!(indicators.total(), 1);
    }
    assert_eq!(MedalIndicators::from_medal(None).total(), 0);
    assert_eq!(MedalIndicators::from_medal(Some(Medal::Silver)).silver, 1);
}

#[test]
fn dataset_clones_share_rows() {
    let dataset = Dataset::new(vec![record("A", Some(Medal::Gold)), record("B", None)]);
    let clone = dataset.clone();

    assert_eq!(clone.len(), 2);
    assert!(std::ptr::eq(dataset.records(), clone.records()));
}

#[test]
fn dataset_is_readable_from_other_threads() {
    let dataset = Dataset::new(vec![record("A", Some(Medal::Gold))]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = dataset.clone();
            std::thread::spawn(move || shared.iter().filter(|r| r.has_medal()).count())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("reader thread"), 1);
    }
}

#[test]
fn record_serializes_sex_code_and_medal() {
    let json = serde_json::to_value(record("A", Some(Medal::Bronze))).expect("serialize record");
    assert_eq!(json["sex"], "F");
    assert_eq!(json["medal"], "Bronze");
    assert_eq!(json["indicators"]["bronze"], 1);
}
