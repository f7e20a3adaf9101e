//! Record builder shared by the unit tests and, through `tests/common`, the
//! integration tests.

#![allow(dead_code)]

use medal_model::{EventRecord, Medal, MedalIndicators, Sex};

/// Builds records for unit tests; defaults describe a USA rower in 2004.
pub(crate) struct RecordBuilder {
    record: EventRecord,
}

impl RecordBuilder {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            record: EventRecord {
                name: name.to_string(),
                sex: Sex::Male,
                age: None,
                height: None,
                weight: None,
                team: "United States".to_string(),
                noc: "USA".to_string(),
                games: "2004 Summer".to_string(),
                year: 2004,
                season: "Summer".to_string(),
                city: "Athina".to_string(),
                sport: "Rowing".to_string(),
                event: "Rowing Men's Coxed Eights".to_string(),
                medal: None,
                region: Some("USA".to_string()),
                indicators: MedalIndicators::default(),
            },
        }
    }

    pub(crate) fn medal(mut self, medal: Medal) -> Self {
        self.record.medal = Some(medal);
        self
    }

    pub(crate) fn event(mut self, event: &str) -> Self {
        self.record.event = event.to_string();
        self
    }

    pub(crate) fn sport(mut self, sport: &str) -> Self {
        self.record.sport = sport.to_string();
        self
    }

    pub(crate) fn region(mut self, region: Option<&str>) -> Self {
        self.record.region = region.map(str::to_string);
        self
    }

    pub(crate) fn year(mut self, year: u32) -> Self {
        self.record.year = year;
        self.record.games = format!("{year} Summer");
        self
    }

    pub(crate) fn team(mut self, team: &str) -> Self {
        self.record.team = team.to_string();
        self
    }

    pub(crate) fn noc(mut self, noc: &str) -> Self {
        self.record.noc = noc.to_string();
        self
    }

    pub(crate) fn city(mut self, city: &str) -> Self {
        self.record.city = city.to_string();
        self
    }

    pub(crate) fn body(mut self, age: f64, height: f64, weight: f64) -> Self {
        self.record.age = Some(age);
        self.record.height = Some(height);
        self.record.weight = Some(weight);
        self
    }

    pub(crate) fn sex(mut self, sex: Sex) -> Self {
        self.record.sex = sex;
        self
    }

    pub(crate) fn build(mut self) -> EventRecord {
        self.record.indicators = MedalIndicators::from_medal(self.record.medal);
        self.record
    }
}
