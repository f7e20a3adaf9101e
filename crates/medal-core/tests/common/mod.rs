//! Shared fixtures for the engine integration tests.

#![allow(dead_code)]

#[path = "../../src/test_support.rs"]
mod test_support;

use medal_model::{Dataset, Medal, Sex};

pub(crate) use test_support::RecordBuilder;

/// A small multi-edition dataset covering team medals, unmapped NOC codes,
/// non-medalling athletes and both sexes.
pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![
        // 2004 USA rowing eight: two rows for one team gold.
        RecordBuilder::new("Rower One")
            .medal(Medal::Gold)
            .body(27.0, 195.0, 95.0)
            .build(),
        RecordBuilder::new("Rower Two")
            .medal(Medal::Gold)
            .body(29.0, 198.0, 99.0)
            .build(),
        // Non-medalling swimmer.
        RecordBuilder::new("Swimmer")
            .noc("AUS")
            .team("Australia")
            .region(Some("Australia"))
            .sport("Swimming")
            .event("Swimming Men's 100 metres Freestyle")
            .body(22.0, 190.0, 84.0)
            .build(),
        // Athlete from an unmapped NOC.
        RecordBuilder::new("Refugee")
            .noc("ROT")
            .team("Refugee Olympic Team")
            .region(None)
            .sport("Judo")
            .event("Judo Men's Middleweight")
            .medal(Medal::Bronze)
            .build(),
        // 2008 edition.
        RecordBuilder::new("Sprinter")
            .noc("JAM")
            .team("Jamaica")
            .region(Some("Jamaica"))
            .year(2008)
            .city("Beijing")
            .sport("Athletics")
            .event("Athletics Women's 100 metres")
            .sex(Sex::Female)
            .medal(Medal::Gold)
            .body(21.0, 160.0, 52.0)
            .build(),
        RecordBuilder::new("Rower One")
            .year(2008)
            .city("Beijing")
            .medal(Medal::Silver)
            .build(),
    ])
}
