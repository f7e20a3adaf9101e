use serde::{Deserialize, Serialize};

use crate::enums::{Medal, Sex};

/// Per-row medal indicators.
///
/// Each field is 1 when the row won that medal and 0 otherwise, so a group's
/// medal counts are plain sums over its rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedalIndicators {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalIndicators {
    pub fn from_medal(medal: Option<Medal>) -> Self {
        match medal {
            Some(Medal::Gold) => Self {
                gold: 1,
                ..Self::default()
            },
            Some(Medal::Silver) => Self {
                silver: 1,
                ..Self::default()
            },
            Some(Medal::Bronze) => Self {
                bronze: 1,
                ..Self::default()
            },
            None => Self::default(),
        }
    }

    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }
}

impl std::ops::AddAssign for MedalIndicators {
    fn add_assign(&mut self, other: Self) {
        self.gold += other.gold;
        self.silver += other.silver;
        self.bronze += other.bronze;
    }
}

/// One row of the canonical dataset: an athlete's entry in one event of one
/// edition, with the region already resolved from the NOC code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub sex: Sex,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team: String,
    pub noc: String,
    /// Edition label, e.g. "1992 Summer".
    pub games: String,
    pub year: u32,
    pub season: String,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
    /// Resolved through the region mapping; `None` for unmapped NOC codes.
    pub region: Option<String>,
    pub indicators: MedalIndicators,
}

impl EventRecord {
    pub fn has_medal(&self) -> bool {
        self.medal.is_some()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

/// One entry of the NOC-to-region mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionEntry {
    pub noc: String,
    pub region: Option<String>,
    pub notes: Option<String>,
}
