//! Type-safe enumerations for event-record fields.
//!
//! The raw results table stores medal and sex as free text. These enums give
//! the normalized dataset a closed set of values so downstream aggregation
//! never has to compare strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Medal won on a single event row.
///
/// A row without a medal is represented as `Option::<Medal>::None` on the
/// record, never as a fourth variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// All medals in podium order.
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    /// Returns the canonical name as it appears in the results table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Medal {
    type Err = String;

    /// Accepts only the canonical names, matched exactly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Medal::ALL
            .into_iter()
            .find(|medal| medal.as_str() == s)
            .ok_or_else(|| format!("unknown medal: {s}"))
    }
}

/// Medal outcome with an explicit category for athletes who did not medal.
///
/// Used by distribution views where "no medal" must be a groupable value of
/// its own rather than a missing field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MedalCategory {
    Gold,
    Silver,
    Bronze,
    #[serde(rename = "No Medal")]
    NoMedal,
}

impl MedalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedalCategory::Gold => "Gold",
            MedalCategory::Silver => "Silver",
            MedalCategory::Bronze => "Bronze",
            MedalCategory::NoMedal => "No Medal",
        }
    }
}

impl From<Option<Medal>> for MedalCategory {
    fn from(medal: Option<Medal>) -> Self {
        match medal {
            Some(Medal::Gold) => MedalCategory::Gold,
            Some(Medal::Silver) => MedalCategory::Silver,
            Some(Medal::Bronze) => MedalCategory::Bronze,
            None => MedalCategory::NoMedal,
        }
    }
}

impl fmt::Display for MedalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Athlete sex as recorded in the results table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Returns the single-letter code used in the source data.
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Sex::Male),
            "F" => Ok(Sex::Female),
            other => Err(format!("unknown sex code: {other}")),
        }
    }
}
