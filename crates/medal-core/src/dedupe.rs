//! Row deduplication policies.
//!
//! The events table has one row per athlete, event and medal, so a team medal
//! appears once per team member. Counting medals requires collapsing those
//! rows to one per award ([`dedupe_awards`]); counting people requires one row
//! per athlete ([`dedupe_athletes`]). The two answer different questions and
//! are not interchangeable.

use std::collections::HashSet;
use std::hash::Hash;

use medal_model::{Dataset, EventRecord, Medal};

/// Identity of one award: the same medal in the same event of the same
/// edition, won by the same team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AwardKey<'a> {
    pub team: &'a str,
    pub noc: &'a str,
    pub games: &'a str,
    pub year: u32,
    pub city: &'a str,
    pub sport: &'a str,
    pub event: &'a str,
    pub medal: Option<Medal>,
}

impl<'a> AwardKey<'a> {
    pub fn of(record: &'a EventRecord) -> Self {
        Self {
            team: &record.team,
            noc: &record.noc,
            games: &record.games,
            year: record.year,
            city: &record.city,
            sport: &record.sport,
            event: &record.event,
            medal: record.medal,
        }
    }
}

/// Identity of one athlete: name plus resolved region (a missing region is a
/// value of its own).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AthleteKey<'a> {
    pub name: &'a str,
    pub region: Option<&'a str>,
}

impl<'a> AthleteKey<'a> {
    pub fn of(record: &'a EventRecord) -> Self {
        Self {
            name: &record.name,
            region: record.region(),
        }
    }
}

/// Keeps the first row for each distinct key, preserving input order.
pub fn dedupe_by<'a, I, K, F>(rows: I, key: F) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
    K: Eq + Hash,
    F: Fn(&'a EventRecord) -> K,
{
    let mut seen = HashSet::new();
    rows.into_iter()
        .filter(|record| seen.insert(key(*record)))
        .collect()
}

/// One row per award over the whole dataset.
pub fn dedupe_awards(dataset: &Dataset) -> Vec<&EventRecord> {
    awards_of(dataset)
}

/// One row per distinct (name, region) athlete over the whole dataset.
pub fn dedupe_athletes(dataset: &Dataset) -> Vec<&EventRecord> {
    athletes_of(dataset)
}

/// Award policy applied to an arbitrary view.
pub fn awards_of<'a, I>(rows: I) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    dedupe_by(rows, AwardKey::of)
}

/// Athlete policy applied to an arbitrary view.
pub fn athletes_of<'a, I>(rows: I) -> Vec<&'a EventRecord>
where
    I: IntoIterator<Item = &'a EventRecord>,
{
    dedupe_by(rows, AthleteKey::of)
}
