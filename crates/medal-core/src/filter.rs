//! Filter composition: turning raw selections into [`Filter`] values.
//!
//! Callers pick values from the lists produced by
//! [`list_years_and_countries`](crate::list_years_and_countries) and
//! [`list_sports`](crate::list_sports). [`FilterDomain`] checks a raw selection
//! against those same domains so that a typo fails fast instead of looking
//! like a valid filter with no data.

use std::collections::BTreeSet;

use medal_model::{Dataset, Filter, OVERALL};

use crate::error::{FilterDimension, QueryError, Result};

/// Valid values of each filter dimension for one dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDomain {
    years: BTreeSet<u32>,
    countries: BTreeSet<String>,
    sports: BTreeSet<String>,
}

impl FilterDomain {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            years: distinct_years(dataset),
            countries: distinct_regions(dataset),
            sports: distinct_sports(dataset),
        }
    }

    pub fn years(&self) -> &BTreeSet<u32> {
        &self.years
    }

    pub fn countries(&self) -> &BTreeSet<String> {
        &self.countries
    }

    pub fn sports(&self) -> &BTreeSet<String> {
        &self.sports
    }

    pub fn year(&self, raw: &str) -> Result<Filter<u32>> {
        let raw = raw.trim();
        if raw == OVERALL {
            return Ok(Filter::All);
        }
        raw.parse::<u32>()
            .ok()
            .filter(|year| self.years.contains(year))
            .map(Filter::Exact)
            .ok_or_else(|| invalid(FilterDimension::Year, raw))
    }

    pub fn country(&self, raw: &str) -> Result<Filter<String>> {
        resolve_text(&self.countries, FilterDimension::Country, raw)
    }

    pub fn sport(&self, raw: &str) -> Result<Filter<String>> {
        resolve_text(&self.sports, FilterDimension::Sport, raw)
    }
}

fn resolve_text(
    domain: &BTreeSet<String>,
    dimension: FilterDimension,
    raw: &str,
) -> Result<Filter<String>> {
    let raw = raw.trim();
    if raw == OVERALL {
        Ok(Filter::All)
    } else if domain.contains(raw) {
        Ok(Filter::Exact(raw.to_string()))
    } else {
        Err(invalid(dimension, raw))
    }
}

fn invalid(dimension: FilterDimension, raw: &str) -> QueryError {
    QueryError::InvalidFilterValue {
        dimension,
        value: raw.to_string(),
    }
}

pub(crate) fn distinct_years(dataset: &Dataset) -> BTreeSet<u32> {
    dataset.iter().map(|r| r.year).collect()
}

pub(crate) fn distinct_regions(dataset: &Dataset) -> BTreeSet<String> {
    dataset
        .iter()
        .filter_map(|r| r.region.clone())
        .collect()
}

pub(crate) fn distinct_sports(dataset: &Dataset) -> BTreeSet<String> {
    dataset.iter().map(|r| r.sport.clone()).collect()
}

/// Prepends the sentinel to an ordered domain.
pub(crate) fn with_overall<I>(values: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: ToString,
{
    std::iter::once(OVERALL.to_string())
        .chain(values.into_iter().map(|value| value.to_string()))
        .collect()
}
