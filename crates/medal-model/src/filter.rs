//! Filter values for the year, country and sport dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Caller-facing sentinel meaning "no constraint on this dimension".
pub const OVERALL: &str = "Overall";

/// A constraint on one filter dimension.
///
/// `All` aggregates across every value of the dimension; `Exact` keeps only
/// rows whose value equals the given one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Filter<T> {
    #[default]
    All,
    Exact(T),
}

impl<T> Filter<T> {
    pub fn exact(value: impl Into<T>) -> Self {
        Filter::Exact(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Filter::All)
    }

    /// The selected value, if any.
    pub fn as_exact(&self) -> Option<&T> {
        match self {
            Filter::All => None,
            Filter::Exact(value) => Some(value),
        }
    }
}

impl<T: PartialEq> Filter<T> {
    /// Returns true if `value` passes this filter.
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Exact(expected) => expected == value,
        }
    }
}

impl Filter<String> {
    /// Matches an optional string column; a missing value only passes `All`.
    pub fn matches_str(&self, value: Option<&str>) -> bool {
        match self {
            Filter::All => true,
            Filter::Exact(expected) => value == Some(expected.as_str()),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str(OVERALL),
            Filter::Exact(value) => write!(f, "{value}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        let filter: Filter<u32> = Filter::All;
        assert!(filter.matches(&1896));
        assert!(filter.matches(&2016));
        assert!(Filter::<String>::All.matches_str(None));
    }

    #[test]
    fn exact_matches_only_its_value() {
        let filter: Filter<String> = Filter::exact("USA");
        assert!(filter.matches_str(Some("USA")));
        assert!(!filter.matches_str(Some("UK")));
        assert!(!filter.matches_str(None));
        assert_eq!(filter.as_exact().map(String::as_str), Some("USA"));
    }

    #[test]
    fn display_uses_sentinel_for_all() {
        assert_eq!(Filter::<u32>::All.to_string(), "Overall");
        assert_eq!(Filter::Exact(2004u32).to_string(), "2004");
    }
}
