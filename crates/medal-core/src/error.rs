use std::fmt;

use thiserror::Error;

/// Dimension a filter value applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDimension {
    Year,
    Country,
    Sport,
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FilterDimension::Year => "year",
            FilterDimension::Country => "country",
            FilterDimension::Sport => "sport",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The value is neither the "Overall" sentinel nor part of the dataset's
    /// domain for that dimension.
    #[error("invalid {dimension} filter value '{value}'")]
    InvalidFilterValue {
        dimension: FilterDimension,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, QueryError>;
